//! Tolerant float parsing with C `strtof` semantics.
//!
//! The longest numeric prefix of the input is converted and anything after
//! it is ignored. Input with no numeric prefix yields `0.0`. Nothing here
//! reports an error: overflow saturates to infinity and underflow rounds
//! towards zero.

/// Parse the longest `strtof`-style numeric prefix of `text`.
///
/// Accepted after optional C whitespace and an optional sign:
/// `inf`/`infinity` and `nan` (case-insensitive), hex floats (`0x1.8p3`),
/// and decimal floats with an optional exponent.
pub fn parse_float_prefix(text: &str) -> f32 {
    let bytes = text.as_bytes();
    let mut pos = bytes.iter().take_while(|&&b| is_c_space(b)).count();

    let negative = match bytes.get(pos) {
        Some(b'-') => {
            pos += 1;
            true
        }
        Some(b'+') => {
            pos += 1;
            false
        }
        _ => false,
    };

    let rest = &bytes[pos..];
    let magnitude = match special(rest).or_else(|| hex(rest)).or_else(|| decimal(rest)) {
        Some(value) => value,
        // No conversion: strtof returns a plain zero and ignores the sign.
        None => return 0.0,
    };

    if negative { -magnitude } else { magnitude }
}

/// `isspace` in the C locale.
fn is_c_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | 0x0b | 0x0c | b'\r')
}

fn starts_with_ignore_case(bytes: &[u8], prefix: &str) -> bool {
    bytes.len() >= prefix.len() && bytes[..prefix.len()].eq_ignore_ascii_case(prefix.as_bytes())
}

fn special(bytes: &[u8]) -> Option<f32> {
    if starts_with_ignore_case(bytes, "inf") {
        Some(f32::INFINITY)
    } else if starts_with_ignore_case(bytes, "nan") {
        // An optional "(n-char-sequence)" may follow; it only affects the
        // payload, which is never observed.
        Some(f32::NAN)
    } else {
        None
    }
}

fn hex(bytes: &[u8]) -> Option<f32> {
    if bytes.len() < 3 || bytes[0] != b'0' || !matches!(bytes[1], b'x' | b'X') {
        return None;
    }
    let body = &bytes[2..];

    // Mantissa bits kept exactly; further digits only move the exponent and
    // feed a sticky bit so rounding to f32 stays correct.
    const KEEP_BELOW: u64 = 1 << 48;
    let mut mantissa: u64 = 0;
    let mut exponent: i64 = 0;
    let mut sticky = false;
    let mut seen_digit = false;
    let mut seen_point = false;
    let mut pos = 0;

    while let Some(&b) = body.get(pos) {
        if b == b'.' && !seen_point {
            seen_point = true;
        } else if let Some(digit) = (b as char).to_digit(16) {
            seen_digit = true;
            if mantissa < KEEP_BELOW {
                mantissa = mantissa * 16 + u64::from(digit);
                if seen_point {
                    exponent -= 4;
                }
            } else {
                if !seen_point {
                    exponent += 4;
                }
                sticky |= digit != 0;
            }
        } else {
            break;
        }
        pos += 1;
    }

    if !seen_digit {
        // Only the leading "0" converts.
        return None;
    }

    if let Some(binary_exp) = exponent_suffix(&body[pos..], b'p') {
        exponent = exponent.saturating_add(binary_exp);
    }

    if mantissa == 0 {
        return Some(0.0);
    }
    if sticky {
        mantissa |= 1;
    }

    let exponent = exponent.clamp(-2000, 2000) as i32;
    Some((mantissa as f64 * 2f64.powi(exponent)) as f32)
}

fn decimal(bytes: &[u8]) -> Option<f32> {
    let int_len = bytes.iter().take_while(|b| b.is_ascii_digit()).count();
    let mut pos = int_len;
    let mut frac_len = 0;
    if bytes.get(pos) == Some(&b'.') {
        frac_len = bytes[pos + 1..].iter().take_while(|b| b.is_ascii_digit()).count();
        pos += 1;
    }
    if int_len == 0 && frac_len == 0 {
        return None;
    }

    let int_part = &bytes[..int_len];
    let frac_part = &bytes[pos..pos + frac_len];
    pos += frac_len;

    // Rebuilt in a canonical "I.Fe±X" form so `str::parse` sees one shape.
    let mut canonical = String::with_capacity(int_len + frac_len + 24);
    canonical.push_str(ascii(int_part).unwrap_or("0"));
    canonical.push('.');
    canonical.push_str(ascii(frac_part).unwrap_or("0"));
    if let Some(exp) = exponent_suffix(&bytes[pos..], b'e') {
        canonical.push('e');
        canonical.push_str(&exp.to_string());
    }

    Some(canonical.parse::<f32>().unwrap_or(0.0))
}

fn ascii(digits: &[u8]) -> Option<&str> {
    if digits.is_empty() {
        None
    } else {
        std::str::from_utf8(digits).ok()
    }
}

/// Parse `<marker>[+-]digits`, consumed only if at least one digit follows.
/// The value saturates far beyond any exponent that still changes an f32.
fn exponent_suffix(bytes: &[u8], marker: u8) -> Option<i64> {
    let (&first, rest) = bytes.split_first()?;
    if !first.eq_ignore_ascii_case(&marker) {
        return None;
    }
    let (negative, digits) = match rest.split_first() {
        Some((b'-', digits)) => (true, digits),
        Some((b'+', digits)) => (false, digits),
        _ => (false, rest),
    };
    let digits: Vec<u8> = digits.iter().take_while(|b| b.is_ascii_digit()).copied().collect();
    if digits.is_empty() {
        return None;
    }
    let value = digits
        .iter()
        .fold(0i64, |acc, d| (acc * 10 + i64::from(d - b'0')).min(1_000_000));
    Some(if negative { -value } else { value })
}
