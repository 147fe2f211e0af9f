//! Fixed-shape argument scanner.
//!
//! The argument list (program name excluded) must hold exactly
//! [`EXPECTED_ARG_COUNT`] tokens. Tokens are then read left to right:
//! a recognized flag consumes the next token as its value, anything else is
//! passed to the caller as an unknown token and skipped.
use tracing::{debug, warn};

use crate::core::numeric::parse_float_prefix;
use crate::error::{Error, Result};
use crate::types::{Dimensions, Flag};

/// Two flag/value pairs.
pub const EXPECTED_ARG_COUNT: usize = 4;

/// Scan `args` into [`Dimensions`].
///
/// `on_unknown` is called once per unrecognized token, in order; an error it
/// returns stops the scan. The count check runs before any token is looked
/// at. A flag in last position has no value and fails with
/// [`Error::MissingValue`]. Repeated flags overwrite earlier values.
pub fn scan_args<S, F>(args: &[S], mut on_unknown: F) -> Result<Dimensions>
where
    S: AsRef<str>,
    F: FnMut(&str) -> Result<()>,
{
    if args.len() != EXPECTED_ARG_COUNT {
        return Err(Error::Usage {
            expected: EXPECTED_ARG_COUNT,
            got: args.len(),
        });
    }

    let mut height = 0.0;
    let mut width = 0.0;
    let mut tokens = args.iter().map(AsRef::as_ref);

    while let Some(token) = tokens.next() {
        match Flag::from_token(token) {
            Some(flag) => {
                let text = tokens.next().ok_or(Error::MissingValue { flag })?;
                let value = parse_float_prefix(text);
                debug!(%flag, text, value, "parsed flag value");
                match flag {
                    Flag::Height => height = value,
                    Flag::Width => width = value,
                }
            }
            None => {
                warn!(token, "unrecognized parameter");
                on_unknown(token)?;
            }
        }
    }

    Ok(Dimensions::new(height, width))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(args: &[&str]) -> (Result<Dimensions>, Vec<String>) {
        let mut unknown = Vec::new();
        let result = scan_args(args, |token| {
            unknown.push(token.to_string());
            Ok(())
        });
        (result, unknown)
    }

    #[test]
    fn height_then_width() {
        let (result, unknown) = scan(&["--height", "3", "--width", "4"]);
        assert_eq!(result.unwrap(), Dimensions::new(3.0, 4.0));
        assert!(unknown.is_empty());
    }

    #[test]
    fn order_does_not_matter() {
        let (a, _) = scan(&["--height", "3", "--width", "4"]);
        let (b, _) = scan(&["--width", "4", "--height", "3"]);
        assert_eq!(a.unwrap(), b.unwrap());
    }

    #[test]
    fn wrong_count_is_rejected_before_scanning() {
        for args in [
            &[][..],
            &["--height", "3"][..],
            &["--height", "3", "--width"][..],
            &["--foo", "1", "--height", "3", "--width", "4"][..],
        ] {
            let (result, unknown) = scan(args);
            match result {
                Err(Error::Usage { expected, got }) => {
                    assert_eq!(expected, EXPECTED_ARG_COUNT);
                    assert_eq!(got, args.len());
                }
                other => panic!("expected usage error for {args:?}, got {other:?}"),
            }
            assert!(unknown.is_empty(), "no token may be inspected for {args:?}");
        }
    }

    #[test]
    fn unknown_tokens_are_reported_and_skipped() {
        let (result, unknown) = scan(&["--height", "3", "--bar", "4"]);
        assert_eq!(result.unwrap(), Dimensions::new(3.0, 0.0));
        assert_eq!(unknown, ["--bar", "4"]);
    }

    #[test]
    fn consumed_value_is_never_a_flag() {
        let (result, unknown) = scan(&["--height", "--width", "3", "4"]);
        assert_eq!(result.unwrap(), Dimensions::new(0.0, 0.0));
        assert_eq!(unknown, ["3", "4"]);
    }

    #[test]
    fn last_occurrence_wins() {
        let (result, _) = scan(&["--width", "2", "--width", "9"]);
        assert_eq!(result.unwrap(), Dimensions::new(0.0, 9.0));
    }

    #[test]
    fn trailing_flag_is_missing_its_value() {
        let (result, unknown) = scan(&["--height", "3", "--bar", "--width"]);
        assert!(matches!(
            result,
            Err(Error::MissingValue { flag: Flag::Width })
        ));
        assert_eq!(unknown, ["--bar"]);
    }

    #[test]
    fn values_parse_tolerantly() {
        let (result, _) = scan(&["--height", "2.5cm", "--width", "wide"]);
        assert_eq!(result.unwrap(), Dimensions::new(2.5, 0.0));
    }

    #[test]
    fn callback_errors_stop_the_scan() {
        let mut calls = 0;
        let result = scan_args(&["--a", "--b", "--c", "--d"], |_| {
            calls += 1;
            Err(std::io::Error::from(std::io::ErrorKind::BrokenPipe).into())
        });
        assert!(matches!(result, Err(Error::Io(_))));
        assert_eq!(calls, 1);
    }
}
