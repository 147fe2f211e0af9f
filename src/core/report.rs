//! Result line rendering.
//!
//! Numbers are printed the way C `printf("%.f")` prints a `float`: widened
//! to `f64`, zero fractional digits, ties rounded to even on the exact
//! binary value.
use std::fmt;

use crate::core::area::area;
use crate::types::Dimensions;

/// Parsed dimensions together with their computed area.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AreaReport {
    pub dimensions: Dimensions,
    pub area: f32,
}

impl AreaReport {
    pub fn new(dimensions: Dimensions) -> Self {
        Self {
            dimensions,
            area: area(dimensions.height, dimensions.width),
        }
    }
}

impl fmt::Display for AreaReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Area(h={}, w={}) = {}",
            fixed0(self.dimensions.height),
            fixed0(self.dimensions.width),
            fixed0(self.area)
        )
    }
}

/// Render `value` with no fractional digits.
///
/// Display only; the stored value keeps full precision. Non-finite values
/// use the C spellings (`inf`, `-inf`, `nan`, `-nan`).
pub fn fixed0(value: f32) -> String {
    let sign = if value.is_sign_negative() { "-" } else { "" };
    if value.is_nan() {
        format!("{sign}nan")
    } else if value.is_infinite() {
        format!("{sign}inf")
    } else {
        format!("{:.0}", f64::from(value))
    }
}
