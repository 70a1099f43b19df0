//! Numeric formatting for path text.
//!
//! Every coordinate that ends up in a path string goes through [`round`], so
//! identical inputs always produce byte-identical text.

use crate::defaults::COORD_DIGITS;

/// Round `value` to `digits` decimal places.
///
/// The value is scaled by `10^digits`, rounded to the nearest integer with
/// halves going toward positive infinity, and scaled back. `digits == 0`
/// rounds to the nearest integer.
pub fn round(value: f64, digits: u32) -> f64 {
    if digits == 0 {
        return round_half_up(value);
    }
    let scale = 10f64.powi(digits as i32);
    round_half_up(value * scale) / scale
}

/// Round to the default coordinate precision.
#[inline]
pub fn round_coord(value: f64) -> f64 {
    round(value, COORD_DIGITS)
}

/// `f64::round` sends halves away from zero; negative halves must go up.
fn round_half_up(value: f64) -> f64 {
    let rounded = value.round();
    if value - rounded == 0.5 {
        rounded + 1.0
    } else {
        rounded
    }
}

/// Render a number the way it appears in path text.
///
/// Integers print without a fractional part and negative zero prints as `0`.
pub fn fmt_num(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{}", value)
}
