//! Fixed-point decimal degrees.
//!
//! A coordinate is an `i64` equal to degrees × 10^15. Parsing is a
//! single left-to-right pass using integer arithmetic only:
//!
//! ```text
//! digit  → value += digit × multiplier; multiplier /= 10
//! '.'    → value, multiplier *= 10^(integer_digits - 1)
//! end    → same correction if no '.' was seen, then apply the sign
//! ```
//!
//! Every digit starts out at the 10^15 position and shifts down, so the
//! decimal point retroactively moves the integer part into place once
//! the number of integer digits is known.

use core::fmt;

use super::InputError;
use crate::config::{COORDINATE_FRACTION_DIGITS, COORDINATE_MULTIPLIER};

/// Parse one textual field (`[-]digits[.digits]`) into fixed-point degrees.
///
/// Bytes other than digits, a leading `-` and a single `.` preceded by a
/// digit make the field [`InputError::Malformed`]. Fractional digits
/// past the 15th are truncated. A magnitude too large for `i64` is
/// reported as [`InputError::OutOfRange`], but only after the whole field
/// has been checked for malformed bytes.
pub fn parse_coordinate(field: &[u8]) -> Result<i64, InputError> {
    let mut value: i64 = 0;
    let mut multiplier: i64 = COORDINATE_MULTIPLIER;
    let mut integer_digits: u32 = 0;
    let mut has_digits = false;
    let mut decimal_point = false;
    let mut negative = false;
    let mut overflow = false;

    for (i, &c) in field.iter().enumerate() {
        match c {
            b'0'..=b'9' => {
                has_digits = true;
                if !decimal_point {
                    // Redundant leading zeros would otherwise use up scale positions.
                    if c == b'0' && integer_digits == 1 && value == 0 {
                        continue;
                    }
                    integer_digits += 1;
                }
                if !overflow {
                    match value.checked_add(i64::from(c - b'0') * multiplier) {
                        Some(v) => value = v,
                        None => overflow = true,
                    }
                }
                multiplier /= 10;
            }
            b'-' if i == 0 => negative = true,
            b'.' if !decimal_point && integer_digits > 0 => {
                decimal_point = true;
                if !overflow {
                    overflow = !rescale(&mut value, &mut multiplier, integer_digits);
                }
            }
            _ => return Err(InputError::Malformed),
        }
    }

    if !has_digits {
        return Err(InputError::Malformed);
    }

    if !decimal_point && !overflow {
        overflow = !rescale(&mut value, &mut multiplier, integer_digits);
    }

    if overflow {
        return Err(InputError::OutOfRange);
    }

    Ok(if negative { -value } else { value })
}

/// Shift the accumulated digits up by `10^(integer_digits - 1)`.
/// Returns `false` if the result does not fit.
fn rescale(value: &mut i64, multiplier: &mut i64, integer_digits: u32) -> bool {
    let Some(factor) = 10i64.checked_pow(integer_digits.saturating_sub(1)) else {
        return false;
    };
    match (value.checked_mul(factor), multiplier.checked_mul(factor)) {
        (Some(v), Some(m)) => {
            *value = v;
            *multiplier = m;
            true
        }
        _ => false,
    }
}

/// Write `value` as `[-]<degrees>.<15 fractional digits>`.
pub fn write_degrees<W: fmt::Write>(w: &mut W, value: i64) -> fmt::Result {
    let sign = if value < 0 { "-" } else { "" };
    let magnitude = value.unsigned_abs();
    let scale = COORDINATE_MULTIPLIER.unsigned_abs();
    write!(
        w,
        "{}{}.{:0width$}",
        sign,
        magnitude / scale,
        magnitude % scale,
        width = COORDINATE_FRACTION_DIGITS as usize
    )
}

/// `Display` adapter for a fixed-point coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Degrees(pub i64);

impl fmt::Display for Degrees {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_degrees(f, self.0)
    }
}
