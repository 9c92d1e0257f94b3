//! Altitude series cleaning.
//!
//! Flight recorders occasionally log a wildly wrong altitude for a single
//! fix. [`clean_altitude_series`] replaces such readings in one greedy
//! left-to-right pass:
//!
//! - a value is kept when it differs from the previous *cleaned* value by
//!   less than `max_jump`;
//! - otherwise it becomes the midpoint of the previous cleaned value and the
//!   next raw value, or repeats the previous cleaned value at the end of the
//!   series.
//!
//! Interpolated values are not checked again, and a bad reading right after
//! a corrected one is compared against the correction.

use tracing::warn;

use crate::error::{Error, Result};

/// Default largest plausible altitude change between two fixes, in metres.
pub const DEFAULT_MAX_JUMP: i32 = 200;

/// Return a copy of `series` with implausible jumps interpolated.
///
/// Every detected jump is logged at WARN level with its index and size.
///
/// # Errors
///
/// Returns [`Error::EmptySeries`] if `series` is empty.
///
/// # Examples
///
/// ```
/// use barograph::cleaner::{clean_altitude_series, DEFAULT_MAX_JUMP};
///
/// let raw = [190, 200, 800, 220, 250, 54226, 260];
/// let cleaned = clean_altitude_series(&raw, DEFAULT_MAX_JUMP).unwrap();
/// assert_eq!(cleaned, [190, 200, 210, 220, 250, 255, 260]);
/// ```
pub fn clean_altitude_series(series: &[i32], max_jump: i32) -> Result<Vec<i32>> {
    let (&first, _) = series.split_first().ok_or(Error::EmptySeries)?;

    let mut cleaned = Vec::with_capacity(series.len());
    cleaned.push(first);
    let mut previous = first;

    for (index, &height) in series.iter().enumerate().skip(1) {
        let jump = (i64::from(height) - i64::from(previous)).abs();

        let value = if jump < i64::from(max_jump) {
            height
        } else {
            warn!(index, jump, "Faulty altitude record, height difference too large");
            match series.get(index + 1) {
                Some(&next) => midpoint(previous, next),
                None => previous,
            }
        };

        cleaned.push(value);
        previous = value;
    }

    Ok(cleaned)
}

/// Average of two altitudes, truncated toward zero.
#[allow(clippy::cast_possible_truncation)]
fn midpoint(a: i32, b: i32) -> i32 {
    // The mean of two i32 values always fits in an i32.
    ((i64::from(a) + i64::from(b)) / 2) as i32
}
