//! Fixed-width field decoding for IGC header and data records.
//!
//! Header lines are trimmed before prefix matching, so trailing `\r` from
//! files written on other platforms never hides a marker.
//!
//! B record layout (0-based, end exclusive):
//!
//! ```text
//! B HHMMSS DDMMmmm N DDDMMmmm E V PPPPP GGGGG [extensions...]
//! 0 1    7 7    14 14 15   23 23 24 25 30 30 35
//! ```

use chrono::NaiveTime;
use tracing::trace;

use super::fix::{FixValidity, PositionSample};
use crate::error::{Error, RecordError, Result};

/// Minimum length of a B record, in characters.
pub const B_RECORD_MIN_LEN: usize = 35;

/// Canonical date header marker (`HFDTE060723`).
pub const DATE_MARKER: &str = "HFDTE";

/// Long-form date header prefix (`HFDTEDATE:060723,01`).
pub const DATE_LONG_PREFIX: &str = "HFDTEDATE:";

const DATE_LONG_MARKER: &str = "HFDTEDATE";
const DATE_LEN: usize = 6;

const LAT_DEGREE_DIGITS: usize = 2;
const LON_DEGREE_DIGITS: usize = 3;
const MINUTE_DIGITS: usize = 5;

/// Find the raw `DDMMYY` date in a header section.
///
/// The canonical `HFDTE` form is preferred; `HFDTEDATE:` is the fallback.
/// Anything after the six date characters (such as the `,01` flight number
/// of newer loggers) is dropped.
///
/// # Errors
///
/// Returns [`Error::MissingHeader`] when neither form is present.
pub fn header_date<S: AsRef<str>>(lines: &[S]) -> Result<String> {
    let canonical = lines
        .iter()
        .map(|line| line.as_ref().trim())
        .find(|line| line.starts_with(DATE_MARKER) && !line.starts_with(DATE_LONG_MARKER))
        .and_then(|line| line.strip_prefix(DATE_MARKER));

    let raw = match canonical {
        Some(raw) => raw,
        None => lines
            .iter()
            .map(|line| line.as_ref().trim())
            .find_map(|line| line.strip_prefix(DATE_LONG_PREFIX))
            .ok_or_else(|| Error::missing_header(DATE_MARKER))?,
    };

    Ok(raw.trim().chars().take(DATE_LEN).collect())
}

/// Find the value of a header field.
///
/// Returns the first line starting with `marker`, with `prefix` (usually the
/// marker followed by a colon) removed and the value trimmed. Lines that carry
/// the marker without the colon have just the marker removed.
///
/// # Errors
///
/// Returns [`Error::MissingHeader`] when no line starts with `marker`.
pub fn header_field<S: AsRef<str>>(
    lines: &[S],
    marker: &'static str,
    prefix: &str,
) -> Result<String> {
    let line = lines
        .iter()
        .map(|line| line.as_ref().trim())
        .find(|line| line.starts_with(marker))
        .ok_or_else(|| Error::missing_header(marker))?;

    let value = line
        .strip_prefix(prefix)
        .or_else(|| line.strip_prefix(marker))
        .unwrap_or(line);

    Ok(value.trim().to_string())
}

/// Decode a `DDMMmmm` latitude into signed decimal degrees.
///
/// Only `S` negates the result. The value is not range-checked.
///
/// # Errors
///
/// Returns [`RecordError::NonNumeric`] unless `digits` is exactly seven digits.
pub fn parse_lat(digits: &str, hemisphere: char) -> std::result::Result<f64, RecordError> {
    let degrees = decode_angle("latitude", digits, LAT_DEGREE_DIGITS)?;
    Ok(if hemisphere == 'S' { -degrees } else { degrees })
}

/// Decode a `DDDMMmmm` longitude into signed decimal degrees.
///
/// Only `W` negates the result. The value is not range-checked.
///
/// # Errors
///
/// Returns [`RecordError::NonNumeric`] unless `digits` is exactly eight digits.
pub fn parse_lon(digits: &str, hemisphere: char) -> std::result::Result<f64, RecordError> {
    let degrees = decode_angle("longitude", digits, LON_DEGREE_DIGITS)?;
    Ok(if hemisphere == 'W' { -degrees } else { degrees })
}

fn decode_angle(
    field: &'static str,
    digits: &str,
    degree_digits: usize,
) -> std::result::Result<f64, RecordError> {
    if digits.len() != degree_digits + MINUTE_DIGITS || !digits.is_ascii() {
        return Err(non_numeric(field, digits));
    }
    let degrees = parse_unsigned(field, &digits[..degree_digits])?;
    let thousandths = parse_unsigned(field, &digits[degree_digits..])?;

    let minutes = f64::from(thousandths) / 1000.0;
    Ok(f64::from(degrees) + minutes / 60.0)
}

/// Decode one B record into a [`PositionSample`].
///
/// Characters past column 35 (I record extensions) are ignored.
///
/// # Errors
///
/// Returns a [`RecordError`] when the line is not a B record, is shorter
/// than [`B_RECORD_MIN_LEN`], has a non-numeric field, an unknown
/// hemisphere or validity code, or decodes to an impossible time or position.
pub fn parse_b_record(line: &str) -> std::result::Result<PositionSample, RecordError> {
    let line = line.trim_end();
    if !line.starts_with('B') {
        return Err(RecordError::NotDataRecord);
    }
    if line.len() < B_RECORD_MIN_LEN {
        return Err(RecordError::TooShort {
            len: line.len(),
            min: B_RECORD_MIN_LEN,
        });
    }
    // Byte offsets below are only safe on ASCII.
    if !line.as_bytes()[..B_RECORD_MIN_LEN].is_ascii() {
        return Err(non_numeric("record", line));
    }
    let code = |index: usize| char::from(line.as_bytes()[index]);

    let hour = parse_unsigned("hour", &line[1..3])?;
    let minute = parse_unsigned("minute", &line[3..5])?;
    let second = parse_unsigned("second", &line[5..7])?;
    let time = NaiveTime::from_hms_opt(hour, minute, second).ok_or_else(|| {
        RecordError::OutOfRange {
            field: "time",
            value: line[1..7].to_string(),
        }
    })?;

    let lat_hemisphere = code(14);
    if !matches!(lat_hemisphere, 'N' | 'S') {
        return Err(RecordError::UnknownCode {
            field: "latitude_hemisphere",
            code: lat_hemisphere,
        });
    }
    let latitude = parse_lat(&line[7..14], lat_hemisphere)?;
    if latitude.abs() > 90.0 {
        return Err(RecordError::OutOfRange {
            field: "latitude",
            value: latitude.to_string(),
        });
    }

    let lon_hemisphere = code(23);
    if !matches!(lon_hemisphere, 'E' | 'W') {
        return Err(RecordError::UnknownCode {
            field: "longitude_hemisphere",
            code: lon_hemisphere,
        });
    }
    let longitude = parse_lon(&line[15..23], lon_hemisphere)?;
    if longitude.abs() > 180.0 {
        return Err(RecordError::OutOfRange {
            field: "longitude",
            value: longitude.to_string(),
        });
    }

    let validity = FixValidity::from_code(code(24)).ok_or(RecordError::UnknownCode {
        field: "validity",
        code: code(24),
    })?;

    let pressure_altitude = parse_altitude("pressure_altitude", &line[25..30])?;
    let gps_altitude = parse_altitude("gps_altitude", &line[30..35])?;

    trace!(%time, latitude, longitude, pressure_altitude, gps_altitude, "Decoded B record");

    Ok(PositionSample {
        time,
        latitude,
        longitude,
        validity,
        pressure_altitude,
        gps_altitude,
    })
}

fn parse_unsigned(field: &'static str, text: &str) -> std::result::Result<u32, RecordError> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(non_numeric(field, text));
    }
    text.parse().map_err(|_| non_numeric(field, text))
}

/// Altitudes are zero-padded and may carry a leading minus (`-0012`).
fn parse_altitude(field: &'static str, text: &str) -> std::result::Result<i32, RecordError> {
    let digits = text.strip_prefix('-').unwrap_or(text);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(non_numeric(field, text));
    }
    text.parse().map_err(|_| non_numeric(field, text))
}

fn non_numeric(field: &'static str, text: &str) -> RecordError {
    RecordError::NonNumeric {
        field,
        value: text.to_string(),
    }
}
