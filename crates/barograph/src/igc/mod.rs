//! IGC record decoding.
//!
//! An IGC file is a line-oriented text format written by gliding flight
//! recorders. This module decodes the two record types needed for a
//! barogram:
//!
//! - **H records** carry flight metadata (date, pilot, glider, logger).
//!   [`FlightMetadata::from_header_lines`] assembles them into one record.
//!
//! - **B records** carry one timestamped fix each: position, fix validity,
//!   pressure altitude and GNSS altitude. [`parse_b_record`] decodes them.
//!
//! # Example
//!
//! ```
//! use barograph::igc::{parse_b_record, FixValidity};
//!
//! let fix = parse_b_record("B0946005002302N00524526EA0048900603").unwrap();
//! assert_eq!(fix.gps_altitude, 603);
//! assert_eq!(fix.validity, FixValidity::Valid);
//! ```

mod fields;
mod fix;
mod header;

pub use fields::{
    header_date, header_field, parse_b_record, parse_lat, parse_lon, B_RECORD_MIN_LEN,
    DATE_LONG_PREFIX, DATE_MARKER,
};
pub use fix::{FixValidity, PositionSample};
pub use header::{FlightMetadata, HeaderField, NO_CREW};
