//! A fully parsed flight, ready for a barogram.
//!
//! [`Flight`] runs the whole pipeline for one IGC file: header metadata,
//! decoded fixes, and cleaned GPS and pressure altitude series. It also
//! derives takeoff and landing times from fix-to-fix movement.

use std::path::Path;

use chrono::{NaiveTime, TimeDelta};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, info_span};

use crate::cleaner::clean_altitude_series;
use crate::config::CleaningConfig;
use crate::error::{Error, Result};
use crate::igc::{parse_b_record, FlightMetadata, PositionSample};
use crate::loader::{data_lines, header_lines, load_igc_file};

/// A parsed flight with cleaned altitude series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flight {
    /// Header metadata.
    pub metadata: FlightMetadata,
    /// Decoded fixes, in file order.
    pub samples: Vec<PositionSample>,
    /// Cleaned GPS altitude, one value per sample.
    pub gps_altitude: Vec<i32>,
    /// Cleaned pressure altitude, one value per sample.
    pub pressure_altitude: Vec<i32>,
}

/// One point of a barogram: raw and cleaned altitudes at a fix time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BarogramPoint {
    /// Fix time as `HH:MM:SS`.
    pub time: String,
    /// GPS altitude as recorded.
    pub gps_raw: i32,
    /// GPS altitude after cleaning.
    pub gps_clean: i32,
    /// Pressure altitude as recorded.
    pub pressure_raw: i32,
    /// Pressure altitude after cleaning.
    pub pressure_clean: i32,
}

impl Flight {
    /// Read and parse an IGC file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or any part of it fails
    /// to parse (see [`Flight::from_lines`]).
    pub fn load(path: impl AsRef<Path>, cleaning: &CleaningConfig) -> Result<Self> {
        let path = path.as_ref();
        let _span = info_span!("flight", path = %path.display()).entered();

        let lines = load_igc_file(path)?;
        Self::from_lines(&lines, cleaning)
    }

    /// Parse a flight from the raw lines of an IGC file.
    ///
    /// # Errors
    ///
    /// - [`Error::MissingHeader`] / [`Error::InvalidHeader`] if the metadata
    ///   cannot be assembled.
    /// - [`Error::MalformedRecord`] with the offending line number if any
    ///   B record fails to decode.
    /// - [`Error::EmptySeries`] if the file holds no B records.
    pub fn from_lines<S: AsRef<str>>(lines: &[S], cleaning: &CleaningConfig) -> Result<Self> {
        let metadata = FlightMetadata::from_header_lines(&header_lines(lines))?;

        let samples = data_lines(lines)
            .into_iter()
            .map(|(number, line)| {
                parse_b_record(line).map_err(|source| Error::malformed_record(number, source))
            })
            .collect::<Result<Vec<_>>>()?;
        if samples.is_empty() {
            return Err(Error::EmptySeries);
        }
        debug!(fixes = samples.len(), "Decoded B records");

        let raw_gps: Vec<i32> = samples.iter().map(|s| s.gps_altitude).collect();
        let raw_pressure: Vec<i32> = samples.iter().map(|s| s.pressure_altitude).collect();

        let (gps_altitude, pressure_altitude) = if cleaning.enabled {
            let gps = {
                let _span = info_span!("clean", series = "gps").entered();
                clean_altitude_series(&raw_gps, cleaning.max_jump)?
            };
            let pressure = {
                let _span = info_span!("clean", series = "pressure").entered();
                clean_altitude_series(&raw_pressure, cleaning.max_jump)?
            };
            (gps, pressure)
        } else {
            (raw_gps, raw_pressure)
        };

        info!(
            date = %metadata.date_display(),
            pilot = %metadata.pilot,
            fixes = samples.len(),
            "Parsed flight"
        );

        Ok(Self {
            metadata,
            samples,
            gps_altitude,
            pressure_altitude,
        })
    }

    /// GPS altitudes as recorded, before cleaning.
    #[must_use]
    pub fn raw_gps_altitude(&self) -> Vec<i32> {
        self.samples.iter().map(|s| s.gps_altitude).collect()
    }

    /// Pressure altitudes as recorded, before cleaning.
    #[must_use]
    pub fn raw_pressure_altitude(&self) -> Vec<i32> {
        self.samples.iter().map(|s| s.pressure_altitude).collect()
    }

    /// `HH:MM:SS` label for every sample, for the barogram's time axis.
    #[must_use]
    pub fn time_labels(&self) -> Vec<String> {
        self.samples.iter().map(PositionSample::time_label).collect()
    }

    /// Time of the first fix in the log.
    #[must_use]
    pub fn first_fix_time(&self) -> Option<NaiveTime> {
        self.samples.first().map(|s| s.time)
    }

    /// Time of the last fix in the log.
    #[must_use]
    pub fn last_fix_time(&self) -> Option<NaiveTime> {
        self.samples.last().map(|s| s.time)
    }

    /// Time of the first fix whose position differs from the previous fix.
    ///
    /// Returns `None` if the position never changes.
    #[must_use]
    pub fn takeoff_time(&self) -> Option<NaiveTime> {
        self.samples
            .windows(2)
            .find(|pair| !pair[1].same_position(&pair[0]))
            .map(|pair| pair[1].time)
    }

    /// Time of the last fix whose position differs from the fix before it.
    ///
    /// Returns `None` if the position never changes.
    #[must_use]
    pub fn landing_time(&self) -> Option<NaiveTime> {
        self.samples
            .windows(2)
            .rev()
            .find(|pair| !pair[1].same_position(&pair[0]))
            .map(|pair| pair[1].time)
    }

    /// Time between takeoff and landing.
    ///
    /// Flights spanning midnight UTC are handled by wrapping once.
    #[must_use]
    pub fn duration(&self) -> Option<TimeDelta> {
        let takeoff = self.takeoff_time()?;
        let landing = self.landing_time()?;

        let delta = landing.signed_duration_since(takeoff);
        if delta < TimeDelta::zero() {
            Some(delta + TimeDelta::hours(24))
        } else {
            Some(delta)
        }
    }

    /// Highest cleaned GPS altitude.
    #[must_use]
    pub fn max_gps_altitude(&self) -> Option<i32> {
        self.gps_altitude.iter().copied().max()
    }

    /// Raw and cleaned altitudes for every sample.
    #[must_use]
    pub fn barogram(&self) -> Vec<BarogramPoint> {
        self.samples
            .iter()
            .zip(self.gps_altitude.iter().zip(&self.pressure_altitude))
            .map(|(sample, (&gps_clean, &pressure_clean))| BarogramPoint {
                time: sample.time_label(),
                gps_raw: sample.gps_altitude,
                gps_clean,
                pressure_raw: sample.pressure_altitude,
                pressure_clean,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data/sample.igc");

    fn headers() -> Vec<String> {
        [
            "AXXXTEST",
            "HFDTE060723",
            "HFPLTPILOTINCHARGE:JANE DOE",
            "HFCM2CREW2:JOHN SMITH",
            "HFGTYGLIDERTYPE:DUO DISCUS",
            "HFGIDGLIDERID:D-1234",
            "HFCIDCOMPETITIONID:XY",
            "HFCCLCOMPETITIONCLASS:Double Seater",
            "HFFTYFRTYPE:FLARM",
        ]
        .iter()
        .map(ToString::to_string)
        .collect()
    }

    fn fix(time: &str, lat: &str, gps: i32, pressure: i32) -> String {
        format!("B{time}{lat}N00524526EA{pressure:05}{gps:05}")
    }

    fn flight(fixes: &[String]) -> Result<Flight> {
        let mut lines = headers();
        lines.extend_from_slice(fixes);
        Flight::from_lines(&lines, &CleaningConfig::default())
    }

    #[test]
    fn test_from_lines() {
        let flight = flight(&[
            fix("100000", "5002302", 500, 400),
            fix("100004", "5002302", 505, 401),
            fix("100008", "5002310", 2000, 402),
            fix("100012", "5002320", 515, 403),
        ])
        .unwrap();

        assert_eq!(flight.metadata.crew, "JOHN SMITH");
        assert_eq!(flight.samples.len(), 4);
        assert_eq!(flight.gps_altitude, vec![500, 505, 510, 515]);
        assert_eq!(flight.pressure_altitude, vec![400, 401, 402, 403]);
        assert_eq!(flight.raw_gps_altitude(), vec![500, 505, 2000, 515]);
        assert_eq!(flight.raw_pressure_altitude(), vec![400, 401, 402, 403]);
        assert_eq!(flight.gps_altitude.len(), flight.samples.len());
    }

    #[test]
    fn test_cleaning_disabled() {
        let mut lines = headers();
        lines.push(fix("100000", "5002302", 500, 400));
        lines.push(fix("100004", "5002302", 2000, 400));
        let cleaning = CleaningConfig {
            enabled: false,
            ..CleaningConfig::default()
        };
        let flight = Flight::from_lines(&lines, &cleaning).unwrap();
        assert_eq!(flight.gps_altitude, vec![500, 2000]);
    }

    #[test]
    fn test_no_fixes_is_an_error() {
        let err = flight(&[]).unwrap_err();
        assert!(matches!(err, Error::EmptySeries));
    }

    #[test]
    fn test_malformed_record_reports_line() {
        let err = flight(&[
            fix("100000", "5002302", 500, 400),
            "B100004500230".to_string(),
        ])
        .unwrap_err();
        // 9 header lines, then the good fix on line 10
        assert!(matches!(err, Error::MalformedRecord { line: 11, .. }));
    }

    #[test]
    fn test_missing_header_aborts() {
        let lines = vec![fix("100000", "5002302", 500, 400)];
        let err = Flight::from_lines(&lines, &CleaningConfig::default()).unwrap_err();
        assert!(err.is_missing_header());
    }

    #[test]
    fn test_takeoff_and_landing() {
        let flight = flight(&[
            fix("100000", "5002302", 500, 400),
            fix("100004", "5002302", 500, 400),
            fix("100008", "5002310", 520, 420),
            fix("100012", "5002320", 540, 440),
            fix("100016", "5002330", 520, 420),
            fix("100020", "5002330", 500, 400),
        ])
        .unwrap();

        assert_eq!(flight.takeoff_time(), NaiveTime::from_hms_opt(10, 0, 8));
        assert_eq!(flight.landing_time(), NaiveTime::from_hms_opt(10, 0, 16));
        assert_eq!(flight.duration(), Some(TimeDelta::seconds(8)));
        assert_eq!(flight.first_fix_time(), NaiveTime::from_hms_opt(10, 0, 0));
        assert_eq!(flight.last_fix_time(), NaiveTime::from_hms_opt(10, 0, 20));
    }

    #[test]
    fn test_never_moving() {
        let flight = flight(&[
            fix("100000", "5002302", 500, 400),
            fix("100004", "5002302", 500, 400),
        ])
        .unwrap();
        assert!(flight.takeoff_time().is_none());
        assert!(flight.landing_time().is_none());
        assert!(flight.duration().is_none());
    }

    #[test]
    fn test_duration_across_midnight() {
        let flight = flight(&[
            fix("235950", "5002302", 500, 400),
            fix("235955", "5002310", 500, 400),
            fix("000005", "5002320", 500, 400),
        ])
        .unwrap();
        assert_eq!(flight.duration(), Some(TimeDelta::seconds(10)));
    }

    #[test]
    fn test_time_labels_and_barogram() {
        let flight = flight(&[
            fix("094600", "5002302", 603, 489),
            fix("094604", "5002302", 9999, 490),
            fix("094608", "5002302", 610, 491),
        ])
        .unwrap();

        assert_eq!(
            flight.time_labels(),
            vec!["09:46:00", "09:46:04", "09:46:08"]
        );
        let points = flight.barogram();
        assert_eq!(points.len(), 3);
        assert_eq!(points[1].time, "09:46:04");
        assert_eq!(points[1].gps_raw, 9999);
        assert_eq!(points[1].gps_clean, 606);
        assert_eq!(points[1].pressure_clean, 490);
        assert_eq!(flight.max_gps_altitude(), Some(610));
    }

    #[test]
    fn test_load_sample_file() {
        let flight = Flight::load(SAMPLE, &CleaningConfig::default()).unwrap();

        assert_eq!(flight.metadata.date_display(), "06/07/2023");
        assert_eq!(flight.metadata.crew, "None");
        assert_eq!(flight.samples.len(), 30);
        assert_eq!(flight.raw_gps_altitude()[12], 54226);
        assert_eq!(flight.gps_altitude[12], 1085);
        assert_eq!(flight.pressure_altitude, flight.raw_pressure_altitude());
        assert_eq!(flight.takeoff_time(), NaiveTime::from_hms_opt(9, 46, 16));
        assert_eq!(flight.landing_time(), NaiveTime::from_hms_opt(9, 47, 48));
    }
}
