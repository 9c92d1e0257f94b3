//! End-to-end checks of the public API against a recorded flight.

use std::path::PathBuf;

use barograph::cli::report::{info_lines, render_series};
use barograph::cli::OutputFormat;
use barograph::{CleaningConfig, Error, Flight, RecordError};
use chrono::NaiveTime;

fn sample_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data/sample.igc")
}

fn time(h: u32, m: u32, s: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, s).unwrap()
}

#[test]
fn test_sample_flight_metadata() {
    let flight = Flight::load(sample_path(), &CleaningConfig::default()).unwrap();
    let meta = &flight.metadata;

    assert_eq!(meta.date_display(), "06/07/2023");
    assert_eq!(meta.pilot, "JANE DOE");
    assert_eq!(meta.crew, "None");
    assert_eq!(meta.glider_type, "LS8-18");
    assert_eq!(meta.registration, "D-5585");
    assert_eq!(meta.competition_id, "2J");
    assert_eq!(meta.competition_class, "18m");
    assert_eq!(meta.logger_type, "LXNAV,LX9000");
}

#[test]
fn test_sample_flight_series() {
    let flight = Flight::load(sample_path(), &CleaningConfig::default()).unwrap();

    assert_eq!(flight.samples.len(), 30);
    assert_eq!(flight.gps_altitude.len(), 30);
    assert_eq!(flight.pressure_altitude.len(), 30);

    // The logger glitch at 09:46:48 is replaced by the midpoint of its neighbours.
    assert_eq!(flight.raw_gps_altitude()[12], 54226);
    assert_eq!(flight.gps_altitude[12], 1085);
    assert_eq!(flight.max_gps_altitude(), Some(1195));

    assert_eq!(flight.pressure_altitude, flight.raw_pressure_altitude());
}

#[test]
fn test_sample_flight_times() {
    let flight = Flight::load(sample_path(), &CleaningConfig::default()).unwrap();

    assert_eq!(flight.first_fix_time(), Some(time(9, 46, 0)));
    assert_eq!(flight.last_fix_time(), Some(time(9, 47, 56)));
    assert_eq!(flight.takeoff_time(), Some(time(9, 46, 16)));
    assert_eq!(flight.landing_time(), Some(time(9, 47, 48)));
    assert_eq!(flight.duration().map(|d| d.num_seconds()), Some(92));

    let lines = info_lines(&flight);
    assert!(lines.contains(&"Takeoff time: 09:46:16".to_string()));
    assert!(lines.contains(&"Duration: 0h01".to_string()));
}

#[test]
fn test_cleaning_disabled_passes_raw_series() {
    let cleaning = CleaningConfig {
        enabled: false,
        ..CleaningConfig::default()
    };
    let flight = Flight::load(sample_path(), &cleaning).unwrap();

    assert_eq!(flight.gps_altitude[12], 54226);
    assert_eq!(flight.gps_altitude, flight.raw_gps_altitude());
}

#[test]
fn test_series_csv_output() {
    let flight = Flight::load(sample_path(), &CleaningConfig::default()).unwrap();
    let csv = render_series(&flight.barogram(), OutputFormat::Csv).unwrap();
    let lines: Vec<_> = csv.lines().collect();

    assert_eq!(lines.len(), 31);
    assert_eq!(lines[13], "09:46:48,54226,1085,975,975");
}

#[test]
fn test_missing_file() {
    let result = Flight::load("/nonexistent/flight.igc", &CleaningConfig::default());
    assert!(matches!(result, Err(Error::FileRead { .. })));
}

#[test]
fn test_truncated_record_reports_line() {
    let mut lines: Vec<String> = std::fs::read_to_string(sample_path())
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect();
    lines[14] = "B094604500230".to_string();

    let err = Flight::from_lines(&lines, &CleaningConfig::default()).unwrap_err();
    match err {
        Error::MalformedRecord { line, source } => {
            assert_eq!(line, 15);
            assert!(matches!(source, RecordError::TooShort { .. }));
        }
        other => panic!("unexpected error: {other}"),
    }
}
