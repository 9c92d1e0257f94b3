//! Text, CSV and JSON renderings of a parsed flight.

use std::fmt::Write as _;

use chrono::NaiveTime;
use serde::Serialize;

use super::OutputFormat;
use crate::error::{Error, Result};
use crate::flight::{BarogramPoint, Flight};
use crate::igc::{FlightMetadata, PositionSample};

/// Flight summary as emitted by `baro info --json`.
#[derive(Debug, Serialize)]
pub struct FlightSummary<'a> {
    /// Header metadata.
    pub metadata: &'a FlightMetadata,
    /// Number of decoded fixes.
    pub fixes: usize,
    /// Takeoff time, if the glider ever moved.
    pub takeoff: Option<NaiveTime>,
    /// Landing time, if the glider ever moved.
    pub landing: Option<NaiveTime>,
    /// Seconds between takeoff and landing.
    pub duration_seconds: Option<i64>,
    /// Highest cleaned GPS altitude.
    pub max_gps_altitude: Option<i32>,
}

impl<'a> FlightSummary<'a> {
    /// Summarise a flight.
    #[must_use]
    pub fn new(flight: &'a Flight) -> Self {
        Self {
            metadata: &flight.metadata,
            fixes: flight.samples.len(),
            takeoff: flight.takeoff_time(),
            landing: flight.landing_time(),
            duration_seconds: flight.duration().map(|d| d.num_seconds()),
            max_gps_altitude: flight.max_gps_altitude(),
        }
    }
}

/// The lines of the barogram info panel.
///
/// Empty text fields are skipped, as is the crew when none is recorded.
#[must_use]
pub fn info_lines(flight: &Flight) -> Vec<String> {
    let meta = &flight.metadata;
    let mut lines = vec![format!("Date: {}", meta.date_display())];

    let mut push = |label: &str, value: &str| {
        if !value.is_empty() {
            lines.push(format!("{label}: {value}"));
        }
    };
    push("Pilot", &meta.pilot);
    if meta.has_crew() {
        push("Crew", &meta.crew);
    }
    push("Glider", &meta.glider_type);
    push("Registration", &meta.registration);
    push("Comp ID", &meta.competition_id);
    push("Class", &meta.competition_class);
    push("Logger", &meta.logger_type);

    lines.push(format!("Takeoff time: {}", time_or_na(flight.takeoff_time())));
    lines.push(format!("Landing time: {}", time_or_na(flight.landing_time())));
    if let Some(duration) = flight.duration() {
        let minutes = duration.num_minutes();
        lines.push(format!("Duration: {}h{:02}", minutes / 60, minutes % 60));
    }
    lines
}

fn time_or_na(time: Option<NaiveTime>) -> String {
    time.map_or_else(|| "N/A".to_string(), |t| t.format("%H:%M:%S").to_string())
}

/// Render position fixes.
///
/// # Errors
///
/// Returns an error if CSV or JSON serialization fails.
pub fn render_fixes(samples: &[PositionSample], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Plain => {
            let mut out = String::new();
            let _ = writeln!(
                out,
                "{:<8}  {:>10}  {:>11}  {}  {:>6}  {:>6}",
                "TIME", "LAT", "LON", "V", "PRESS", "GPS"
            );
            for s in samples {
                let _ = writeln!(
                    out,
                    "{:<8}  {:>10.5}  {:>11.5}  {}  {:>6}  {:>6}",
                    s.time_label(),
                    s.latitude,
                    s.longitude,
                    s.validity,
                    s.pressure_altitude,
                    s.gps_altitude
                );
            }
            Ok(out)
        }
        OutputFormat::Csv => to_csv(samples),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(samples)?),
    }
}

/// Render barogram points.
///
/// # Errors
///
/// Returns an error if CSV or JSON serialization fails.
pub fn render_series(points: &[BarogramPoint], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Plain => {
            let mut out = String::new();
            let _ = writeln!(
                out,
                "{:<8}  {:>7}  {:>7}  {:>7}  {:>7}",
                "TIME", "GPS", "GPS*", "PRESS", "PRESS*"
            );
            for p in points {
                let _ = writeln!(
                    out,
                    "{:<8}  {:>7}  {:>7}  {:>7}  {:>7}",
                    p.time, p.gps_raw, p.gps_clean, p.pressure_raw, p.pressure_clean
                );
            }
            Ok(out)
        }
        OutputFormat::Csv => to_csv(points),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(points)?),
    }
}

fn to_csv<T: Serialize>(rows: &[T]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for row in rows {
        writer.serialize(row)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|err| Error::Io(err.into_error()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
