//! Flight metadata assembled from IGC H records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::fields::{header_date, header_field, DATE_MARKER};
use crate::error::{Error, Result};

/// Value stored in [`FlightMetadata::crew`] when the crew header is blank.
pub const NO_CREW: &str = "None";

/// The mandatory H record text fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeaderField {
    /// `HFPLTPILOTINCHARGE:`
    Pilot,
    /// `HFCM2CREW2:`
    Crew,
    /// `HFGTYGLIDERTYPE:`
    GliderType,
    /// `HFGIDGLIDERID:`
    Registration,
    /// `HFCIDCOMPETITIONID:`
    CompetitionId,
    /// `HFCCLCOMPETITIONCLASS:`
    CompetitionClass,
    /// `HFFTYFRTYPE:`
    LoggerType,
}

impl HeaderField {
    /// All fields, in extraction order.
    pub const ALL: [Self; 7] = [
        Self::Pilot,
        Self::Crew,
        Self::GliderType,
        Self::Registration,
        Self::CompetitionId,
        Self::CompetitionClass,
        Self::LoggerType,
    ];

    /// The marker a header line must start with.
    #[must_use]
    pub fn marker(self) -> &'static str {
        match self {
            Self::Pilot => "HFPLTPILOTINCHARGE",
            Self::Crew => "HFCM2CREW2",
            Self::GliderType => "HFGTYGLIDERTYPE",
            Self::Registration => "HFGIDGLIDERID",
            Self::CompetitionId => "HFCIDCOMPETITIONID",
            Self::CompetitionClass => "HFCCLCOMPETITIONCLASS",
            Self::LoggerType => "HFFTYFRTYPE",
        }
    }

    /// The marker plus colon, stripped to obtain the value.
    #[must_use]
    pub fn prefix(self) -> &'static str {
        match self {
            Self::Pilot => "HFPLTPILOTINCHARGE:",
            Self::Crew => "HFCM2CREW2:",
            Self::GliderType => "HFGTYGLIDERTYPE:",
            Self::Registration => "HFGIDGLIDERID:",
            Self::CompetitionId => "HFCIDCOMPETITIONID:",
            Self::CompetitionClass => "HFCCLCOMPETITIONCLASS:",
            Self::LoggerType => "HFFTYFRTYPE:",
        }
    }

    /// Extract this field's value from a header section.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingHeader`] if the field's marker is absent.
    pub fn extract<S: AsRef<str>>(self, lines: &[S]) -> Result<String> {
        header_field(lines, self.marker(), self.prefix())
    }
}

/// Metadata describing one flight.
///
/// Every field is mandatory; there is no partially filled record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightMetadata {
    /// Flight date (two-digit years are taken as 20YY).
    pub date: NaiveDate,
    /// Pilot in charge.
    pub pilot: String,
    /// Second crew member, or [`NO_CREW`].
    pub crew: String,
    /// Glider model.
    pub glider_type: String,
    /// Glider registration.
    pub registration: String,
    /// Competition number.
    pub competition_id: String,
    /// Competition class.
    pub competition_class: String,
    /// Flight recorder model.
    pub logger_type: String,
}

impl FlightMetadata {
    /// Build the metadata record from the H records of a file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingHeader`] if the date or any field is absent and
    /// [`Error::InvalidHeader`] if the date is not a real calendar day.
    pub fn from_header_lines<S: AsRef<str>>(lines: &[S]) -> Result<Self> {
        let date = parse_date(&header_date(lines)?)?;

        let pilot = HeaderField::Pilot.extract(lines)?;
        let mut crew = HeaderField::Crew.extract(lines)?;
        let glider_type = HeaderField::GliderType.extract(lines)?;
        let registration = HeaderField::Registration.extract(lines)?;
        let competition_id = HeaderField::CompetitionId.extract(lines)?;
        let competition_class = HeaderField::CompetitionClass.extract(lines)?;
        let logger_type = HeaderField::LoggerType.extract(lines)?;

        if crew.is_empty() {
            crew = NO_CREW.to_string();
        }

        debug!(%date, %pilot, %registration, "Extracted flight metadata");

        Ok(Self {
            date,
            pilot,
            crew,
            glider_type,
            registration,
            competition_id,
            competition_class,
            logger_type,
        })
    }

    /// The date formatted as `DD/MM/YYYY`.
    #[must_use]
    pub fn date_display(&self) -> String {
        self.date.format("%d/%m/%Y").to_string()
    }

    /// Check whether a second crew member is recorded.
    #[must_use]
    pub fn has_crew(&self) -> bool {
        self.crew != NO_CREW
    }
}

/// Expand a raw `DDMMYY` value into a date in the 21st century.
fn parse_date(raw: &str) -> Result<NaiveDate> {
    let invalid = || Error::InvalidHeader {
        marker: DATE_MARKER,
        value: raw.to_string(),
    };

    if raw.len() != 6 || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    let day: u32 = raw[0..2].parse().map_err(|_| invalid())?;
    let month: u32 = raw[2..4].parse().map_err(|_| invalid())?;
    let year: i32 = raw[4..6].parse().map_err(|_| invalid())?;

    NaiveDate::from_ymd_opt(2000 + year, month, day).ok_or_else(invalid)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers() -> Vec<&'static str> {
        vec![
            "HFDTE060723",
            "HFFXA035",
            "HFPLTPILOTINCHARGE:FERRE DE CORDT",
            "HFCM2CREW2:",
            "HFGTYGLIDERTYPE:LS8-18",
            "HFGIDGLIDERID:D-5585",
            "HFDTM100GPSDATUM:WGS-1984",
            "HFCIDCOMPETITIONID:2J",
            "HFCCLCOMPETITIONCLASS:18m",
            "HFFTYFRTYPE:LXNAV,LX9000",
        ]
    }

    #[test]
    fn test_from_header_lines() {
        let meta = FlightMetadata::from_header_lines(&headers()).unwrap();

        assert_eq!(meta.date, NaiveDate::from_ymd_opt(2023, 7, 6).unwrap());
        assert_eq!(meta.date_display(), "06/07/2023");
        assert_eq!(meta.pilot, "FERRE DE CORDT");
        assert_eq!(meta.crew, "None");
        assert!(!meta.has_crew());
        assert_eq!(meta.glider_type, "LS8-18");
        assert_eq!(meta.registration, "D-5585");
        assert_eq!(meta.competition_id, "2J");
        assert_eq!(meta.competition_class, "18m");
        assert_eq!(meta.logger_type, "LXNAV,LX9000");
    }

    #[test]
    fn test_crew_present() {
        let mut lines = headers();
        lines[3] = "HFCM2CREW2: JOHN SMITH ";
        let meta = FlightMetadata::from_header_lines(&lines).unwrap();
        assert_eq!(meta.crew, "JOHN SMITH");
        assert!(meta.has_crew());
    }

    #[test]
    fn test_date_fallback_form() {
        let mut lines = headers();
        lines[0] = "HFDTEDATE:060723,01";
        let meta = FlightMetadata::from_header_lines(&lines).unwrap();
        assert_eq!(meta.date_display(), "06/07/2023");
    }

    #[test]
    fn test_date_prefers_canonical_form() {
        let mut lines = headers();
        lines.insert(0, "HFDTEDATE:010122");
        let meta = FlightMetadata::from_header_lines(&lines).unwrap();
        assert_eq!(meta.date_display(), "06/07/2023");
    }

    #[test]
    fn test_missing_pilot() {
        let lines: Vec<_> = headers()
            .into_iter()
            .filter(|l| !l.starts_with("HFPLT"))
            .collect();
        let err = FlightMetadata::from_header_lines(&lines).unwrap_err();
        assert!(matches!(
            err,
            Error::MissingHeader {
                marker: "HFPLTPILOTINCHARGE"
            }
        ));
    }

    #[test]
    fn test_every_field_is_mandatory() {
        for field in HeaderField::ALL {
            let lines: Vec<_> = headers()
                .into_iter()
                .filter(|l| !l.starts_with(field.marker()))
                .collect();
            let err = FlightMetadata::from_header_lines(&lines).unwrap_err();
            assert!(err.is_missing_header(), "{field:?} should be mandatory");
        }
    }

    #[test]
    fn test_missing_date() {
        let lines: Vec<_> = headers()
            .into_iter()
            .filter(|l| !l.starts_with("HFDTE"))
            .collect();
        let err = FlightMetadata::from_header_lines(&lines).unwrap_err();
        assert!(matches!(err, Error::MissingHeader { marker: "HFDTE" }));
    }

    #[test]
    fn test_invalid_date() {
        let mut lines = headers();
        lines[0] = "HFDTE311323";
        let err = FlightMetadata::from_header_lines(&lines).unwrap_err();
        assert!(matches!(err, Error::InvalidHeader { .. }));

        lines[0] = "HFDTE0607";
        let err = FlightMetadata::from_header_lines(&lines).unwrap_err();
        assert!(matches!(err, Error::InvalidHeader { .. }));
    }

    #[test]
    fn test_header_field_markers() {
        for field in HeaderField::ALL {
            assert_eq!(field.prefix(), format!("{}:", field.marker()));
        }
    }

    #[test]
    fn test_metadata_serialization() {
        let meta = FlightMetadata::from_header_lines(&headers()).unwrap();
        let json = serde_json::to_string(&meta).unwrap();
        assert!(json.contains("\"date\":\"2023-07-06\""));
        assert!(json.contains("\"registration\":\"D-5585\""));
    }
}
