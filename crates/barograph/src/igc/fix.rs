//! Position fixes decoded from IGC B records.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// Whether the recorder considered a fix accurate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FixValidity {
    /// `A`: valid 3D fix.
    Valid,
    /// `V`: 2D fix or no GPS data.
    Invalid,
}

impl FixValidity {
    /// Decode the single-character validity code of a B record.
    #[must_use]
    pub fn from_code(code: char) -> Option<Self> {
        match code {
            'A' => Some(Self::Valid),
            'V' => Some(Self::Invalid),
            _ => None,
        }
    }

    /// The IGC code for this validity.
    #[must_use]
    pub fn code(self) -> char {
        match self {
            Self::Valid => 'A',
            Self::Invalid => 'V',
        }
    }
}

impl std::fmt::Display for FixValidity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// One decoded B record: a timestamped position and two altitudes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PositionSample {
    /// UTC time of day of the fix.
    pub time: NaiveTime,

    /// Latitude in signed decimal degrees (south is negative).
    pub latitude: f64,

    /// Longitude in signed decimal degrees (west is negative).
    pub longitude: f64,

    /// Fix validity flag.
    pub validity: FixValidity,

    /// Pressure altitude in metres (ICAO standard atmosphere).
    pub pressure_altitude: i32,

    /// GNSS altitude in metres.
    pub gps_altitude: i32,
}

impl PositionSample {
    /// Check whether the recorder flagged this fix as a valid 3D fix.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.validity == FixValidity::Valid
    }

    /// Check whether two samples were taken at the same position.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn same_position(&self, other: &Self) -> bool {
        self.latitude == other.latitude && self.longitude == other.longitude
    }

    /// The fix time formatted as `HH:MM:SS`.
    #[must_use]
    pub fn time_label(&self) -> String {
        self.time.format("%H:%M:%S").to_string()
    }
}
