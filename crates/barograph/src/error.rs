//! Error types for barograph.
//!
//! This module defines all error types used throughout the barograph crate.
//! Every error is fatal for the file being parsed: a flight either yields
//! complete metadata and a complete sample sequence, or it fails outright.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for barograph operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Header Errors ===
    /// A required header marker was not found in the header lines.
    #[error("missing header record: {marker}")]
    MissingHeader {
        /// The marker that was searched for (e.g. `HFPLTPILOTINCHARGE`).
        marker: &'static str,
    },

    /// A header record was present but its value could not be decoded.
    #[error("invalid value for header {marker}: {value:?}")]
    InvalidHeader {
        /// The marker of the offending header record.
        marker: &'static str,
        /// The raw value found after the marker.
        value: String,
    },

    // === Data Record Errors ===
    /// A B record could not be decoded.
    #[error("malformed B record at line {line}: {source}")]
    MalformedRecord {
        /// 1-based line number in the IGC file.
        line: usize,
        /// What was wrong with the record.
        #[source]
        source: RecordError,
    },

    // === Cleaning Errors ===
    /// An altitude series passed to the cleaner was empty.
    #[error("altitude series is empty")]
    EmptySeries,

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === I/O Errors ===
    /// An IGC file could not be read.
    #[error("failed to read IGC file {path}: {source}")]
    FileRead {
        /// Path of the file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// File system operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // === Serialization Errors ===
    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV serialization failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Reasons a single B record fails to decode.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// The line is shorter than the fixed B record layout.
    #[error("record is {len} characters long, expected at least {min}")]
    TooShort {
        /// Actual length of the line.
        len: usize,
        /// Minimum required length.
        min: usize,
    },

    /// The line does not start with `B`.
    #[error("not a B record")]
    NotDataRecord,

    /// A numeric field is not a number of the expected width.
    #[error("field '{field}' is not a valid number: {value:?}")]
    NonNumeric {
        /// Name of the field.
        field: &'static str,
        /// The raw text of the field.
        value: String,
    },

    /// A single-character code is not one of the allowed values.
    #[error("field '{field}' has unknown code {code:?}")]
    UnknownCode {
        /// Name of the field.
        field: &'static str,
        /// The character found.
        code: char,
    },

    /// A decoded value is outside its valid range.
    #[error("field '{field}' is out of range: {value}")]
    OutOfRange {
        /// Name of the field.
        field: &'static str,
        /// The decoded value.
        value: String,
    },
}

/// A specialized Result type for barograph operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create a missing header error.
    #[must_use]
    pub fn missing_header(marker: &'static str) -> Self {
        Self::MissingHeader { marker }
    }

    /// Create a malformed record error for the given 1-based line number.
    #[must_use]
    pub fn malformed_record(line: usize, source: RecordError) -> Self {
        Self::MalformedRecord { line, source }
    }

    /// Check if this error is a missing header.
    #[must_use]
    pub fn is_missing_header(&self) -> bool {
        matches!(self, Self::MissingHeader { .. })
    }

    /// Check if this error is a malformed data record.
    #[must_use]
    pub fn is_malformed_record(&self) -> bool {
        matches!(self, Self::MalformedRecord { .. })
    }
}
