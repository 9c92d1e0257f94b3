//! `barograph` - IGC flight-log parsing and barogram data extraction
//!
//! This library decodes the header and fix records of IGC files written by
//! gliding flight recorders, cleans logger glitches out of the altitude
//! series, and hands the result to whatever draws the barogram.
//!
//! ```no_run
//! use barograph::{Config, Flight};
//!
//! let config = Config::load()?;
//! let flight = Flight::load("2023-07-06-LXV-2J0-01.igc", &config.cleaning)?;
//! println!("{} flown by {}", flight.metadata.date_display(), flight.metadata.pilot);
//! # Ok::<(), barograph::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod cleaner;
pub mod cli;
pub mod config;
pub mod error;
pub mod flight;
pub mod igc;
pub mod loader;
pub mod logging;

pub use cleaner::{clean_altitude_series, DEFAULT_MAX_JUMP};
pub use config::{CleaningConfig, Config};
pub use error::{Error, RecordError, Result};
pub use flight::{BarogramPoint, Flight};
pub use igc::{FixValidity, FlightMetadata, PositionSample};
pub use logging::init_logging;
