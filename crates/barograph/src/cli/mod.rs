//! Command-line interface for barograph.
//!
//! This module provides the CLI structure for the `baro` binary and the
//! text/CSV/JSON renderings of parsed flights it prints.

mod commands;
pub mod report;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{ConfigCommand, FixesCommand, InfoCommand, OutputFormat, SeriesCommand};

use crate::logging::Verbosity;

/// baro - Read IGC flight logs and extract barogram data
///
/// Decodes the header and fix records of an IGC file, cleans logger
/// glitches out of the GPS and pressure altitude series, and prints the
/// result for plotting or inspection.
#[derive(Debug, Parser)]
#[command(name = "baro")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show flight metadata, takeoff and landing
    Info(InfoCommand),

    /// List decoded position fixes
    Fixes(FixesCommand),

    /// Print raw and cleaned altitude series
    Series(SeriesCommand),

    /// View or check configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from_flags(self.quiet, self.verbose)
    }
}
