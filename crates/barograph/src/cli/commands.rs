//! CLI command definitions.

use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

/// Arguments for `baro info`.
#[derive(Debug, Args)]
pub struct InfoCommand {
    /// IGC file to read
    pub file: PathBuf,

    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Arguments for `baro fixes`.
#[derive(Debug, Args)]
pub struct FixesCommand {
    /// IGC file to read
    pub file: PathBuf,

    /// Show only the first N fixes
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "plain")]
    pub format: OutputFormat,
}

/// Arguments for `baro series`.
#[derive(Debug, Args)]
pub struct SeriesCommand {
    /// IGC file to read
    pub file: PathBuf,

    /// Largest plausible altitude change between fixes, in metres
    /// (overrides the configured value)
    #[arg(short, long, value_name = "METRES")]
    pub max_jump: Option<i32>,

    /// Output the raw series without cleaning
    #[arg(long)]
    pub raw: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "plain")]
    pub format: OutputFormat,
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,

    /// Validate configuration
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

/// Output format for commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Aligned plain text
    #[default]
    Plain,
    /// Comma-separated values with a header row
    Csv,
    /// JSON array
    Json,
}
