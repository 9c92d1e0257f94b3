//! `baro` - CLI for barograph
//!
//! Reads an IGC file and prints its metadata, fixes, or barogram series.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use anyhow::Context;
use clap::Parser;

use barograph::cli::report::{info_lines, render_fixes, render_series, FlightSummary};
use barograph::cli::{Cli, Command, ConfigCommand, FixesCommand, InfoCommand, SeriesCommand};
use barograph::{init_logging, Config, Flight};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbosity());

    let config = Config::load_from(cli.config.clone()).context("loading configuration")?;

    match cli.command {
        Command::Info(cmd) => handle_info(&config, &cmd),
        Command::Fixes(cmd) => handle_fixes(&config, &cmd),
        Command::Series(cmd) => handle_series(&config, &cmd),
        Command::Config(cmd) => handle_config(&config, cmd),
    }
}

fn load_flight(config: &Config, file: &std::path::Path) -> anyhow::Result<Flight> {
    Flight::load(file, &config.cleaning).with_context(|| format!("parsing {}", file.display()))
}

fn emit(output: &str) {
    println!("{}", output.trim_end());
}

fn handle_info(config: &Config, cmd: &InfoCommand) -> anyhow::Result<()> {
    let flight = load_flight(config, &cmd.file)?;

    if cmd.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&FlightSummary::new(&flight))?
        );
    } else {
        for line in info_lines(&flight) {
            println!("{line}");
        }
    }
    Ok(())
}

fn handle_fixes(config: &Config, cmd: &FixesCommand) -> anyhow::Result<()> {
    let flight = load_flight(config, &cmd.file)?;

    let count = cmd
        .limit
        .map_or(flight.samples.len(), |n| n.min(flight.samples.len()));
    emit(&render_fixes(&flight.samples[..count], cmd.format)?);
    Ok(())
}

fn handle_series(config: &Config, cmd: &SeriesCommand) -> anyhow::Result<()> {
    let mut config = config.with_max_jump(cmd.max_jump)?;
    if cmd.raw {
        config.cleaning.enabled = false;
    }

    let flight = load_flight(&config, &cmd.file)?;
    emit(&render_series(&flight.barogram(), cmd.format)?);
    Ok(())
}

fn handle_config(config: &Config, cmd: ConfigCommand) -> anyhow::Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Cleaning]");
                println!("  Enabled:            {}", config.cleaning.enabled);
                println!("  Max jump (m):       {}", config.cleaning.max_jump);
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => {
            let path = file.unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            match Config::load_from(Some(path)) {
                Ok(_) => println!("Configuration is valid."),
                Err(e) => println!("Configuration error: {e}"),
            }
        }
    }
    Ok(())
}
