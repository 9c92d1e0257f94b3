//! Configuration management for barograph.
//!
//! This module provides configuration loading and validation using figment,
//! supporting TOML config files, environment variables, and defaults.

use std::path::PathBuf;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::cleaner::DEFAULT_MAX_JUMP;
use crate::error::{Error, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Default configuration directory name.
const CONFIG_DIR_NAME: &str = "barograph";

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `BAROGRAPH_`, sections separated by `__`)
/// 2. TOML config file at `~/.config/barograph/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Altitude cleaning configuration.
    pub cleaning: CleaningConfig,
}

/// Altitude cleaning configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CleaningConfig {
    /// Clean GPS and pressure altitude series.
    /// When disabled the raw series are passed through.
    pub enabled: bool,
    /// Largest plausible altitude change between two fixes, in metres.
    pub max_jump: i32,
}

impl Default for CleaningConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_jump: DEFAULT_MAX_JUMP,
        }
    }
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration with an optional custom config path.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file))
            .merge(Env::prefixed("BAROGRAPH_").split("__"));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        if self.cleaning.max_jump <= 0 {
            return Err(Error::ConfigValidation {
                message: format!(
                    "cleaning.max_jump must be greater than 0 (got {})",
                    self.cleaning.max_jump
                ),
            });
        }
        Ok(())
    }

    /// Return a copy with the cleaning threshold replaced, if one is given.
    ///
    /// # Errors
    ///
    /// Returns an error if the resulting configuration is invalid.
    pub fn with_max_jump(&self, max_jump: Option<i32>) -> Result<Self> {
        let mut config = self.clone();
        if let Some(max_jump) = max_jump {
            config.cleaning.max_jump = max_jump;
        }
        config.validate()?;
        Ok(config)
    }
}
