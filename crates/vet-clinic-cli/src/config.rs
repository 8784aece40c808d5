//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use vet_clinic_core::report::{validate_date_format, DEFAULT_DATE_FORMAT};

/// CLI configuration. Every field has a default, so an empty file is valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Log filter used when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Report output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,

    /// strftime layout for timestamps in text reports
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Load the demonstration clinic on start
    #[serde(default = "default_true")]
    pub seed_demo: bool,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// JSON summary
    Json,
}

impl Config {
    /// Load configuration from `path`, or defaults when the file is absent.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to `path`, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let contents = toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))?;
        fs::write(path, contents)?;
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        validate_date_format(&self.date_format)
            .map_err(|e| CliError::Config(format!("date_format: {}", e)))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            format: default_format(),
            date_format: default_date_format(),
            seed_demo: true,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_format() -> OutputFormat {
    OutputFormat::Text
}

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}

fn default_true() -> bool {
    true
}
