//! Command-line argument parsing.

use clap::Parser;
use std::path::PathBuf;

use crate::config::{Config, OutputFormat};

/// Vet-Clinic - seed a clinic and print its registrations and summary.
#[derive(Debug, Parser)]
#[command(name = "vet-clinic")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "VET_CLINIC_CONFIG", default_value = "vet-clinic.toml")]
    pub config: PathBuf,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<CliFormat>,

    /// Log filter, e.g. "debug" or "vet_clinic_core=trace"
    #[arg(long)]
    pub log_level: Option<String>,

    /// Start with an empty clinic
    #[arg(long)]
    pub no_demo: bool,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Detailed text (default)
    Text,
    /// JSON summary
    Json,
}

impl From<CliFormat> for OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Text => OutputFormat::Text,
            CliFormat::Json => OutputFormat::Json,
        }
    }
}

impl Cli {
    /// Apply flag overrides on top of the file configuration.
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(format) = self.format {
            config.format = format.into();
        }
        if let Some(level) = &self.log_level {
            config.log_level = level.clone();
        }
        if self.no_demo {
            config.seed_demo = false;
        }
        config
    }
}
