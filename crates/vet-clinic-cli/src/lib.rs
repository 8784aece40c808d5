//! Vet-Clinic CLI library.
//!
//! Configuration loading, argument parsing and the demonstration clinic
//! used by the `vet-clinic` binary.

pub mod cli;
pub mod config;
pub mod demo;
pub mod error;

pub use cli::{Cli, CliFormat};
pub use config::{Config, OutputFormat};
pub use error::{CliError, Result};
