//! Vet-Clinic CLI - seed a clinic and print its registrations and summary.

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use vet_clinic_cli::{demo, Cli, Config};
use vet_clinic_core::Registry;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = Config::load(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?;
    let config = cli.apply(config);

    // Initialize tracing (log to stderr); RUST_LOG wins over the config
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .context("invalid log filter")?;
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    let mut registry = Registry::new();
    if config.seed_demo {
        demo::seed(&mut registry).context("seeding demo clinic")?;
    }

    println!("{}", demo::render(&registry, &config)?);
    Ok(())
}
