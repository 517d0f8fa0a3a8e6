//! Linguaprint - language/locale fingerprinting CLI
//!
//! A local-first diagnostic tool that collects weak language signals from
//! the operating system, installed browsers, the Steam client, and the
//! user's music library, then aggregates them into a ranked profile.

mod classify;
mod cli;
mod models;
mod profile;
mod reporters;
mod sources;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    // RUST_LOG wins over --log-level when set
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    cli::run(cli)
}
