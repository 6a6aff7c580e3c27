//! ringls - breadth-first directory lister
//!
//! Entry point for the CLI application.

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use ringls::listing::{CliArgs, ListConfig, Lister};
use std::io::{self, BufWriter};
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("ringls: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let args = CliArgs::parse();
    let config = ListConfig::from_args(args);

    setup_logging(&config)?;

    let stdout = io::stdout();
    let mut lister = Lister::new(config.options, BufWriter::new(stdout.lock()));
    let stats = lister
        .run(&config.paths)
        .context("Failed to list directories")?;

    info!(
        dirs = stats.dirs,
        entries = stats.entries,
        errors = stats.errors,
        "done"
    );
    Ok(())
}

/// Logs go to stderr so stdout carries only the listing. `RUST_LOG` wins over `-v`.
fn setup_logging(config: &ListConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_directive()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .try_init()
        .map_err(|e| anyhow!("Failed to install log subscriber: {e}"))?;

    Ok(())
}
