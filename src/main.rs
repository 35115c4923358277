//! jwt-fixtures: builds unusual JSON Web Tokens for parser and validator testing.
//!
//! Entry point for the application. Initializes logging, parses CLI
//! arguments and delegates to the appropriate command handler. The token
//! is the only thing written to stdout; logs and errors go to stderr.

#![forbid(unsafe_code)]

mod cli;
mod commands;
mod core;
mod error;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};

fn main() -> ExitCode {
    init_logging();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Route `tracing` output to stderr. `RUST_LOG` overrides the default
/// `warn` filter.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Parse CLI arguments and dispatch to the appropriate command handler.
///
/// Returns through `main` rather than `process::exit` so `Zeroizing`
/// buffers holding secrets are dropped.
fn run() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::B64False(args) => commands::b64_false::execute(args),
        Commands::X5c(args) => commands::x5c::execute(args),
    }
}
