//! Handler for the `x5c` subcommand.
//!
//! Reads the certificate chain and leaf key from disk, signs the payload
//! with ES256 and prints the token. Any missing or malformed file aborts
//! before anything is written to stdout.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::cli::X5cArgs;
use crate::core::payload::parse_payload;
use crate::core::x5c::{X5cTokenOptions, create_x5c_jwt};
use crate::error::FixtureError;

/// Execute the `x5c` subcommand with the given arguments.
pub fn execute(args: &X5cArgs) -> Result<()> {
    let options = resolve_options(args)?;
    info!(
        key = %options.private_key.display(),
        chain_len = options.chain.len(),
        "building x5c token"
    );

    let token = create_x5c_jwt(&options).context("could not build x5c token")?;
    println!("{token}");
    Ok(())
}

/// Turn CLI arguments into builder options. Relative paths are resolved
/// against `--cert-dir`; absolute paths are kept as given.
fn resolve_options(args: &X5cArgs) -> Result<X5cTokenOptions, FixtureError> {
    let dir: &Path = &args.cert_dir;
    let mut options = X5cTokenOptions::in_dir(dir);

    if let Some(raw) = &args.payload {
        options.payload = parse_payload(raw)?;
    }
    options.private_key = dir.join(&args.key);
    if !args.certs.is_empty() {
        options.chain = args.certs.iter().map(|cert| dir.join(cert)).collect();
    }

    Ok(options)
}
