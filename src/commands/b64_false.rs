//! Handler for the `b64-false` subcommand.
//!
//! Builds an HS256 token with an unencoded payload and prints it.
//! The secret can come from a CLI argument or an environment variable;
//! without either, the reference fixture secret is used.

use anyhow::{Context, Result};
use tracing::info;
use zeroize::Zeroizing;

use crate::cli::B64FalseArgs;
use crate::core::payload::parse_payload;
use crate::core::unencoded::{UnencodedTokenOptions, create_malformed_b64_jwt};
use crate::error::FixtureError;

/// Execute the `b64-false` subcommand with the given arguments.
pub fn execute(args: &B64FalseArgs) -> Result<()> {
    let options = resolve_options(args)?;
    info!(?options, "building unencoded-payload token");

    let token = create_malformed_b64_jwt(&options).context("could not build b64:false token")?;
    println!("{token}");
    Ok(())
}

/// Turn CLI arguments into builder options, falling back to the fixture defaults.
fn resolve_options(args: &B64FalseArgs) -> Result<UnencodedTokenOptions, FixtureError> {
    let mut options = UnencodedTokenOptions::default();

    if let Some(raw) = &args.payload {
        options.payload = parse_payload(raw)?;
    }

    if let Some(secret) = &args.secret {
        options.secret = secret.clone();
    } else if let Some(var) = &args.secret_env {
        let value = std::env::var(var).map_err(|_| FixtureError::EnvVarNotFound {
            name: var.clone(),
        })?;
        options.secret = Zeroizing::new(value);
    }

    Ok(options)
}
