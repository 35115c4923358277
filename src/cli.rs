//! CLI argument definitions for jwt-fixtures.
//!
//! Uses `clap` derive macros to define the command-line interface.
//! Every flag is optional: running a subcommand bare reproduces the
//! reference fixture.
//!
//! # Security
//!
//! `B64FalseArgs` implements a custom `Debug` that redacts the HMAC
//! secret so it cannot leak through debug formatting or logging.

use std::fmt;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use zeroize::Zeroizing;

/// Build deliberately unusual JSON Web Tokens for exercising JWT parsers
/// and validators.
#[derive(Debug, Parser)]
#[command(name = "jwt-fixtures")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print an HS256 token whose header sets "b64": false (raw JSON payload).
    #[command(name = "b64-false")]
    B64False(B64FalseArgs),

    /// Print an ES256 token carrying an x5c certificate chain from PEM files.
    X5c(X5cArgs),
}

/// Arguments for the `b64-false` subcommand.
#[derive(clap::Args)]
pub struct B64FalseArgs {
    /// JSON object to embed as the raw payload segment.
    #[arg(long, value_name = "JSON")]
    pub payload: Option<String>,

    /// HMAC shared secret (defaults to "secret").
    ///
    /// WARNING: Passing secrets via CLI arguments may expose them in shell
    /// history. Prefer --secret-env instead.
    #[arg(long, value_name = "SECRET", value_parser = parse_zeroizing_string, conflicts_with = "secret_env")]
    pub secret: Option<Zeroizing<String>>,

    /// Read the HMAC secret from the specified environment variable.
    #[arg(long, value_name = "VAR_NAME")]
    pub secret_env: Option<String>,
}

/// Parse a string into a `Zeroizing<String>` for secure CLI arguments.
fn parse_zeroizing_string(s: &str) -> Result<Zeroizing<String>, std::convert::Infallible> {
    Ok(Zeroizing::new(s.to_string()))
}

/// Custom `Debug` that redacts the secret field.
impl fmt::Debug for B64FalseArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("B64FalseArgs")
            .field("payload", &self.payload)
            .field("secret", &self.secret.as_ref().map(|_| "[REDACTED]"))
            .field("secret_env", &self.secret_env)
            .finish()
    }
}

/// Arguments for the `x5c` subcommand.
#[derive(Debug, clap::Args)]
pub struct X5cArgs {
    /// JSON object to sign (defaults to {"cool":false}).
    #[arg(long, value_name = "JSON")]
    pub payload: Option<String>,

    /// Directory that relative certificate and key paths are resolved against.
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub cert_dir: PathBuf,

    /// PEM-encoded P-256 private key (PKCS#8 or SEC1) used to sign.
    #[arg(long, value_name = "FILE", default_value = "leaf_key.pem")]
    pub key: PathBuf,

    /// PEM certificate to place in x5c. Repeat to build the chain leaf first.
    ///
    /// Replaces the default chain of leaf_cert.pem, intermediate_cert.pem
    /// and root_cert.pem, which makes partial or reordered chains possible.
    #[arg(long = "cert", value_name = "FILE")]
    pub certs: Vec<PathBuf>,
}
