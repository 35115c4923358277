//! Domain error types for jwt-fixtures.
//!
//! All token-building errors are defined here using `thiserror`.
//! They are converted to `anyhow` errors at the command boundary and
//! rendered as a single diagnostic line on stderr.

use thiserror::Error;

/// Errors that can occur while building a fixture token.
#[derive(Debug, Error)]
pub enum FixtureError {
    /// The payload is valid JSON but not a JSON object.
    #[error("payload must be a JSON object, got {kind}")]
    PayloadNotObject {
        /// The JSON kind that was supplied (e.g., "array", "string").
        kind: String,
    },

    /// The payload argument could not be parsed as JSON.
    #[error("failed to parse payload as JSON: {reason}")]
    InvalidPayload {
        /// Description of the parsing failure.
        reason: String,
    },

    /// A token segment could not be serialized.
    #[error("failed to serialize {segment}: {reason}")]
    SerializationError {
        /// Which segment failed (e.g., "header", "payload").
        segment: String,
        /// Description of the serialization failure.
        reason: String,
    },

    /// The HMAC secret is empty.
    #[error("HMAC secret must not be empty")]
    EmptySecret,

    /// The specified environment variable is not set.
    #[error("environment variable '{name}' is not set")]
    EnvVarNotFound {
        /// Name of the missing environment variable.
        name: String,
    },

    /// Failed to read a certificate file.
    #[error("failed to read certificate file '{path}': {reason}")]
    CertificateFileError {
        /// Path to the certificate file.
        path: String,
        /// Description of the read failure.
        reason: String,
    },

    /// A certificate source is not valid PEM.
    #[error("failed to decode PEM from '{source_name}': {reason}")]
    PemDecodeError {
        /// File path or other label identifying the PEM source.
        source_name: String,
        /// Description of the decoding failure.
        reason: String,
    },

    /// A PEM block carries a label other than `CERTIFICATE`.
    #[error("expected a CERTIFICATE PEM block in '{source_name}', found '{label}'")]
    UnexpectedPemLabel {
        /// File path or other label identifying the PEM source.
        source_name: String,
        /// The label found in the PEM armor.
        label: String,
    },

    /// No certificates were supplied for the `x5c` header.
    #[error("x5c certificate chain must contain at least one certificate")]
    EmptyChain,

    /// Failed to read the private key file.
    #[error("failed to read key file '{path}': {reason}")]
    KeyFileError {
        /// Path to the key file.
        path: String,
        /// Description of the read failure.
        reason: String,
    },

    /// The private key is not a usable P-256 key.
    #[error("invalid ES256 signing key: {reason}")]
    InvalidSigningKey {
        /// Description of why the key was rejected.
        reason: String,
    },

    /// The signing step itself failed.
    #[error("failed to sign token: {reason}")]
    SigningFailed {
        /// Description of the signing failure.
        reason: String,
    },
}
