//! HS256 tokens with an unencoded payload (`"b64": false`).
//!
//! The header declares `b64: false`, so the payload segment is the raw
//! compact JSON text instead of its base64url encoding. The signing input
//! is `base64url(header) + "." + raw_payload`, exactly what ends up in the
//! first two segments of the output. The resulting string is meant to be
//! fed to JWT parsers to see how they treat the flag.

use std::fmt;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use hmac::{Hmac, Mac};
use serde::Serialize;
use serde_json::{Value, json};
use sha2::Sha256;
use tracing::debug;
use zeroize::Zeroizing;

use crate::core::payload::{compact_json, ensure_object};
use crate::error::FixtureError;

type HmacSha256 = Hmac<Sha256>;

/// Fixed header of an unencoded-payload token. Field order is the
/// serialization order.
#[derive(Debug, Serialize)]
struct UnencodedHeader {
    alg: &'static str,
    typ: &'static str,
    b64: bool,
}

const HEADER: UnencodedHeader = UnencodedHeader {
    alg: "HS256",
    typ: "JWT",
    b64: false,
};

/// Secret used by the reference fixture.
pub const DEFAULT_SECRET: &str = "secret";

/// Payload used by the reference fixture.
pub fn default_payload() -> Value {
    json!({
        "sub": "1234567890",
        "name": "John Doe",
        "exp": 2000000000,
        "admin": false
    })
}

/// Inputs for [`create_malformed_b64_jwt`].
pub struct UnencodedTokenOptions {
    /// Claims embedded verbatim as the middle segment.
    pub payload: Value,
    /// HMAC-SHA256 shared secret.
    pub secret: Zeroizing<String>,
}

impl Default for UnencodedTokenOptions {
    fn default() -> Self {
        Self {
            payload: default_payload(),
            secret: Zeroizing::new(DEFAULT_SECRET.to_string()),
        }
    }
}

/// Custom `Debug` that keeps the secret out of debug output.
impl fmt::Debug for UnencodedTokenOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnencodedTokenOptions")
            .field("payload", &self.payload)
            .field("secret", &"[REDACTED]")
            .finish()
    }
}

/// Build an unencoded-payload token from options.
pub fn create_malformed_b64_jwt(options: &UnencodedTokenOptions) -> Result<String, FixtureError> {
    build_malformed_b64_jwt(&options.payload, &options.secret)
}

/// Build `base64url(header).raw_payload.base64url(hmac)`.
///
/// # Errors
///
/// Returns an error if the payload is not a JSON object, if the secret is
/// empty, or if serialization fails.
pub fn build_malformed_b64_jwt(payload: &Value, secret: &str) -> Result<String, FixtureError> {
    ensure_object(payload)?;
    if secret.is_empty() {
        return Err(FixtureError::EmptySecret);
    }

    let header_json =
        serde_json::to_vec(&HEADER).map_err(|e| FixtureError::SerializationError {
            segment: "header".to_string(),
            reason: e.to_string(),
        })?;
    let encoded_header = URL_SAFE_NO_PAD.encode(header_json);
    let raw_payload = compact_json(payload)?;

    let signing_input = format!("{encoded_header}.{raw_payload}");
    let signature = hmac_sha256(secret.as_bytes(), signing_input.as_bytes())?;
    let encoded_signature = URL_SAFE_NO_PAD.encode(signature);

    debug!(
        signing_input_len = signing_input.len(),
        "signed unencoded-payload token with HS256"
    );

    Ok(format!("{signing_input}.{encoded_signature}"))
}

fn hmac_sha256(key: &[u8], message: &[u8]) -> Result<Vec<u8>, FixtureError> {
    let mut mac =
        HmacSha256::new_from_slice(key).map_err(|e| FixtureError::SigningFailed {
            reason: e.to_string(),
        })?;
    mac.update(message);
    Ok(mac.finalize().into_bytes().to_vec())
}
