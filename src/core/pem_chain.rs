//! Certificate loading for the `x5c` header.
//!
//! An `x5c` entry is the standard (padded) base64 encoding of a DER
//! certificate. For a well-formed PEM file that is the armored body with
//! the BEGIN/END lines and line breaks removed. The PEM block is decoded
//! and the DER re-encoded, so CRLF endings, trailing whitespace and text
//! around the armor do not leak into the token.

use std::fs;
use std::path::Path;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use tracing::debug;

use crate::error::FixtureError;

const CERTIFICATE_LABEL: &str = "CERTIFICATE";

/// Extract the base64 DER body of the first certificate in `pem_text`.
///
/// `source_name` identifies the input in error messages.
///
/// # Errors
///
/// Returns an error if the text holds no PEM block or if the block is not
/// labelled `CERTIFICATE`.
pub fn certificate_body(pem_text: &str, source_name: &str) -> Result<String, FixtureError> {
    let block = pem::parse(pem_text).map_err(|e| FixtureError::PemDecodeError {
        source_name: source_name.to_string(),
        reason: e.to_string(),
    })?;

    if block.tag() != CERTIFICATE_LABEL {
        return Err(FixtureError::UnexpectedPemLabel {
            source_name: source_name.to_string(),
            label: block.tag().to_string(),
        });
    }

    Ok(STANDARD.encode(block.contents()))
}

/// Read a PEM certificate file and return its `x5c` entry.
pub fn read_certificate_body(path: &Path) -> Result<String, FixtureError> {
    let source_name = path.display().to_string();
    let text = fs::read_to_string(path).map_err(|e| FixtureError::CertificateFileError {
        path: source_name.clone(),
        reason: e.to_string(),
    })?;
    let body = certificate_body(&text, &source_name)?;
    debug!(path = %source_name, der_b64_len = body.len(), "loaded certificate");
    Ok(body)
}

/// Read each certificate in order. Fails on the first unreadable file.
pub fn read_chain(paths: &[impl AsRef<Path>]) -> Result<Vec<String>, FixtureError> {
    paths
        .iter()
        .map(|path| read_certificate_body(path.as_ref()))
        .collect()
}
