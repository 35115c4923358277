//! Shared test fixtures and helper utilities.
//!
//! Provides the reference tokens, an on-the-fly root/intermediate/leaf
//! certificate chain written to a temporary directory, and helpers to
//! decode and verify the tokens the binary prints.

use std::fs;
use std::path::Path;

use base64::Engine;
use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};
use p256::ecdsa::signature::Verifier;
use p256::ecdsa::{Signature, VerifyingKey};
use rcgen::{
    BasicConstraints, CertificateParams, DistinguishedName, DnType, IsCa, Issuer, KeyPair,
};
use tempfile::TempDir;

/// Output of `b64-false` with no flags.
///
/// Header: `{"alg":"HS256","typ":"JWT","b64":false}`
/// Payload: `{"sub":"1234567890","name":"John Doe","exp":2000000000,"admin":false}`
/// Secret: `"secret"`
pub const REFERENCE_B64_FALSE_TOKEN: &str = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCIsImI2NCI6ZmFsc2V9.\
     {\"sub\":\"1234567890\",\"name\":\"John Doe\",\"exp\":2000000000,\"admin\":false}.\
     pMWKqg9lzgVaSEJyf4ZjF4thJt1Gi0i4Cxm5OUdGAq4";

/// Output of `b64-false --payload '{"cool":true}'` with secret `"other-secret"`.
pub const COOL_B64_FALSE_TOKEN: &str = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCIsImI2NCI6ZmFsc2V9.\
     {\"cool\":true}.\
     Ma939Y_nwM-u8aUfjViShrjhLCDqREUYmr5P0d2ooKc";

/// Secret used to sign [`COOL_B64_FALSE_TOKEN`].
pub const OTHER_SECRET: &str = "other-secret";

pub const LEAF_CERT: &str = "leaf_cert.pem";
pub const INTERMEDIATE_CERT: &str = "intermediate_cert.pem";
pub const ROOT_CERT: &str = "root_cert.pem";
pub const LEAF_KEY: &str = "leaf_key.pem";

/// All four input files of the `x5c` subcommand.
pub const X5C_INPUT_FILES: [&str; 4] = [ROOT_CERT, INTERMEDIATE_CERT, LEAF_CERT, LEAF_KEY];

fn ca_params(common_name: &str) -> CertificateParams {
    let mut params = CertificateParams::new(Vec::<String>::new()).unwrap();
    params.is_ca = IsCa::Ca(BasicConstraints::Unconstrained);
    let mut dn = DistinguishedName::new();
    dn.push(DnType::CommonName, common_name);
    params.distinguished_name = dn;
    params
}

/// Generate root -> intermediate -> leaf and write the four PEM files the
/// `x5c` subcommand reads by default into a fresh temporary directory.
pub fn write_cert_chain() -> TempDir {
    let dir = tempfile::tempdir().unwrap();

    let root_key = KeyPair::generate().unwrap();
    let root_params = ca_params("jwt-fixtures Root");
    let root = root_params.self_signed(&root_key).unwrap();
    let root_issuer = Issuer::new(root_params, root_key);

    let intermediate_key = KeyPair::generate().unwrap();
    let intermediate_params = ca_params("jwt-fixtures Intermediate");
    let intermediate = intermediate_params
        .signed_by(&intermediate_key, &root_issuer)
        .unwrap();
    let intermediate_issuer = Issuer::new(intermediate_params, intermediate_key);

    let leaf_key = KeyPair::generate().unwrap();
    let mut leaf_params = CertificateParams::new(vec!["leaf.test".to_string()]).unwrap();
    let mut dn = DistinguishedName::new();
    dn.push(DnType::CommonName, "leaf.test");
    leaf_params.distinguished_name = dn;
    let leaf = leaf_params.signed_by(&leaf_key, &intermediate_issuer).unwrap();

    fs::write(dir.path().join(ROOT_CERT), root.pem()).unwrap();
    fs::write(dir.path().join(INTERMEDIATE_CERT), intermediate.pem()).unwrap();
    fs::write(dir.path().join(LEAF_CERT), leaf.pem()).unwrap();
    fs::write(dir.path().join(LEAF_KEY), leaf_key.serialize_pem()).unwrap();

    dir
}

/// Strip PEM armor and newlines by plain string replacement.
pub fn stripped_pem_body(path: &Path) -> String {
    fs::read_to_string(path)
        .unwrap()
        .trim()
        .replace("-----BEGIN CERTIFICATE-----", "")
        .replace("-----END CERTIFICATE-----", "")
        .replace(['\r', '\n'], "")
}

/// Base64url-decode a token segment and parse it as JSON.
pub fn decode_json_segment(segment: &str) -> serde_json::Value {
    let bytes = URL_SAFE_NO_PAD.decode(segment).unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// The `x5c` array of a compact token's header.
pub fn x5c_chain(token: &str) -> Vec<String> {
    let header = decode_json_segment(token.split('.').next().unwrap());
    serde_json::from_value(header["x5c"].clone()).unwrap()
}

/// Check an ES256 signature against the public key of a base64 DER certificate.
pub fn verify_es256_with_certificate(token: &str, cert_b64: &str) -> bool {
    let der = STANDARD.decode(cert_b64).unwrap();
    let (_, cert) = x509_parser::parse_x509_certificate(&der).unwrap();
    let point = cert.public_key().subject_public_key.data.to_vec();
    let verifying_key = VerifyingKey::from_sec1_bytes(&point).unwrap();

    let (signing_input, signature) = token.rsplit_once('.').unwrap();
    let signature = Signature::from_slice(&URL_SAFE_NO_PAD.decode(signature).unwrap()).unwrap();
    verifying_key.verify(signing_input.as_bytes(), &signature).is_ok()
}
