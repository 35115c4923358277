//! Payload parsing and serialization shared by both token builders.

use serde_json::Value;

use crate::error::FixtureError;

/// Parse a user-supplied payload string into a JSON object.
///
/// # Errors
///
/// Returns an error if the input is not valid JSON or is not an object.
pub fn parse_payload(raw: &str) -> Result<Value, FixtureError> {
    let value: Value = serde_json::from_str(raw).map_err(|e| FixtureError::InvalidPayload {
        reason: e.to_string(),
    })?;
    ensure_object(&value)?;
    Ok(value)
}

/// Reject any payload that is not a JSON object.
pub fn ensure_object(payload: &Value) -> Result<(), FixtureError> {
    if payload.is_object() {
        return Ok(());
    }
    Err(FixtureError::PayloadNotObject {
        kind: json_kind(payload).to_string(),
    })
}

/// Serialize the payload as compact JSON, keeping the caller's key order.
///
/// Non-ASCII characters are written as raw UTF-8, not `\uXXXX` escapes.
pub fn compact_json(payload: &Value) -> Result<String, FixtureError> {
    serde_json::to_string(payload).map_err(|e| FixtureError::SerializationError {
        segment: "payload".to_string(),
        reason: e.to_string(),
    })
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
