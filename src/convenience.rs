//! Convenience functions for common conversion patterns.
//!
//! These compose the codecs with each other or with `serde_json`.

use serde_json::{Map, Value};

use crate::{bytes_to_hex, int_to_bytes_be};

/// Formats the low `size` bytes of `value` as big-endian hex.
///
/// # Example
/// ```
/// use convkit::convenience::int_to_hex_string;
///
/// assert_eq!(int_to_hex_string(0xA8, 1), "A8");
/// assert_eq!(int_to_hex_string(0xA8, 4), "000000A8");
/// ```
pub fn int_to_hex_string(value: i32, size: usize) -> String {
    bytes_to_hex(&int_to_bytes_be(value, size))
}

/// Parses bytes as a JSON object.
///
/// Returns `None` when the text is not JSON or is JSON of another kind.
pub fn bytes_to_json_object(bytes: &[u8]) -> Option<Map<String, Value>> {
    match parse_json(bytes)? {
        Value::Object(map) => Some(map),
        other => {
            tracing::warn!(kind = json_kind(&other), "expected a JSON object");
            None
        }
    }
}

/// Parses bytes as a JSON array.
pub fn bytes_to_json_array(bytes: &[u8]) -> Option<Vec<Value>> {
    match parse_json(bytes)? {
        Value::Array(items) => Some(items),
        other => {
            tracing::warn!(kind = json_kind(&other), "expected a JSON array");
            None
        }
    }
}

/// Serializes a JSON value compactly.
pub fn json_to_bytes(value: &Value) -> Vec<u8> {
    value.to_string().into_bytes()
}

fn parse_json(bytes: &[u8]) -> Option<Value> {
    let text = String::from_utf8_lossy(bytes);
    match serde_json::from_str(&text) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!(error = %e, "bytes are not valid JSON");
            None
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
