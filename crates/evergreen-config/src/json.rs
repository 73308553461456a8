//! JSON decoding shared by every JSON-backed artifact, so syntax and shape errors classify the same way.

use crate::error::ConfigError;
use camino::Utf8Path;
use serde::de::{DeserializeOwned, Deserializer};
use serde::Deserialize;
use serde_json::Value;

/// Parse text as JSON; syntax errors are parse errors.
pub fn parse_document(path: &Utf8Path, text: &str) -> Result<Value, ConfigError> {
    serde_json::from_str(text).map_err(|e| ConfigError::parse(path, e.to_string()))
}

/// Ensure the document is an object carrying every required top-level key.
pub fn require_keys(path: &Utf8Path, doc: &Value, keys: &[&str]) -> Result<(), ConfigError> {
    let Some(obj) = doc.as_object() else {
        return Err(ConfigError::schema(path, "expected a JSON object at the top level"));
    };
    for key in keys {
        if !obj.contains_key(*key) {
            return Err(ConfigError::schema(
                path,
                format!("missing required key `{key}`"),
            ));
        }
    }
    Ok(())
}

/// Decode a well-formed document into its typed shape; mismatches are schema errors.
pub fn decode<T: DeserializeOwned>(path: &Utf8Path, doc: Value) -> Result<T, ConfigError> {
    serde_json::from_value(doc).map_err(|e| ConfigError::schema(path, e.to_string()))
}

/// Accept `"39"` and `39` alike.
pub(crate) fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Null => Ok(String::new()),
        other => Err(serde::de::Error::custom(format!(
            "expected a string or number, found {other}"
        ))),
    }
}
