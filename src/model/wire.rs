//! Lenient decoding of text fields in request bodies.
//!
//! Contact columns are free text, so a scalar of any JSON type is stored as
//! its textual form: `5551234` becomes `"5551234"`, `true` becomes `"true"`.
//! Arrays and objects are rejected.

use serde::{de, Deserialize, Deserializer};
use serde_json::Value;

fn value_to_text(value: Value) -> Result<Option<String>, String> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s)),
        Value::Number(n) => Ok(Some(n.to_string())),
        Value::Bool(b) => Ok(Some(b.to_string())),
        Value::Array(_) | Value::Object(_) => Err("expected a string or number".to_string()),
    }
}

/// `Option<String>` field: null and absent both decode to `None`.
pub fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None => Ok(None),
        Some(value) => value_to_text(value).map_err(de::Error::custom),
    }
}

/// `Option<Option<String>>` patch field. Use together with `#[serde(default)]`
/// so an absent key stays `None` and an explicit null becomes `Some(None)`.
pub fn patch_text<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    text(deserializer).map(Some)
}
