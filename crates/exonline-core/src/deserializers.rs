//! Lenient field deserializers for API records.
//!
//! The API mixes string and number representations for the same field, so
//! scalar fields are read through these helpers instead of serde's strict
//! typing. A value of an unusable type becomes the field's default rather
//! than failing the whole response.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Render a scalar as text. Strings pass through, numbers and bools are
/// formatted; anything else is `None`.
fn scalar_text(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Read a scalar as an integer. Numeric strings are parsed; floats are
/// truncated.
fn scalar_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().filter(|f| f.is_finite()).map(|f| f as i64))
        }
        _ => None,
    }
}

/// Helper function to deserialize text, defaulting to `""`
pub fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar_text(Value::deserialize(deserializer)?).unwrap_or_default())
}

/// Helper function to deserialize nullable text
pub fn opt_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar_text(Value::deserialize(deserializer)?))
}

/// Helper function to deserialize an integer, defaulting to 0
pub fn int<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar_int(&Value::deserialize(deserializer)?).unwrap_or_default())
}
