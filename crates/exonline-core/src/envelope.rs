//! The response envelope shared by every Ex-Online endpoint.
//!
//! Every response looks like
//! `{status, message, err, timestamp, data: [...], token, "auto-close"}`.
//! None of those keys are guaranteed to be present, so every envelope field
//! has a default and `data` decodes to an empty list when absent or `null`.
//!
//! Records inside `data` follow the same rule: JSON `null` is stripped before
//! decoding, so a `null` and a missing key always produce the same default.

use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::api::ApiError;
use crate::deserializers::{int, text};

/// The `status` tag of an envelope.
///
/// Unknown tags are kept verbatim so re-encoding does not lose them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Status {
    Success,
    Warning,
    Danger,
    Other(String),
}

impl Default for Status {
    fn default() -> Self {
        Status::Other(String::new())
    }
}

impl From<String> for Status {
    fn from(s: String) -> Self {
        match s.as_str() {
            "success" => Status::Success,
            "warning" => Status::Warning,
            "danger" => Status::Danger,
            _ => Status::Other(s),
        }
    }
}

impl From<Status> for String {
    fn from(status: Status) -> Self {
        match status {
            Status::Success => "success".to_string(),
            Status::Warning => "warning".to_string(),
            Status::Danger => "danger".to_string(),
            Status::Other(s) => s,
        }
    }
}

/// A decoded response: status metadata plus a typed `data` list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    #[serde(default)]
    pub status: Status,
    #[serde(default, deserialize_with = "text")]
    pub message: String,
    /// 0 means success, whatever `status` says.
    #[serde(default, deserialize_with = "int")]
    pub err: i64,
    /// Unix seconds.
    #[serde(default, deserialize_with = "int")]
    pub timestamp: i64,
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
    #[serde(default, deserialize_with = "text")]
    pub token: String,
    #[serde(rename = "auto-close", default, skip_serializing_if = "Option::is_none")]
    pub auto_close: Option<bool>,
}

impl<T: DeserializeOwned> Envelope<T> {
    /// Decode a raw JSON response into an envelope of `T` records.
    ///
    /// Records are decoded in order; none are skipped. Scalar fields accept
    /// either a string or a number and fall back to their default for any
    /// other type. Only a `data` that is not a list of objects fails the
    /// envelope with `ApiError::Decode`.
    pub fn from_value(mut raw: Value) -> Result<Self, ApiError> {
        strip_nulls(&mut raw);
        Ok(serde_json::from_value(raw)?)
    }

    pub fn from_json_str(body: &str) -> Result<Self, ApiError> {
        Self::from_value(serde_json::from_str(body)?)
    }
}

impl<T> Envelope<T> {
    pub fn is_success(&self) -> bool {
        self.err == 0
    }

    /// Unwrap the records, turning a non-zero `err` into `ApiError::Api`.
    ///
    /// The records of a failed envelope are dropped, never returned.
    pub fn into_data(self) -> Result<Vec<T>, ApiError> {
        if self.is_success() {
            return Ok(self.data);
        }
        warn!(code = self.err, message = %self.message, "API returned an error envelope");
        Err(ApiError::Api {
            code: self.err,
            message: self.message,
        })
    }

    /// `timestamp` as a UTC datetime; `None` when unset or out of range.
    pub fn issued_at(&self) -> Option<DateTime<Utc>> {
        if self.timestamp == 0 {
            return None;
        }
        DateTime::from_timestamp(self.timestamp, 0)
    }
}

/// Remove every `null` object member, recursively.
///
/// After this pass "absent" and "null" are the same thing to serde, and
/// `#[serde(default)]` covers both. Array elements are left alone so the
/// element count never changes.
fn strip_nulls(value: &mut Value) {
    match value {
        Value::Object(map) => {
            map.retain(|_, v| !v.is_null());
            map.values_mut().for_each(strip_nulls);
        }
        Value::Array(items) => items.iter_mut().for_each(strip_nulls),
        _ => {}
    }
}
