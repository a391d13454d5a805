//! Response model
//!
//! The decoded payload is kept as an untyped JSON tree; callers navigate it by path.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::warn;

/// Usage statistics reported by the API in response headers
///
/// Every field is optional: `None` means the header was absent or unparseable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResponseStatistics {
    /// Remaining free quota
    pub free_quota: Option<i64>,
    /// Requests used in the current billing period
    pub usage: Option<i64>,
    /// Server side latency in seconds
    pub latency_seconds: Option<f64>,
    /// Next billing date
    pub next_billing_date: Option<DateTime<FixedOffset>>,
}

/// The standard response of every endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Response {
    pub stats: ResponseStatistics,
    pub data: Map<String, Value>,
}

impl Response {
    /// Encode the response data as JSON
    ///
    /// Serialization errors are swallowed: an empty string is returned instead.
    pub fn to_json(&self) -> String {
        to_json_string(&self.data)
    }

    /// Value at a dot separated path, e.g. `results.0.id`
    ///
    /// Numeric segments index into arrays. An empty path yields `None`.
    pub fn value_at(&self, path: &str) -> Option<&Value> {
        let mut segments = path.split('.');
        let mut current = self.data.get(segments.next()?)?;

        for segment in segments {
            current = match current {
                Value::Object(map) => map.get(segment)?,
                Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
                _ => return None,
            };
        }

        Some(current)
    }

    pub fn str_at(&self, path: &str) -> Option<&str> {
        self.value_at(path)?.as_str()
    }

    pub fn f64_at(&self, path: &str) -> Option<f64> {
        self.value_at(path)?.as_f64()
    }

    pub fn i64_at(&self, path: &str) -> Option<i64> {
        self.value_at(path)?.as_i64()
    }

    pub fn bool_at(&self, path: &str) -> Option<bool> {
        self.value_at(path)?.as_bool()
    }

    pub fn array_at(&self, path: &str) -> Option<&Vec<Value>> {
        self.value_at(path)?.as_array()
    }

    pub fn object_at(&self, path: &str) -> Option<&Map<String, Value>> {
        self.value_at(path)?.as_object()
    }
}

/// Best-effort JSON serialization
///
/// Returns an empty string when `value` fails to serialize.
pub fn to_json_string<T: Serialize + ?Sized>(value: &T) -> String {
    match serde_json::to_string(value) {
        Ok(json) => json,
        Err(e) => {
            warn!("Failed to marshal response data to json: {}", e);
            String::new()
        }
    }
}
