//! Request DTOs for the cache server API

use serde::Deserialize;
use serde_json::Value;

use crate::cache::SetOptions;

/// Maximum allowed key length in bytes
pub const MAX_KEY_LENGTH: usize = 256;

/// Request body for `PUT /set`.
#[derive(Debug, Clone, Deserialize)]
pub struct SetRequest {
    /// The cache key
    pub key: String,
    /// Any JSON payload; stored as-is
    pub value: Value,
    /// Optional lifetime in milliseconds (cache default if absent)
    #[serde(default)]
    pub ttl_ms: Option<u64>,
    /// Optional invalidation tags
    #[serde(default)]
    pub tags: Vec<String>,
}

impl SetRequest {
    /// Returns an error message if the request is unacceptable.
    pub fn validate(&self) -> Option<String> {
        if self.key.is_empty() {
            return Some("Key cannot be empty".to_string());
        }
        if self.key.len() > MAX_KEY_LENGTH {
            return Some(format!(
                "Key exceeds maximum length of {} bytes",
                MAX_KEY_LENGTH
            ));
        }
        if self.tags.iter().any(String::is_empty) {
            return Some("Tags cannot be empty".to_string());
        }
        None
    }

    /// Splits the request into key, value and per-entry options.
    pub fn into_parts(self) -> (String, Value, SetOptions) {
        let options = SetOptions {
            ttl_ms: self.ttl_ms,
            tags: self.tags,
        };
        (self.key, self.value, options)
    }
}
