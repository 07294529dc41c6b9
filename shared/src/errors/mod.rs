//! Error body of the JSON endpoints and the machine-readable codes it carries

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Stable codes clients can match on; messages next to them are localized
pub mod error_codes {
    pub const NOT_FOUND: &str = "not_found";
    pub const EMPTY_INPUT: &str = "empty_input";
    pub const REQUEST_FAILED: &str = "request_failed";
    pub const TRANSPORT: &str = "transport";
    pub const INTERNAL_ERROR: &str = "internal_error";
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// One of [`error_codes`]
    pub error: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub details: Map<String, Value>,
    pub timestamp: DateTime<Utc>,
}

impl ErrorResponse {
    pub fn new(code: &str, message: impl Into<String>) -> Self {
        Self {
            error: code.to_string(),
            message: message.into(),
            details: Map::new(),
            timestamp: Utc::now(),
        }
    }

    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }
}
