//! JSON envelopes returned by the `/api/v1` and `/health` endpoints

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Envelope around every `/api/v1` payload.
///
/// `success` is derived from the absence of `error`, so an error envelope
/// may still carry `data` describing the failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    pub timestamp: DateTime<Utc>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

impl<T> ApiResponse<T> {
    fn envelope(data: Option<T>, error: Option<String>) -> Self {
        Self {
            success: error.is_none(),
            data,
            error,
            timestamp: Utc::now(),
            request_id: None,
        }
    }

    pub fn success(data: T) -> Self {
        Self::envelope(Some(data), None)
    }

    /// Failure envelope with a user-facing message
    pub fn error(message: impl Into<String>) -> Self {
        Self::envelope(None, Some(message.into()))
    }

    pub fn with_data(self, data: T) -> Self {
        Self {
            data: Some(data),
            ..self
        }
    }

    pub fn with_request_id(self, request_id: impl Into<String>) -> Self {
        Self {
            request_id: Some(request_id.into()),
            ..self
        }
    }
}

/// Body of `GET /health`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    /// `http` or `mock`
    pub lookup_provider: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy(
        service: impl Into<String>,
        version: impl Into<String>,
        lookup_provider: impl Into<String>,
    ) -> Self {
        Self {
            status: "healthy".to_string(),
            service: service.into(),
            version: version.into(),
            lookup_provider: lookup_provider.into(),
            timestamp: Utc::now(),
        }
    }
}
