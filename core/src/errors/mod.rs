//! Error taxonomy for validation attempts

use pv_shared::error_codes;
use thiserror::Error;

/// Failure reported by a lookup provider
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// The endpoint answered with a non-success status
    #[error("lookup endpoint responded with status {status}")]
    Status { status: u16 },

    /// The request could not be sent or the response could not be read
    #[error("{0}")]
    Transport(String),

    /// The response body was not a validation result
    #[error("{0}")]
    Decode(String),
}

/// Outcome of a failed validation attempt, as shown by the widget
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Submitted without a phone value; no request was made
    #[error("phone number is required")]
    EmptyInput,

    /// The endpoint answered with a non-success status
    #[error("phone lookup failed with status {status}")]
    RequestFailed { status: u16 },

    /// Network failure or malformed body; the description is user facing
    #[error("{description}")]
    Transport { description: String },
}

impl ValidationError {
    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::EmptyInput => error_codes::EMPTY_INPUT,
            ValidationError::RequestFailed { .. } => error_codes::REQUEST_FAILED,
            ValidationError::Transport { .. } => error_codes::TRANSPORT,
        }
    }
}

impl From<LookupError> for ValidationError {
    fn from(error: LookupError) -> Self {
        match error {
            LookupError::Status { status } => ValidationError::RequestFailed { status },
            LookupError::Transport(description) | LookupError::Decode(description) => {
                ValidationError::Transport { description }
            }
        }
    }
}
