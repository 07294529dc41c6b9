//! View state of the validation widget

use crate::domain::ValidationResult;
use crate::errors::ValidationError;

/// What the widget currently shows below the input.
///
/// Exactly one state holds at a time, so a result and an error can never be
/// displayed together.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ViewState {
    /// Nothing submitted yet; only the input and button are visible
    #[default]
    Idle,
    /// A lookup is in flight
    Loading,
    /// The last attempt failed
    Error(ValidationError),
    /// The last attempt returned a result
    Result(ValidationResult),
}

impl ViewState {
    pub fn is_idle(&self) -> bool {
        matches!(self, ViewState::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn error(&self) -> Option<&ValidationError> {
        match self {
            ViewState::Error(error) => Some(error),
            _ => None,
        }
    }

    pub fn result(&self) -> Option<&ValidationResult> {
        match self {
            ViewState::Result(result) => Some(result),
            _ => None,
        }
    }

    /// Short state name used in logs and JSON responses
    pub fn name(&self) -> &'static str {
        match self {
            ViewState::Idle => "idle",
            ViewState::Loading => "loading",
            ViewState::Error(_) => "error",
            ViewState::Result(_) => "result",
        }
    }
}
