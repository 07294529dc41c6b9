//! View-model of the validation widget
//!
//! Rendering follows the view state in priority order: loading indicator,
//! then error message, then result card. An idle widget shows none of them.

use serde::{Deserialize, Serialize};

use pv_core::{ValidationError, ValidationResult, ValidationWidget, ViewState};

use crate::i18n::WidgetMessages;

/// The four fields of a validation result, ready for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultCard {
    pub valid: String,
    pub country: String,
    pub carrier: String,
    pub line_type: String,
}

impl ResultCard {
    /// Absent or empty optional fields show the placeholder
    pub fn from_result(result: &ValidationResult, messages: &WidgetMessages) -> Self {
        let or_placeholder =
            |value: Option<&str>| value.unwrap_or(messages.placeholder.as_str()).to_string();

        Self {
            valid: if result.valid {
                messages.yes.clone()
            } else {
                messages.no.clone()
            },
            country: or_placeholder(result.country()),
            carrier: or_placeholder(result.carrier()),
            line_type: or_placeholder(result.line_type()),
        }
    }
}

/// User-facing text for a failed attempt.
///
/// Empty input and failed requests use fixed messages; the status code of a
/// failed request is never shown. Transport descriptions are shown as is.
pub fn error_message(error: &ValidationError, messages: &WidgetMessages) -> String {
    match error {
        ValidationError::EmptyInput => messages.empty_input.clone(),
        ValidationError::RequestFailed { .. } => messages.request_failed.clone(),
        ValidationError::Transport { description } => description.clone(),
    }
}

/// Serializable widget state consumed by the templates
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WidgetView {
    pub phone_input: String,
    pub state: &'static str,
    pub loading: bool,
    pub error: Option<String>,
    pub card: Option<ResultCard>,
    pub submit_label: String,
    pub submit_disabled: bool,
}

impl WidgetView {
    pub fn from_widget(widget: &ValidationWidget, messages: &WidgetMessages) -> Self {
        Self::new(widget.phone_input(), widget.view(), messages)
    }

    pub fn new(phone_input: &str, view: &ViewState, messages: &WidgetMessages) -> Self {
        let loading = view.is_loading();

        Self {
            phone_input: phone_input.to_string(),
            state: view.name(),
            loading,
            error: view.error().map(|e| error_message(e, messages)),
            card: view.result().map(|r| ResultCard::from_result(r, messages)),
            submit_label: if loading {
                messages.submitting.clone()
            } else {
                messages.submit.clone()
            },
            submit_disabled: loading,
        }
    }
}
