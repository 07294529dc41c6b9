//! Request and response payloads of the validation endpoints

use serde::{Deserialize, Serialize};

use pv_core::{ValidationError, ValidationResult};

use crate::i18n::WidgetMessages;
use crate::views::ResultCard;

/// `phone` query parameter; absent means no attempt was made
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PhoneQuery {
    pub phone: Option<String>,
}

/// Form-encoded widget submission
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PhoneForm {
    #[serde(default)]
    pub phone: String,
}

/// `data` member of the JSON validation response
///
/// ```json
/// {"state": "result", "result": {"valid": true, "country": "USA"}, "card": {...}}
/// {"state": "error", "kind": "empty_input"}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationData {
    pub state: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<ValidationResult>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card: Option<ResultCard>,
}

impl ValidationData {
    pub fn result(result: &ValidationResult, messages: &WidgetMessages) -> Self {
        Self {
            state: "result".to_string(),
            kind: None,
            result: Some(result.clone()),
            card: Some(ResultCard::from_result(result, messages)),
        }
    }

    pub fn error(error: &ValidationError) -> Self {
        Self {
            state: "error".to_string(),
            kind: Some(error.code().to_string()),
            result: None,
            card: None,
        }
    }
}
