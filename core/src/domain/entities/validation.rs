//! Validation request and result entities

use serde::{Deserialize, Deserializer, Serialize};

/// One phone number submitted for validation.
///
/// Holds the raw user input untouched; callers encode it for transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationRequest {
    phone: String,
}

impl ValidationRequest {
    pub fn new(phone: impl Into<String>) -> Self {
        Self {
            phone: phone.into(),
        }
    }

    /// The raw phone value as entered
    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// Whether the input is empty or whitespace only
    pub fn is_blank(&self) -> bool {
        self.phone.trim().is_empty()
    }
}

/// Validation fields returned by the lookup endpoint.
///
/// Accepts both `lineType` and `line_type` on the wire. Unknown fields are
/// ignored and a missing or `null` `valid` reads as `false`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    /// Whether the input is a valid phone number
    #[serde(default, deserialize_with = "null_as_false")]
    pub valid: bool,

    /// Inferred country name or code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    /// Inferred network operator
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carrier: Option<String>,

    /// Line type such as mobile, landline or VOIP
    #[serde(default, alias = "line_type", skip_serializing_if = "Option::is_none")]
    pub line_type: Option<String>,
}

impl ValidationResult {
    /// Country to display, `None` when absent or empty
    pub fn country(&self) -> Option<&str> {
        displayable(&self.country)
    }

    /// Carrier to display, `None` when absent or empty
    pub fn carrier(&self) -> Option<&str> {
        displayable(&self.carrier)
    }

    /// Line type to display, `None` when absent or empty
    pub fn line_type(&self) -> Option<&str> {
        displayable(&self.line_type)
    }
}

fn displayable(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|value| !value.is_empty())
}

fn null_as_false<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}
