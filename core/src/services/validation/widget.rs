//! The validation widget state machine

use pv_shared::phone::mask_phone_number;

use crate::domain::{ValidationRequest, ValidationResult};
use crate::errors::{LookupError, ValidationError};

use super::traits::PhoneLookupTrait;
use super::types::ViewState;

/// Owns the phone input and the view state of the validation feature.
///
/// Editing the input never touches the view; only a submit does. A submit
/// moves through `Loading` and always ends in `Error` or `Result`.
#[derive(Debug, Clone, Default)]
pub struct ValidationWidget {
    phone_input: String,
    view: ViewState,
}

impl ValidationWidget {
    /// Create an idle widget with an empty input
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an idle widget holding `phone`
    pub fn with_input(phone: impl Into<String>) -> Self {
        Self {
            phone_input: phone.into(),
            view: ViewState::Idle,
        }
    }

    /// Replace the input value, keeping any previous result or error visible
    pub fn set_input(&mut self, value: impl Into<String>) {
        self.phone_input = value.into();
    }

    pub fn phone_input(&self) -> &str {
        &self.phone_input
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn into_view(self) -> ViewState {
        self.view
    }

    pub fn is_loading(&self) -> bool {
        self.view.is_loading()
    }

    /// The submit control is disabled while a lookup is in flight
    pub fn submit_enabled(&self) -> bool {
        !self.is_loading()
    }

    /// Start an attempt.
    ///
    /// A blank input moves straight to `Error(EmptyInput)` and returns `None`.
    /// Otherwise the view becomes `Loading`, dropping any previous result or
    /// error, and the request to send is returned.
    pub fn begin_attempt(&mut self) -> Option<ValidationRequest> {
        let request = ValidationRequest::new(self.phone_input.clone());
        if request.is_blank() {
            tracing::debug!("Validation submitted without a phone number");
            self.view = ViewState::Error(ValidationError::EmptyInput);
            return None;
        }

        self.view = ViewState::Loading;
        Some(request)
    }

    /// Finish the in-flight attempt with the lookup outcome.
    ///
    /// Outcomes arriving when no attempt is in flight are not observed.
    pub fn complete_attempt(
        &mut self,
        outcome: Result<ValidationResult, LookupError>,
    ) -> &ViewState {
        if !self.is_loading() {
            tracing::warn!(
                state = self.view.name(),
                "Discarding lookup outcome with no attempt in flight"
            );
            return &self.view;
        }

        self.view = match outcome {
            Ok(result) => ViewState::Result(result),
            Err(error) => ViewState::Error(error.into()),
        };
        &self.view
    }

    /// Run one validation attempt against `lookup`.
    ///
    /// Issues no call for blank input and exactly one call otherwise.
    pub async fn submit_validation<L>(&mut self, lookup: &L) -> &ViewState
    where
        L: PhoneLookupTrait + ?Sized,
    {
        let Some(request) = self.begin_attempt() else {
            return &self.view;
        };

        let masked = mask_phone_number(request.phone());
        tracing::info!(
            phone = %masked,
            provider = lookup.provider_name(),
            "Validating phone number"
        );

        let outcome = lookup.lookup(&request).await;
        match &outcome {
            Ok(result) => tracing::info!(phone = %masked, valid = result.valid, "Phone lookup succeeded"),
            Err(LookupError::Status { status }) => {
                tracing::warn!(phone = %masked, status, "Phone lookup rejected")
            }
            Err(error) => tracing::error!(phone = %masked, error = %error, "Phone lookup failed"),
        }

        self.complete_attempt(outcome)
    }
}
