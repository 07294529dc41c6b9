//! Unit tests for the validation widget

use std::sync::Arc;
use std::time::Duration;

use crate::domain::ValidationResult;
use crate::errors::{LookupError, ValidationError};
use crate::services::validation::{PhoneLookupTrait, ValidationWidget, ViewState};

use super::mocks::{verizon_mobile, MockLookup, PendingLookup};

#[test]
fn test_new_widget_is_idle() {
    let widget = ValidationWidget::new();
    assert!(widget.view().is_idle());
    assert!(widget.submit_enabled());
    assert_eq!(widget.phone_input(), "");
}

#[tokio::test]
async fn test_blank_inputs_never_reach_the_lookup() {
    let lookup = MockLookup::ok(verizon_mobile());

    for input in ["", " ", "\t", "\n  \r\n"] {
        let mut widget = ValidationWidget::with_input(input);
        let view = widget.submit_validation(&lookup).await;
        assert_eq!(view, &ViewState::Error(ValidationError::EmptyInput));
        assert!(!widget.is_loading());
    }

    assert_eq!(lookup.call_count(), 0);
}

#[tokio::test]
async fn test_success_stores_result() {
    let lookup = MockLookup::ok(verizon_mobile());
    let mut widget = ValidationWidget::with_input("+18095551234");

    let view = widget.submit_validation(&lookup).await.clone();

    assert_eq!(view, ViewState::Result(verizon_mobile()));
    assert_eq!(lookup.call_count(), 1);
    assert!(widget.view().error().is_none());
    assert!(widget.submit_enabled());
}

#[tokio::test]
async fn test_raw_input_is_sent_untrimmed() {
    let lookup = MockLookup::ok(verizon_mobile());
    let mut widget = ValidationWidget::with_input(" +1 809 555 1234 ");

    widget.submit_validation(&lookup).await;

    assert_eq!(lookup.requested_phones(), vec![" +1 809 555 1234 ".to_string()]);
}

#[tokio::test]
async fn test_each_submit_issues_exactly_one_call() {
    let lookup = MockLookup::ok(verizon_mobile());
    let mut widget = ValidationWidget::with_input("+18095551234");

    widget.submit_validation(&lookup).await;
    widget.submit_validation(&lookup).await;
    widget.set_input("+442071838750");
    widget.submit_validation(&lookup).await;

    assert_eq!(lookup.call_count(), 3);
    assert_eq!(
        lookup.requested_phones(),
        vec!["+18095551234", "+18095551234", "+442071838750"]
    );
}

#[tokio::test]
async fn test_non_success_status_becomes_request_failed() {
    let lookup = MockLookup::failing(LookupError::Status { status: 500 });
    let mut widget = ValidationWidget::with_input("+18095551234");

    let view = widget.submit_validation(&lookup).await;

    assert_eq!(
        view,
        &ViewState::Error(ValidationError::RequestFailed { status: 500 })
    );
    assert!(!widget.is_loading());
}

#[tokio::test]
async fn test_transport_failure_keeps_description() {
    let lookup = MockLookup::failing(LookupError::Transport("error sending request".into()));
    let mut widget = ValidationWidget::with_input("+18095551234");

    widget.submit_validation(&lookup).await;

    let error = widget.view().error().expect("error state");
    assert_eq!(error.to_string(), "error sending request");
    assert!(widget.view().result().is_none());
}

#[tokio::test]
async fn test_new_attempt_replaces_previous_outcome() {
    let mut widget = ValidationWidget::with_input("+18095551234");

    widget
        .submit_validation(&MockLookup::ok(verizon_mobile()))
        .await;
    assert!(widget.view().result().is_some());

    widget
        .submit_validation(&MockLookup::failing(LookupError::Decode("bad json".into())))
        .await;
    assert!(widget.view().result().is_none());
    assert_eq!(widget.view().error().map(|e| e.to_string()), Some("bad json".to_string()));

    let invalid = ValidationResult {
        valid: false,
        ..Default::default()
    };
    widget.submit_validation(&MockLookup::ok(invalid.clone())).await;
    assert_eq!(widget.view(), &ViewState::Result(invalid));
}

#[tokio::test]
async fn test_editing_input_keeps_previous_view() {
    let lookup = MockLookup::ok(verizon_mobile());
    let mut widget = ValidationWidget::with_input("+18095551234");
    widget.submit_validation(&lookup).await;

    widget.set_input("");

    assert_eq!(widget.view(), &ViewState::Result(verizon_mobile()));
    assert_eq!(widget.phone_input(), "");
}

#[test]
fn test_begin_attempt_enters_loading_and_disables_submit() {
    let mut widget = ValidationWidget::with_input("+18095551234");

    let request = widget.begin_attempt().expect("request for non-blank input");

    assert_eq!(request.phone(), "+18095551234");
    assert!(widget.is_loading());
    assert!(!widget.submit_enabled());

    widget.complete_attempt(Ok(verizon_mobile()));
    assert!(!widget.is_loading());
    assert!(widget.submit_enabled());
}

#[test]
fn test_begin_attempt_clears_previous_error() {
    let mut widget = ValidationWidget::new();
    assert!(widget.begin_attempt().is_none());
    assert!(widget.view().error().is_some());

    widget.set_input("+18095551234");
    widget.begin_attempt();

    assert_eq!(widget.view(), &ViewState::Loading);
}

#[test]
fn test_outcome_without_attempt_is_ignored() {
    let mut widget = ValidationWidget::with_input("+18095551234");

    let view = widget.complete_attempt(Ok(verizon_mobile()));

    assert!(view.is_idle());
}

#[tokio::test]
async fn test_works_through_trait_object() {
    let lookup: Arc<dyn PhoneLookupTrait> = Arc::new(MockLookup::ok(verizon_mobile()));
    let mut widget = ValidationWidget::with_input("+18095551234");

    widget.submit_validation(lookup.as_ref()).await;

    assert_eq!(widget.into_view(), ViewState::Result(verizon_mobile()));
}

#[tokio::test(start_paused = true)]
async fn test_abandoned_attempt_is_not_observed() {
    let mut widget = ValidationWidget::with_input("+18095551234");

    let abandoned =
        tokio::time::timeout(Duration::from_secs(30), widget.submit_validation(&PendingLookup)).await;

    assert!(abandoned.is_err());
    assert!(widget.is_loading());
    assert!(!widget.submit_enabled());
}
