//! Mock Phone Lookup Implementation
//!
//! Answers locally so the site can be run without a lookup backend.
//! Numbers in international format (`+` and 7-15 digits) are reported valid
//! with a country guessed from the calling code; anything else is invalid.

use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use pv_core::{LookupError, PhoneLookupTrait, ValidationRequest, ValidationResult};
use pv_shared::phone::{is_international_format, mask_phone_number, normalize_phone_number};

// Longest prefix first
const CALLING_CODES: &[(&str, &str)] = &[
    ("+1809", "DO"),
    ("+1829", "DO"),
    ("+1849", "DO"),
    ("+52", "MX"),
    ("+44", "GB"),
    ("+34", "ES"),
    ("+57", "CO"),
    ("+1", "US"),
];

/// Mock lookup service for development and testing
#[derive(Clone, Default)]
pub struct MockPhoneLookup {
    /// Number of lookups answered
    lookup_count: Arc<AtomicU64>,
    /// Whether to simulate transport failures
    simulate_failure: bool,
}

impl MockPhoneLookup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock that fails every lookup at the transport level
    #[cfg(test)]
    pub fn failing() -> Self {
        Self {
            simulate_failure: true,
            ..Self::default()
        }
    }

    pub fn get_lookup_count(&self) -> u64 {
        self.lookup_count.load(Ordering::SeqCst)
    }

    fn answer(phone: &str) -> ValidationResult {
        if !is_international_format(phone) {
            return ValidationResult {
                valid: false,
                ..Default::default()
            };
        }

        let normalized = normalize_phone_number(phone);
        let country = CALLING_CODES
            .iter()
            .find(|(prefix, _)| normalized.starts_with(prefix))
            .map(|(_, country)| country.to_string());

        ValidationResult {
            valid: true,
            country,
            carrier: Some("Mock Carrier".to_string()),
            line_type: Some("mobile".to_string()),
        }
    }
}

#[async_trait]
impl PhoneLookupTrait for MockPhoneLookup {
    async fn lookup(&self, request: &ValidationRequest) -> Result<ValidationResult, LookupError> {
        let count = self.lookup_count.fetch_add(1, Ordering::SeqCst) + 1;

        if self.simulate_failure {
            tracing::warn!(
                phone = %mask_phone_number(request.phone()),
                "Mock phone lookup simulating failure"
            );
            return Err(LookupError::Transport(
                "Simulated phone lookup failure".to_string(),
            ));
        }

        let result = Self::answer(request.phone());
        tracing::info!(
            target: "phone_lookup",
            provider = "mock",
            phone = %mask_phone_number(request.phone()),
            valid = result.valid,
            count,
            "Mock phone lookup answered"
        );
        Ok(result)
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }
}
