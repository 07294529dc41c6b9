//! Shared helpers for the HTTP integration tests

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use actix_web::web;
use async_trait::async_trait;

use pv_api::AppState;
use pv_core::{LookupError, PhoneLookupTrait, ValidationRequest, ValidationResult};
use pv_shared::AppConfig;

/// Lookup answering every request with the same outcome
pub struct StubLookup {
    outcome: Result<ValidationResult, LookupError>,
    phones: Mutex<Vec<String>>,
}

impl StubLookup {
    pub fn returning(outcome: Result<ValidationResult, LookupError>) -> Arc<Self> {
        Arc::new(Self {
            outcome,
            phones: Mutex::new(Vec::new()),
        })
    }

    pub fn ok(result: ValidationResult) -> Arc<Self> {
        Self::returning(Ok(result))
    }

    pub fn failing(error: LookupError) -> Arc<Self> {
        Self::returning(Err(error))
    }

    pub fn phones(&self) -> Vec<String> {
        self.phones.lock().unwrap().clone()
    }
}

#[async_trait]
impl PhoneLookupTrait for StubLookup {
    async fn lookup(&self, request: &ValidationRequest) -> Result<ValidationResult, LookupError> {
        self.phones.lock().unwrap().push(request.phone().to_string());
        self.outcome.clone()
    }

    fn provider_name(&self) -> &'static str {
        "stub"
    }
}

pub fn verizon_mobile() -> ValidationResult {
    ValidationResult {
        valid: true,
        country: Some("USA".to_string()),
        carrier: Some("Verizon".to_string()),
        line_type: Some("mobile".to_string()),
    }
}

pub fn state_with(lookup: Arc<dyn PhoneLookupTrait>) -> web::Data<AppState> {
    state_for(AppConfig::development(), lookup)
}

pub fn state_for(config: AppConfig, lookup: Arc<dyn PhoneLookupTrait>) -> web::Data<AppState> {
    web::Data::new(AppState::build(config, lookup, None).unwrap())
}
