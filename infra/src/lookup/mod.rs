//! Phone Lookup Module
//!
//! Providers answering validation requests for the widget:
//!
//! - **HTTP**: GET against the configured endpoint with the phone number as a
//!   single URL-encoded query parameter
//! - **Mock**: deterministic local answers, no network

use std::sync::Arc;

use pv_core::PhoneLookupTrait;
use pv_shared::{LookupConfig, LookupProvider};

use crate::InfrastructureError;

pub mod http_lookup;
pub mod mock_lookup;

pub use http_lookup::HttpPhoneLookup;
pub use mock_lookup::MockPhoneLookup;


/// Create the lookup provider selected by `config.provider`
pub fn create_lookup_service(
    config: &LookupConfig,
) -> Result<Arc<dyn PhoneLookupTrait>, InfrastructureError> {
    let service: Arc<dyn PhoneLookupTrait> = match config.provider {
        LookupProvider::Http => Arc::new(HttpPhoneLookup::new(config)?),
        LookupProvider::Mock => {
            tracing::warn!("Using mock phone lookup; results are not real");
            Arc::new(MockPhoneLookup::new())
        }
    };

    tracing::info!(provider = service.provider_name(), "Phone lookup service initialized");
    Ok(service)
}
