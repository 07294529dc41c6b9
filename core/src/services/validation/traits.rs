//! Trait for phone lookup providers

use async_trait::async_trait;

use crate::domain::{ValidationRequest, ValidationResult};
use crate::errors::LookupError;

/// A provider that validates one phone number per call
#[async_trait]
pub trait PhoneLookupTrait: Send + Sync {
    /// Look up the raw phone value carried by `request`
    async fn lookup(&self, request: &ValidationRequest) -> Result<ValidationResult, LookupError>;

    /// Provider name for logs and health reporting
    fn provider_name(&self) -> &'static str;
}
