//! # Infrastructure Layer
//!
//! Concrete implementations of the phone lookup seam defined in `pv_core`.
//!
//! - **HTTP**: `HttpPhoneLookup` calls the remote lookup endpoint with reqwest
//! - **Mock**: `MockPhoneLookup` answers locally for development and demos

// Re-export core types for convenience
pub use pv_core::errors::*;

/// Phone lookup providers
pub mod lookup;

pub use lookup::{create_lookup_service, HttpPhoneLookup, MockPhoneLookup};

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// HTTP client construction error
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
