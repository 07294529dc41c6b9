//! Shared utilities and common types for the PhoneValidator server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types and layered loading
//! - Error response structures
//! - Utility functions (phone masking for logs)
//! - Common type definitions (language, API responses)

pub mod config;
pub mod errors;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, ConfigError, CorsConfig, Environment, LogFormat, LoggingConfig, LookupConfig,
    LookupProvider, ServerConfig,
};
pub use errors::{error_codes, ErrorResponse};
pub use types::{ApiResponse, HealthResponse, Language};
pub use utils::phone;
