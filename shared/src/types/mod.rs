//! Type definitions module
//!
//! - `language` - Page language negotiation
//! - `response` - API response wrappers and health checks

pub mod language;
pub mod response;

pub use language::Language;
pub use response::{ApiResponse, HealthResponse};
