//! # PhoneValidator Core
//!
//! Domain layer for the PhoneValidator website. This crate contains the
//! validation request/result types, the error taxonomy, the lookup service
//! seam and the `ValidationWidget` state machine that drives the page.

pub mod domain;
pub mod errors;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use services::*;
