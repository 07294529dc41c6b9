//! Domain layer for phone validation

pub mod entities;

pub use entities::validation::{ValidationRequest, ValidationResult};
