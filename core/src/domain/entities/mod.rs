//! Domain entities

pub mod validation;
