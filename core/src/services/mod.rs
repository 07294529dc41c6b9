//! Business services

pub mod validation;

pub use validation::{PhoneLookupTrait, ValidationWidget, ViewState};
