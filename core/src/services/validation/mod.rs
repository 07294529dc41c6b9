//! Phone validation widget and lookup seam
//!
//! This module provides the single interactive feature of the site:
//! - The `PhoneLookupTrait` implemented by lookup providers
//! - The `ViewState` rendered by the page (Idle, Loading, Error, Result)
//! - The `ValidationWidget` that runs one validation attempt per submit

mod traits;
mod types;
mod widget;

#[cfg(test)]
mod tests;

pub use traits::PhoneLookupTrait;
pub use types::ViewState;
pub use widget::ValidationWidget;
