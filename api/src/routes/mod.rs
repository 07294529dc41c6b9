//! Route handlers
//!
//! - `landing`: the page, form submissions and the widget fragment
//! - `validate`: JSON validation endpoint
//! - `health`: health check and endpoint listing

pub mod health;
pub mod landing;
pub mod validate;

use pv_core::{PhoneLookupTrait, ValidationWidget};

/// Run one validation attempt for `phone`.
///
/// `None` means the request carried no phone value at all and the widget
/// stays idle. `Some` submits, even when the value is empty.
pub async fn run_attempt(lookup: &dyn PhoneLookupTrait, phone: Option<String>) -> ValidationWidget {
    match phone {
        None => ValidationWidget::new(),
        Some(phone) => {
            let mut widget = ValidationWidget::with_input(phone);
            widget.submit_validation(lookup).await;
            widget
        }
    }
}
