//! PhoneValidator web server
//!
//! Serves the landing page with its validation widget, the JSON validation
//! endpoint and the health check.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod i18n;
pub mod middleware;
pub mod routes;
pub mod telemetry;
pub mod views;

pub use app::{create_app, AppState, SetupError};
