//! Localized JSON error responses

use std::fmt::Display;

use actix_web::{web, HttpRequest, HttpResponse};

use pv_shared::{error_codes, ErrorResponse};

use crate::app::AppState;
use crate::middleware::RequestContextExt;

/// Default service: 404 with the requested path
pub async fn not_found(req: HttpRequest, state: web::Data<AppState>) -> HttpResponse {
    let language = req.get_language();

    HttpResponse::NotFound().json(
        ErrorResponse::new(
            error_codes::NOT_FOUND,
            state.catalog.errors(language).not_found.clone(),
        )
        .with_detail("path", req.path()),
    )
}

/// 500 response for failures that are not part of a validation attempt
pub fn internal_error(req: &HttpRequest, state: &AppState, error: &dyn Display) -> HttpResponse {
    let request_id = req.get_request_id().unwrap_or_default();
    tracing::error!(request_id = %request_id, error = %error, "Request failed");

    let mut response = ErrorResponse::new(
        error_codes::INTERNAL_ERROR,
        state.catalog.errors(req.get_language()).internal_error.clone(),
    );
    if !request_id.is_empty() {
        response = response.with_detail("request_id", request_id);
    }

    HttpResponse::InternalServerError().json(response)
}
