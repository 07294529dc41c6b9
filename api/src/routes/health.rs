use actix_web::{web, HttpResponse};

use pv_shared::HealthResponse;

use crate::app::AppState;

pub const SERVICE_NAME: &str = "phone-validator";

/// GET /health
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse::healthy(
        SERVICE_NAME,
        env!("CARGO_PKG_VERSION"),
        state.lookup.provider_name(),
    ))
}

/// GET /api/v1 - endpoint listing
pub async fn api_documentation() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "PhoneValidator API v1",
        "endpoints": {
            "health": "/health",
            "validate": {
                "path": "/api/v1/validate",
                "method": "GET",
                "description": "Validate one phone number",
                "query": {
                    "phone": "string, raw phone number",
                    "lang": "optional, 'es' or 'en'"
                },
                "responses": {
                    "200": "Validation result",
                    "422": "Empty phone number",
                    "502": "Lookup endpoint failed or unreachable"
                }
            }
        }
    }))
}
