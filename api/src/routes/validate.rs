//! JSON validation endpoint

use actix_web::{http::StatusCode, web, HttpRequest, HttpResponse};
use uuid::Uuid;

use pv_core::{ValidationError, ViewState};
use pv_shared::ApiResponse;

use crate::app::AppState;
use crate::dto::{PhoneQuery, ValidationData};
use crate::handlers::internal_error;
use crate::middleware::RequestContextExt;
use crate::views::error_message;

use super::run_attempt;

/// Handler for GET /api/v1/validate?phone=
///
/// A missing `phone` is treated as empty input.
///
/// # Responses
///
/// - 200 with `data.state = "result"`, the raw result and the display card
/// - 422 when the phone is empty or blank
/// - 502 when the lookup endpoint failed or could not be reached
pub async fn validate_phone(
    req: HttpRequest,
    state: web::Data<AppState>,
    query: web::Query<PhoneQuery>,
) -> HttpResponse {
    let request_id = req
        .get_request_id()
        .unwrap_or_else(|| Uuid::new_v4().to_string());
    let language = req.get_language();
    let messages = state.catalog.widget(language);

    let phone = query.into_inner().phone.unwrap_or_default();
    let widget = run_attempt(state.lookup.as_ref(), Some(phone)).await;

    match widget.view() {
        ViewState::Result(result) => HttpResponse::Ok().json(
            ApiResponse::success(ValidationData::result(result, messages))
                .with_request_id(request_id),
        ),
        ViewState::Error(error) => {
            tracing::info!(
                request_id = %request_id,
                kind = error.code(),
                "Validation attempt failed"
            );
            HttpResponse::build(status_for(error)).json(
                ApiResponse::error(error_message(error, messages))
                    .with_data(ValidationData::error(error))
                    .with_request_id(request_id),
            )
        }
        other => internal_error(
            &req,
            &state,
            &format!("validation attempt ended in {} state", other.name()),
        ),
    }
}

pub fn status_for(error: &ValidationError) -> StatusCode {
    match error {
        ValidationError::EmptyInput => StatusCode::UNPROCESSABLE_ENTITY,
        ValidationError::RequestFailed { .. } | ValidationError::Transport { .. } => {
            StatusCode::BAD_GATEWAY
        }
    }
}
