//! Landing page handlers

use actix_web::{
    http::header::{self, ContentType},
    web, HttpRequest, HttpResponse,
};

use pv_core::ValidationWidget;

use crate::app::AppState;
use crate::dto::{PhoneForm, PhoneQuery};
use crate::handlers::internal_error;
use crate::middleware::RequestContextExt;
use crate::views::WidgetView;

use super::run_attempt;

const WIDGET_SCRIPT: &str = include_str!("../../static/widget.js");

/// GET / - the landing page, validating `phone` when present
pub async fn landing(
    req: HttpRequest,
    state: web::Data<AppState>,
    query: web::Query<PhoneQuery>,
) -> HttpResponse {
    let widget = run_attempt(state.lookup.as_ref(), query.into_inner().phone).await;
    render_page(&req, &state, &widget)
}

/// POST /validate - form submission without scripting
pub async fn submit_form(
    req: HttpRequest,
    state: web::Data<AppState>,
    form: web::Form<PhoneForm>,
) -> HttpResponse {
    let widget = run_attempt(state.lookup.as_ref(), Some(form.into_inner().phone)).await;
    render_page(&req, &state, &widget)
}

/// GET /widget - the results region only, swapped into the page by script
pub async fn widget_fragment(
    req: HttpRequest,
    state: web::Data<AppState>,
    query: web::Query<PhoneQuery>,
) -> HttpResponse {
    let widget = run_attempt(state.lookup.as_ref(), query.into_inner().phone).await;

    let language = req.get_language();
    let messages = state.catalog.widget(language);
    let view = WidgetView::from_widget(&widget, messages);

    match state.pages.render_widget_results(language, messages, &view) {
        Ok(html) => HttpResponse::Ok()
            .content_type(ContentType::html())
            .body(html),
        Err(e) => internal_error(&req, &state, &e),
    }
}

/// GET /static/widget.js
pub async fn widget_script() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("application/javascript; charset=utf-8")
        .insert_header((header::CACHE_CONTROL, "public, max-age=3600"))
        .body(WIDGET_SCRIPT)
}

fn render_page(req: &HttpRequest, state: &AppState, widget: &ValidationWidget) -> HttpResponse {
    let language = req.get_language();
    let messages = state.catalog.widget(language);
    let view = WidgetView::from_widget(widget, messages);

    tracing::debug!(
        request_id = ?req.get_request_id(),
        language = %language,
        state = view.state,
        "Rendering landing page"
    );

    match state
        .pages
        .render_landing(language, state.catalog.page(language), messages, &view)
    {
        Ok(html) => HttpResponse::Ok()
            .content_type(ContentType::html())
            .insert_header((header::CONTENT_LANGUAGE, language.code()))
            .body(html),
        Err(e) => internal_error(req, state, &e),
    }
}
