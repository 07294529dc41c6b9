//! Application state and factory
//!
//! Builds the shared state once at startup and creates the Actix-web
//! application around it.

use std::path::Path;
use std::sync::Arc;

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    web, App,
};
use thiserror::Error;
use tracing_actix_web::TracingLogger;

use pv_core::PhoneLookupTrait;
use pv_shared::AppConfig;

use crate::handlers::not_found;
use crate::i18n::{Catalog, CatalogError};
use crate::middleware::{create_cors, RequestContext, SecurityMiddleware};
use crate::routes::{
    health::{api_documentation, health_check},
    landing::{landing, submit_form, widget_fragment, widget_script},
    validate::validate_phone,
};
use crate::views::page::{PageRenderer, TemplateError};

#[derive(Error, Debug)]
pub enum SetupError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("failed to compile page templates: {0}")]
    Template(#[from] TemplateError),
}

/// Shared, read-only application state
pub struct AppState {
    pub config: AppConfig,
    pub lookup: Arc<dyn PhoneLookupTrait>,
    pub catalog: Catalog,
    pub pages: PageRenderer,
}

impl AppState {
    pub fn new(
        config: AppConfig,
        lookup: Arc<dyn PhoneLookupTrait>,
        catalog: Catalog,
        pages: PageRenderer,
    ) -> Self {
        Self {
            config,
            lookup,
            catalog,
            pages,
        }
    }

    /// Load the message catalog and compile the templates
    pub fn build(
        config: AppConfig,
        lookup: Arc<dyn PhoneLookupTrait>,
        catalog_override: Option<&Path>,
    ) -> Result<Self, SetupError> {
        let catalog = Catalog::load(catalog_override)?;
        let pages = PageRenderer::new()?;
        Ok(Self::new(config, lookup, catalog, pages))
    }
}

/// Create and configure the application with all dependencies
pub fn create_app(
    state: web::Data<AppState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let cors = create_cors(&state.config.cors);
    let security = SecurityMiddleware::from_config(&state.config);
    let form_config = web::FormConfig::default().limit(state.config.server.max_payload_size);

    App::new()
        .app_data(state)
        .app_data(form_config)
        // Last wrap runs first: tracing, security, CORS, then request context
        .wrap(RequestContext)
        .wrap(cors)
        .wrap(security)
        .wrap(TracingLogger::default())
        .route("/", web::get().to(landing))
        .route("/validate", web::post().to(submit_form))
        .route("/widget", web::get().to(widget_fragment))
        .route("/static/widget.js", web::get().to(widget_script))
        .route("/health", web::get().to(health_check))
        .service(
            web::scope("/api/v1")
                .route("", web::get().to(api_documentation))
                .route("/validate", web::get().to(validate_phone)),
        )
        .default_service(web::route().to(not_found))
}
