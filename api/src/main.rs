use std::path::Path;

use actix_web::{web, HttpServer};
use anyhow::Context;
use tracing::info;

use pv_api::{create_app, i18n::CATALOG_OVERRIDE_PATH, telemetry, AppState};
use pv_infra::create_lookup_service;
use pv_shared::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("failed to load configuration")?;
    telemetry::init_tracing(&config.logging)?;

    info!(
        environment = %config.environment,
        version = env!("CARGO_PKG_VERSION"),
        "Starting PhoneValidator server"
    );

    let lookup = create_lookup_service(&config.lookup)
        .context("failed to create phone lookup service")?;

    let bind_address = config.server.bind_address();
    let workers = config.server.worker_count();
    let keep_alive = config.server.keep_alive();

    let state = web::Data::new(AppState::build(
        config,
        lookup,
        Some(Path::new(CATALOG_OVERRIDE_PATH)),
    )?);

    let mut server = HttpServer::new(move || create_app(state.clone())).keep_alive(keep_alive);
    if let Some(workers) = workers {
        server = server.workers(workers);
    }

    info!(address = %bind_address, "Server listening");
    server
        .bind(&bind_address)
        .with_context(|| format!("failed to bind {}", bind_address))?
        .run()
        .await?;

    info!("Server stopped");
    Ok(())
}
