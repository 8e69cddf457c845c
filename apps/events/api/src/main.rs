use axum_helpers::server::{create_production_app, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use std::time::Duration;
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

/// How long in-flight requests may drain after a shutdown signal
const SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(30);

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output (before any fallible operations)
    install_color_eyre();

    let config = Config::from_env()?;

    init_tracing(&config.environment, &config.log_level);

    info!(address = %config.server.address(), "Starting events API");

    let db = database::postgres::connect_from_config_with_retry(config.database.clone(), None)
        .await
        .map_err(|e| eyre::eyre!("PostgreSQL connection failed: {}", e))?;

    let state = AppState::new(config, db);

    let api_routes = api::routes(&state);

    // create_router adds the OpenAPI document and shared middleware
    let router = axum_helpers::create_router::<openapi::ApiDoc>(api_routes)?;

    // - /health: liveness, no dependencies touched
    // - /ready: pings the database
    let app = router
        .merge(health_router())
        .merge(api::ready_router(state.clone()));

    create_production_app(app, &state.config.server, SHUTDOWN_TIMEOUT, async move {
        info!("Shutting down: closing database connections");

        match state.events.close().await {
            Ok(()) => info!("PostgreSQL connection closed successfully"),
            Err(e) => tracing::error!("Error closing PostgreSQL: {}", e),
        }
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Events API shutdown complete");
    Ok(())
}
