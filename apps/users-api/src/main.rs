use axum_helpers::server::{create_app, create_router, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use database::sqlite::{close, ensure_schema};
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output (before any fallible operations)
    install_color_eyre();

    // Load configuration from environment variables
    let config = Config::from_env()?;

    // Initialize tracing with ErrorLayer for span trace capture
    init_tracing(&config.environment);

    let state = AppState::new(config);

    // Make sure the users table exists before serving
    info!("Preparing SQLite database at {}", state.connector.config().url());
    let db = state
        .connector
        .open()
        .await
        .map_err(|e| eyre::eyre!("Failed to open SQLite database: {}", e))?;
    let schema = ensure_schema(&db).await;
    close(db).await;
    schema.map_err(|e| eyre::eyre!("Failed to create users table: {}", e))?;

    // Build router with API routes (pass reference, not ownership!)
    let api_routes = api::routes(&state);

    // create_router adds docs/middleware to our composed routes
    let router = create_router::<openapi::ApiDoc>(api_routes);

    // Merge health endpoints into the app
    // - /health: liveness check with app name/version
    // - /ready: readiness check against the database
    let app = router
        .merge(health_router(state.config.app))
        .merge(api::ready_router(state.clone()));

    info!("Starting {} v{}", state.config.app.name, state.config.app.version);

    create_app(app, &state.config.server)
        .await
        .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Users API shutdown complete");
    Ok(())
}
