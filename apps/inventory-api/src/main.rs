//! Inventory API - REST server

use axum_helpers::server::create_production_app;
use core_config::tracing::{init_tracing, install_color_eyre};
use database::sqlite::{connect_from_config, run_migrations};
use inventory_api::{api, AppState, Config};
use migration::Migrator;
use std::time::Duration;
use tracing::info;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    info!("Connecting to SQLite at {}", config.database.url());
    let db = connect_from_config(config.database.clone()).await?;
    run_migrations::<Migrator>(&db, config.app.name).await?;

    let state = AppState::new(config, db);
    api::auth::seed_default_manager(&state).await?;

    let app = inventory_api::app(&state)?;

    info!("Starting Inventory API on port {}", state.config.server.port);

    let db = state.db.clone();
    create_production_app(
        app,
        &state.config.server,
        Duration::from_secs(30),
        async move {
            info!("Shutting down: closing SQLite connections");
            if let Err(e) = db.close().await {
                tracing::error!("Failed to close database pool: {}", e);
            }
        },
    )
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Inventory API shutdown complete");
    Ok(())
}
