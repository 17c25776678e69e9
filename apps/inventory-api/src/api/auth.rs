//! Login routes and default-manager seeding

use axum::Router;
use axum_helpers::JwtAuth;
use domain_managers::{handlers, AuthService, SqliteManagerRepository};
use tracing::{info, warn};

use crate::state::AppState;

type SqliteAuthService = AuthService<SqliteManagerRepository, JwtAuth>;

fn service(state: &AppState) -> eyre::Result<SqliteAuthService> {
    let repository = SqliteManagerRepository::new(state.db.clone());
    let params = state.config.hashing.params()?;
    Ok(AuthService::new(repository, state.jwt.clone()).with_hash_params(params))
}

/// Create auth router
pub fn router(state: &AppState) -> eyre::Result<Router> {
    Ok(handlers::router(service(state)?))
}

/// Create the configured default manager when the managers table is empty.
///
/// Skipped with a warning when no seed password is configured.
pub async fn seed_default_manager(state: &AppState) -> eyre::Result<()> {
    let seed = &state.config.seed;
    let Some(password) = seed.password.as_deref() else {
        warn!("SEED_MANAGER_PASSWORD is not set, skipping default manager seed");
        return Ok(());
    };

    if service(state)?
        .ensure_default_manager(&seed.email, password)
        .await?
    {
        info!(email = %seed.email, "Default manager created");
    }
    Ok(())
}
