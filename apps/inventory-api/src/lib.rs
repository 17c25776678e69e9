//! Inventory API
//!
//! Composition root for the inventory service.
//!
//! ```text
//! Client
//!   ↓ (HTTP/JSON, bearer JWT on /api)
//! axum router (api/)
//!   ↓
//! AuthService / InventoryService (domain crates)
//!   ↓
//! SqliteManagerRepository / SqliteProductRepository
//!   ↓
//! SQLite
//! ```

pub mod api;
pub mod config;
pub mod openapi;
pub mod state;

use axum::Router;
use axum_helpers::{create_router, health_router};

pub use config::Config;
pub use state::AppState;

/// Full HTTP application: API routes, docs, 404 fallback, tracing and `/health`.
pub fn app(state: &AppState) -> eyre::Result<Router> {
    let router = create_router::<openapi::ApiDoc>(api::routes(state)?);
    Ok(router.merge(health_router(state.config.app)))
}
