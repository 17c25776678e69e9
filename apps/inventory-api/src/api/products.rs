//! Product routes

use axum::Router;
use domain_products::{handlers, InventoryService, LogNotifier, SqliteProductRepository};

use crate::state::AppState;

/// Create products router
pub fn router(state: &AppState) -> Router {
    let repository = SqliteProductRepository::new(state.db.clone());
    let service = InventoryService::new(repository, LogNotifier, state.config.inventory);
    handlers::router(service)
}
