//! API routes module

pub mod auth;
pub mod health;
pub mod products;

use axum::{middleware, Router};
use axum_helpers::jwt_auth_middleware;

use crate::state::AppState;

/// Create all API routes
///
/// `/login` and `/logout` are public; everything under `/api` requires a bearer
/// token.
pub fn routes(state: &AppState) -> eyre::Result<Router> {
    let protected = products::router(state).route_layer(middleware::from_fn_with_state(
        state.jwt.clone(),
        jwt_auth_middleware,
    ));

    Ok(Router::new()
        .merge(auth::router(state)?)
        .merge(protected)
        .merge(health::router(state.clone())))
}
