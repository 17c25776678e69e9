//! HTTP handlers for manager authentication

use axum::{Json, Router, extract::State, routing::post};
use axum_helpers::{
    JsonBody,
    errors::responses::{BadRequestResponse, InternalServerErrorResponse, UnauthorizedResponse},
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::AuthResult;
use crate::models::{LoginRequest, MessageResponse, TokenResponse};
use crate::repository::ManagerRepository;
use crate::service::AuthService;
use crate::token::TokenGenerator;

/// OpenAPI documentation for the authentication endpoints
#[derive(OpenApi)]
#[openapi(
    paths(login, logout),
    components(
        schemas(LoginRequest, TokenResponse, MessageResponse),
        responses(BadRequestResponse, UnauthorizedResponse, InternalServerErrorResponse)
    ),
    tags(
        (name = "Auth", description = "Manager login")
    )
)]
pub struct ApiDoc;

/// Public routes: `POST /login` and `POST /logout`
pub fn router<R, T>(service: AuthService<R, T>) -> Router
where
    R: ManagerRepository + 'static,
    T: TokenGenerator + 'static,
{
    Router::new()
        .route("/login", post(login))
        .route("/logout", post(logout))
        .with_state(Arc::new(service))
}

/// Log in with email and password
#[utoipa::path(
    post,
    path = "/login",
    tag = "Auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Access token issued", body = TokenResponse),
        (status = 400, response = BadRequestResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn login<R: ManagerRepository, T: TokenGenerator>(
    State(service): State<Arc<AuthService<R, T>>>,
    JsonBody(input): JsonBody<LoginRequest>,
) -> AuthResult<Json<TokenResponse>> {
    let token = service.login(&input.email, &input.password).await?;
    Ok(Json(TokenResponse { token }))
}

/// Log out. Tokens are stateless, so this only acknowledges the request.
#[utoipa::path(
    post,
    path = "/logout",
    tag = "Auth",
    responses(
        (status = 200, description = "Logged out", body = MessageResponse)
    )
)]
async fn logout() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "logout successful".to_string(),
    })
}
