use axum::response::{IntoResponse, Response};
use axum_helpers::{AppError, errors::messages};
use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    /// Unknown email or wrong password. The two cases are indistinguishable.
    #[error("invalid email or password")]
    InvalidCredentials,

    /// A candidate password did not verify against the stored hash
    #[error("authentication failed")]
    AuthenticationFailed,

    #[error("unauthorized")]
    Unauthorized,

    #[error("something went wrong while hashing password: {0}")]
    Hashing(String),

    #[error("something went wrong while generating token: {0}")]
    TokenGeneration(String),

    #[error("repository error: {0}")]
    Repository(String),
}

pub type AuthResult<T> = Result<T, AuthError>;

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidCredentials | AuthError::AuthenticationFailed => {
                AppError::Unauthorized(AuthError::InvalidCredentials.to_string())
            }
            AuthError::Unauthorized => AppError::Unauthorized(messages::UNAUTHORIZED.to_string()),
            AuthError::Hashing(_) | AuthError::TokenGeneration(_) | AuthError::Repository(_) => {
                AppError::InternalServerError(err.to_string())
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<DbErr> for AuthError {
    fn from(err: DbErr) -> Self {
        AuthError::Repository(err.to_string())
    }
}
