use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProductError {
    /// Carries the id that was looked up; the message never includes it.
    #[error("product not found")]
    NotFound(String),

    #[error("{0}")]
    InvalidProduct(String),

    #[error("{0}")]
    InvalidQuantity(String),

    #[error("{0}")]
    InvalidPrice(String),

    #[error("insufficient stock")]
    InsufficientStock { available: i64, requested: i64 },

    #[error("repository error")]
    Repository(String),
}

pub type ProductResult<T> = Result<T, ProductError>;

impl From<ProductError> for AppError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::NotFound(_) => AppError::NotFound(err.to_string()),
            ProductError::InvalidProduct(msg)
            | ProductError::InvalidQuantity(msg)
            | ProductError::InvalidPrice(msg) => AppError::BadRequest(msg),
            ProductError::InsufficientStock { .. } => AppError::BadRequest(err.to_string()),
            ProductError::Repository(detail) => AppError::InternalServerError(detail),
        }
    }
}

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<DbErr> for ProductError {
    fn from(err: DbErr) -> Self {
        ProductError::Repository(err.to_string())
    }
}
