//! Type-safe error codes for API responses.
//!
//! Each code carries a string identifier for clients, an integer for logs and
//! monitoring, and a default message.
//!
//! ```rust
//! use axum_helpers::errors::ErrorCode;
//!
//! let code = ErrorCode::InvalidJson;
//! assert_eq!(code.as_str(), "INVALID_JSON");
//! assert_eq!(code.code(), 1001);
//! assert_eq!(code.default_message(), "Invalid request body");
//! ```

use super::messages;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Client errors (1000-1999)
    /// Request body is missing, malformed or has the wrong content type
    InvalidJson,

    /// Input was parsed but violates a business rule
    ValidationError,

    /// Requested resource was not found
    NotFound,

    /// Credentials or token are missing or invalid
    Unauthorized,

    // Server errors (5000-5999)
    /// Anything the client cannot act on
    InternalError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidJson => "INVALID_JSON",
            Self::ValidationError => "VALIDATION_ERROR",
            Self::NotFound => "NOT_FOUND",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::InternalError => "INTERNAL_ERROR",
        }
    }

    /// Integer code for structured logs
    pub fn code(&self) -> i32 {
        match self {
            Self::InvalidJson => 1001,
            Self::ValidationError => 1002,
            Self::NotFound => 1004,
            Self::Unauthorized => 1005,
            Self::InternalError => 5001,
        }
    }

    pub fn default_message(&self) -> &'static str {
        match self {
            Self::InvalidJson => messages::INVALID_BODY,
            Self::ValidationError => "Request validation failed",
            Self::NotFound => messages::NOT_FOUND_ROUTE,
            Self::Unauthorized => messages::UNAUTHORIZED,
            Self::InternalError => messages::INTERNAL_ERROR,
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
