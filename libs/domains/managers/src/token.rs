use axum_helpers::JwtAuth;

use crate::error::{AuthError, AuthResult};

/// Issues access tokens for authenticated managers
#[cfg_attr(test, mockall::automock)]
pub trait TokenGenerator: Send + Sync {
    fn generate_token(&self, manager_id: &str) -> AuthResult<String>;
}

impl TokenGenerator for JwtAuth {
    fn generate_token(&self, manager_id: &str) -> AuthResult<String> {
        self.create_token(manager_id)
            .map_err(|e| AuthError::TokenGeneration(e.to_string()))
    }
}
