use argon2::Params;
use std::sync::Arc;
use tracing::instrument;

use crate::error::{AuthError, AuthResult};
use crate::models::Manager;
use crate::repository::ManagerRepository;
use crate::token::TokenGenerator;

/// Service layer for manager authentication
pub struct AuthService<R: ManagerRepository, T: TokenGenerator> {
    repository: Arc<R>,
    tokens: Arc<T>,
    hash_params: Params,
}

impl<R: ManagerRepository, T: TokenGenerator> AuthService<R, T> {
    pub fn new(repository: R, tokens: T) -> Self {
        Self {
            repository: Arc::new(repository),
            tokens: Arc::new(tokens),
            hash_params: Params::default(),
        }
    }

    /// Argon2 cost used when hashing new passwords
    pub fn with_hash_params(mut self, params: Params) -> Self {
        self.hash_params = params;
        self
    }

    /// Exchange credentials for an access token.
    ///
    /// An unknown email and a wrong password both yield `InvalidCredentials`.
    #[instrument(skip(self, password))]
    pub async fn login(&self, email: &str, password: &str) -> AuthResult<String> {
        let manager = self
            .repository
            .find_by_email(email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        manager.check_password(password).map_err(|_| {
            tracing::info!(manager_id = %manager.id, "Password check failed");
            AuthError::InvalidCredentials
        })?;

        let token = self.tokens.generate_token(&manager.id)?;

        tracing::info!(manager_id = %manager.id, "Manager logged in");
        Ok(token)
    }

    /// Create the first manager if none exist. Returns `true` when one was created.
    #[instrument(skip(self, password))]
    pub async fn ensure_default_manager(&self, email: &str, password: &str) -> AuthResult<bool> {
        if self.repository.count().await? > 0 {
            tracing::debug!("Managers already present, skipping seed");
            return Ok(false);
        }

        let mut manager = Manager::new(email, password);
        manager.hash_password_with(self.hash_params.clone())?;
        self.repository.insert(&manager).await?;

        tracing::info!(manager_id = %manager.id, "Seeded default manager");
        Ok(true)
    }
}

impl<R: ManagerRepository, T: TokenGenerator> Clone for AuthService<R, T> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            tokens: Arc::clone(&self.tokens),
            hash_params: self.hash_params.clone(),
        }
    }
}
