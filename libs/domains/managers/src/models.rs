use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::{AuthError, AuthResult};

/// A manager allowed to operate the inventory.
///
/// `password` holds an Argon2id PHC string once [`Manager::hash_password`] has
/// run, and is never serialized.
#[derive(Clone, Serialize, Deserialize)]
pub struct Manager {
    pub id: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
}

impl std::fmt::Debug for Manager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Manager")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl Manager {
    /// Unsaved manager holding the plaintext password
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            email: email.into(),
            password: password.into(),
        }
    }

    /// Replace the plaintext password with an Argon2id hash using default cost
    pub fn hash_password(&mut self) -> AuthResult<()> {
        self.hash_password_with(Params::default())
    }

    pub fn hash_password_with(&mut self, params: Params) -> AuthResult<()> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);

        let hash = argon2
            .hash_password(self.password.as_bytes(), &salt)
            .map_err(|e| AuthError::Hashing(e.to_string()))?;

        self.password = hash.to_string();
        Ok(())
    }

    /// Verify a candidate password against the stored hash.
    ///
    /// The cost parameters are read from the stored hash, so hashes made with
    /// any setting keep verifying.
    pub fn check_password(&self, candidate: &str) -> AuthResult<()> {
        let parsed = PasswordHash::new(&self.password).map_err(|e| {
            tracing::warn!(manager_id = %self.id, "Stored password hash is unreadable: {}", e);
            AuthError::AuthenticationFailed
        })?;

        Argon2::default()
            .verify_password(candidate.as_bytes(), &parsed)
            .map_err(|_| AuthError::AuthenticationFailed)
    }
}

/// Body of `POST /login`
#[derive(Clone, Deserialize, ToSchema)]
pub struct LoginRequest {
    #[schema(example = "manager@inventory.local")]
    pub email: String,
    #[schema(example = "change-me-please")]
    pub password: String,
}

impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TokenResponse {
    /// HS256 JWT, valid for 24 hours
    pub token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}
