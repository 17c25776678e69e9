//! Managers Domain
//!
//! Manager accounts and login:
//! - Password hashing with Argon2id (tunable cost)
//! - Login exchanging credentials for an HS256 JWT
//! - Seeding a default manager on first start
//!
//! Token issuance sits behind [`TokenGenerator`], implemented for
//! [`axum_helpers::JwtAuth`].

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod service;
pub mod sqlite;
pub mod token;

pub use config::{HashingConfig, SeedConfig};
pub use error::{AuthError, AuthResult};
pub use handlers::ApiDoc;
pub use models::{LoginRequest, Manager, MessageResponse, TokenResponse};
pub use repository::{InMemoryManagerRepository, ManagerRepository};
pub use service::AuthService;
pub use sqlite::SqliteManagerRepository;
pub use token::TokenGenerator;
