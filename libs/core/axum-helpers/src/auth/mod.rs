//! Stateless JWT authentication.
//!
//! - [`JwtConfig`]: signing secret loaded from the environment
//! - [`JwtAuth`]: HS256 token issue and verification
//! - [`jwt_auth_middleware`]: guards routes behind a `Bearer` token
//!
//! ```ignore
//! use axum_helpers::auth::{JwtAuth, JwtConfig, jwt_auth_middleware};
//! use core_config::FromEnv;
//!
//! let auth = JwtAuth::new(&JwtConfig::from_env()?);
//!
//! let protected = Router::new()
//!     .route("/api/products", get(handler))
//!     .layer(axum::middleware::from_fn_with_state(auth, jwt_auth_middleware));
//! ```

pub mod config;
pub mod jwt;
pub mod middleware;

pub use config::JwtConfig;
pub use jwt::{ACCESS_TOKEN_TTL, JWT_AUDIENCE, JWT_ISSUER, JwtAuth, JwtClaims};
pub use middleware::jwt_auth_middleware;
