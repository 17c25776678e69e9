//! SQLite connector and utilities
//!
//! Provides connection management, migration running and a health check.

mod config;
mod connector;
mod health;

pub use config::SqliteConfig;
pub use connector::{connect, connect_from_config, run_migrations};
pub use health::check_health;

// Re-export SeaORM types for convenience
pub use sea_orm::{ConnectOptions, DatabaseConnection, DbErr};
pub use sea_orm_migration::MigratorTrait;
