//! Database connectors for the inventory services.
//!
//! # Features
//!
//! - `sqlite` (default) - SQLite support through SeaORM's sqlx driver
//! - `config` - `core_config::FromEnv` support for [`sqlite::SqliteConfig`]
//!
//! # Example
//!
//! ```ignore
//! use database::sqlite;
//! use migration::Migrator;
//!
//! let db = sqlite::connect("sqlite://inventory.db?mode=rwc").await?;
//! sqlite::run_migrations::<Migrator>(&db, "inventory_api").await?;
//! ```

pub mod common;

#[cfg(feature = "sqlite")]
pub mod sqlite;

pub use common::{DatabaseError, DatabaseResult};
