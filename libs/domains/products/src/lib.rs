//! Products Domain
//!
//! Product catalogue, stock movements and inventory valuation backed by SQLite.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐     ┌──────────┐
//! │   Service   │ ──► │ Notifier │  ← Low-stock alerts
//! └──────┬──────┘     └──────────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + SQLite and in-memory implementations)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, DTOs
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_products::{
//!     handlers, InventoryConfig, InventoryService, LogNotifier, SqliteProductRepository,
//! };
//!
//! # async fn example(db: sea_orm::DatabaseConnection) {
//! let repository = SqliteProductRepository::new(db);
//! let service = InventoryService::new(repository, LogNotifier, InventoryConfig::default());
//!
//! let router = handlers::router(service);
//! # }
//! ```

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod notifier;
pub mod repository;
pub mod service;
pub mod sqlite;

// Re-export commonly used types
pub use config::InventoryConfig;
pub use error::{ProductError, ProductResult};
pub use handlers::ApiDoc;
pub use models::{
    CreateProduct, InventoryValueResponse, MessageResponse, PriceRequest, Product,
    QuantityRequest,
};
pub use notifier::{LogNotifier, Notifier};
pub use repository::{InMemoryProductRepository, ProductRepository};
pub use service::InventoryService;
pub use sqlite::SqliteProductRepository;
