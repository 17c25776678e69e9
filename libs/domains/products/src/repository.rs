use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::{ProductError, ProductResult};
use crate::models::Product;

/// Persistence port for products.
///
/// Stock changes are conditional single-step operations so concurrent sales
/// cannot oversell: the backend checks and applies the change atomically.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Persist a new product
    async fn insert(&self, product: &Product) -> ProductResult<()>;

    async fn find_by_id(&self, id: &str) -> ProductResult<Option<Product>>;

    /// All products in insertion order
    async fn list(&self) -> ProductResult<Vec<Product>>;

    /// Set the price. `None` when no product has this id.
    async fn update_price(&self, id: &str, price: f64) -> ProductResult<Option<Product>>;

    /// Decrement stock only if at least `quantity` units are available.
    ///
    /// Returns the updated product, or `None` when the product is missing or
    /// its stock is too low.
    async fn withdraw_stock(&self, id: &str, quantity: i64) -> ProductResult<Option<Product>>;

    /// Increment stock. `None` when no product has this id.
    async fn add_stock(&self, id: &str, quantity: i64) -> ProductResult<Option<Product>>;

    /// `true` if a product was removed
    async fn delete(&self, id: &str) -> ProductResult<bool>;
}

/// In-memory implementation of ProductRepository (for development/testing)
#[derive(Clone, Default)]
pub struct InMemoryProductRepository {
    products: Arc<RwLock<Vec<Product>>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn insert(&self, product: &Product) -> ProductResult<()> {
        let mut products = self.products.write().await;
        products.push(product.clone());

        tracing::debug!(product_id = %product.id, "Inserted product");
        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> ProductResult<Option<Product>> {
        let products = self.products.read().await;
        Ok(products.iter().find(|p| p.id == id).cloned())
    }

    async fn list(&self) -> ProductResult<Vec<Product>> {
        Ok(self.products.read().await.clone())
    }

    async fn update_price(&self, id: &str, price: f64) -> ProductResult<Option<Product>> {
        let mut products = self.products.write().await;
        Ok(products.iter_mut().find(|p| p.id == id).map(|p| {
            p.price = price;
            p.clone()
        }))
    }

    async fn withdraw_stock(&self, id: &str, quantity: i64) -> ProductResult<Option<Product>> {
        let mut products = self.products.write().await;
        Ok(products
            .iter_mut()
            .find(|p| p.id == id && p.quantity >= quantity)
            .map(|p| {
                p.quantity -= quantity;
                p.clone()
            }))
    }

    async fn add_stock(&self, id: &str, quantity: i64) -> ProductResult<Option<Product>> {
        let mut products = self.products.write().await;
        let Some(product) = products.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };
        product.quantity = product.quantity.checked_add(quantity).ok_or_else(|| {
            ProductError::InvalidQuantity("restock amount is too large".to_string())
        })?;
        Ok(Some(product.clone()))
    }

    async fn delete(&self, id: &str) -> ProductResult<bool> {
        let mut products = self.products.write().await;
        let before = products.len();
        products.retain(|p| p.id != id);

        let removed = products.len() != before;
        if removed {
            tracing::debug!(product_id = %id, "Deleted product");
        }
        Ok(removed)
    }
}
