//! Inventory Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;

use crate::config::InventoryConfig;
use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, Product};
use crate::notifier::Notifier;
use crate::repository::ProductRepository;

/// Inventory service providing business logic operations
///
/// Validation runs against a copy of the stored product; persistence then goes
/// through the repository's single-step operations so a rejected request never
/// writes anything.
pub struct InventoryService<R: ProductRepository, N: Notifier> {
    repository: Arc<R>,
    notifier: Arc<N>,
    config: InventoryConfig,
}

impl<R: ProductRepository, N: Notifier> InventoryService<R, N> {
    pub fn new(repository: R, notifier: N, config: InventoryConfig) -> Self {
        Self {
            repository: Arc::new(repository),
            notifier: Arc::new(notifier),
            config,
        }
    }

    pub fn config(&self) -> &InventoryConfig {
        &self.config
    }

    #[instrument(skip(self, input), fields(product_name = %input.name))]
    pub async fn add_product(&self, input: CreateProduct) -> ProductResult<Product> {
        let product = Product::create(input.name, input.price, input.quantity)?;
        self.repository.insert(&product).await?;

        tracing::info!(product_id = %product.id, "Product added");
        Ok(product)
    }

    #[instrument(skip(self))]
    pub async fn get_product(&self, id: &str) -> ProductResult<Product> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| ProductError::NotFound(id.to_string()))
    }

    #[instrument(skip(self))]
    pub async fn get_all_products(&self) -> ProductResult<Vec<Product>> {
        self.repository.list().await
    }

    /// Sell `quantity` units and alert once if the remaining stock is low.
    #[instrument(skip(self))]
    pub async fn sell_product_units(&self, id: &str, quantity: i64) -> ProductResult<Product> {
        let mut candidate = self.get_product(id).await?;
        candidate.sell_units(quantity)?;

        let product = match self.repository.withdraw_stock(id, quantity).await? {
            Some(product) => product,
            // Another sale won the race; report the state we lost to
            None => {
                let current = self.get_product(id).await?;
                return Err(ProductError::InsufficientStock {
                    available: current.quantity,
                    requested: quantity,
                });
            }
        };

        tracing::info!(product_id = %id, sold = quantity, remaining = product.quantity, "Units sold");

        if product.is_low_stock(self.config.low_stock_threshold) {
            self.notifier.notify_low_stock(&product);
        }

        Ok(product)
    }

    /// Restocking never triggers a low-stock alert, even if stock stays low.
    #[instrument(skip(self))]
    pub async fn restock_product(&self, id: &str, quantity: i64) -> ProductResult<Product> {
        let mut candidate = self.get_product(id).await?;
        candidate.restock(quantity)?;

        let product = self
            .repository
            .add_stock(id, quantity)
            .await?
            .ok_or_else(|| ProductError::NotFound(id.to_string()))?;

        tracing::info!(product_id = %id, added = quantity, total = product.quantity, "Product restocked");
        Ok(product)
    }

    #[instrument(skip(self))]
    pub async fn update_product_price(&self, id: &str, price: f64) -> ProductResult<Product> {
        let mut candidate = self.get_product(id).await?;
        candidate.update_price(price)?;

        self.repository
            .update_price(id, price)
            .await?
            .ok_or_else(|| ProductError::NotFound(id.to_string()))
    }

    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: &str) -> ProductResult<()> {
        if !self.repository.delete(id).await? {
            return Err(ProductError::NotFound(id.to_string()));
        }

        tracing::info!(product_id = %id, "Product deleted");
        Ok(())
    }

    /// Sum of `price * quantity` over all products; 0 when empty.
    #[instrument(skip(self))]
    pub async fn get_inventory_value(&self) -> ProductResult<f64> {
        let products = self.repository.list().await?;
        Ok(products.iter().map(Product::stock_value).sum())
    }
}

impl<R: ProductRepository, N: Notifier> Clone for InventoryService<R, N> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            notifier: Arc::clone(&self.notifier),
            config: self.config,
        }
    }
}
