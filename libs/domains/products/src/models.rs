use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::{ProductError, ProductResult};

/// A stocked product.
///
/// Invariants: `name` is non-empty, `price` is finite and > 0, `quantity` >= 0.
/// Every mutation validates first and leaves the product untouched on error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    #[schema(example = "3f0c5f7e-4a5b-4c1e-9a63-2f1d3c0b9e11")]
    pub id: String,
    #[schema(example = "Widget")]
    pub name: String,
    #[schema(example = 9.99)]
    pub price: f64,
    #[schema(example = 20)]
    pub quantity: i64,
}

impl Product {
    /// Validate the inputs and build a product with a fresh identifier.
    pub fn create(name: impl Into<String>, price: f64, quantity: i64) -> ProductResult<Self> {
        let product = Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            price,
            quantity,
        };
        product.validate()?;
        Ok(product)
    }

    pub fn validate(&self) -> ProductResult<()> {
        if self.name.is_empty() {
            Err(ProductError::InvalidProduct(
                "product name cannot be empty".to_string(),
            ))
        } else if !is_positive(self.price) {
            Err(ProductError::InvalidProduct(
                "product price must be greater than zero".to_string(),
            ))
        } else if self.quantity < 0 {
            Err(ProductError::InvalidProduct(
                "product quantity cannot be negative".to_string(),
            ))
        } else {
            Ok(())
        }
    }

    pub fn sell_units(&mut self, quantity: i64) -> ProductResult<()> {
        if quantity <= 0 {
            return Err(ProductError::InvalidQuantity(
                "the quantity to be sold must be greater than zero".to_string(),
            ));
        }
        if quantity > self.quantity {
            return Err(ProductError::InsufficientStock {
                available: self.quantity,
                requested: quantity,
            });
        }

        self.quantity -= quantity;
        Ok(())
    }

    pub fn restock(&mut self, quantity: i64) -> ProductResult<()> {
        if quantity <= 0 {
            return Err(ProductError::InvalidQuantity(
                "restock amount must be positive".to_string(),
            ));
        }

        self.quantity = self.quantity.checked_add(quantity).ok_or_else(|| {
            ProductError::InvalidQuantity("restock amount is too large".to_string())
        })?;
        Ok(())
    }

    pub fn update_price(&mut self, price: f64) -> ProductResult<()> {
        if !is_positive(price) {
            return Err(ProductError::InvalidPrice(
                "price must be greater than zero".to_string(),
            ));
        }

        self.price = price;
        Ok(())
    }

    /// `true` when quantity is strictly below `threshold`.
    pub fn is_low_stock(&self, threshold: i64) -> bool {
        self.quantity < threshold
    }

    pub fn stock_value(&self) -> f64 {
        self.price * self.quantity as f64
    }
}

// NaN and infinities are rejected along with zero and negatives
fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Body of `POST /api/products`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateProduct {
    #[schema(example = "Widget")]
    pub name: String,
    #[schema(example = 9.99)]
    pub price: f64,
    #[schema(example = 20)]
    pub quantity: i64,
}

/// Body of the sell and restock endpoints
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
pub struct QuantityRequest {
    #[schema(example = 5)]
    pub quantity: i64,
}

/// Body of `PUT /api/products/{id}/price`
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
pub struct PriceRequest {
    #[schema(example = 12.5)]
    pub price: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
pub struct InventoryValueResponse {
    #[schema(example = 199.8)]
    pub inventory_value: f64,
}
