use crate::models::Product;

/// Receives low-stock alerts.
///
/// Delivery is fire-and-forget: an implementation must not fail the sale that
/// triggered it.
#[cfg_attr(test, mockall::automock)]
pub trait Notifier: Send + Sync {
    fn notify_low_stock(&self, product: &Product);
}

/// Writes low-stock alerts to the log at WARN level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify_low_stock(&self, product: &Product) {
        tracing::warn!(
            product_id = %product.id,
            product_name = %product.name,
            available_quantity = product.quantity,
            "ALERT: LOW STOCK. Please restock soon to avoid running out of stock."
        );
    }
}
