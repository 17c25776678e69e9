use core_config::{ConfigError, FromEnv, env_parse_or_default};

pub const DEFAULT_LOW_STOCK_THRESHOLD: i64 = 10;

/// Inventory business rules
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InventoryConfig {
    /// A product is low on stock when its quantity is strictly below this value.
    pub low_stock_threshold: i64,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
        }
    }
}

impl FromEnv for InventoryConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let low_stock_threshold = env_parse_or_default(
            "LOW_STOCK_THRESHOLD",
            &DEFAULT_LOW_STOCK_THRESHOLD.to_string(),
        )?;

        Ok(Self {
            low_stock_threshold,
        })
    }
}
