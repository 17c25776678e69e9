//! Configuration for Inventory API

use axum_helpers::JwtConfig;
use core_config::{app_info, server::ServerConfig, AppInfo, FromEnv};
use database::sqlite::SqliteConfig;
use domain_managers::{HashingConfig, SeedConfig};
use domain_products::InventoryConfig;

pub use core_config::Environment;

/// Application configuration, loaded once at start-up and passed down explicitly
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub environment: Environment,
    pub server: ServerConfig,
    pub database: SqliteConfig,
    pub jwt: JwtConfig,
    pub inventory: InventoryConfig,
    pub hashing: HashingConfig,
    pub seed: SeedConfig,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        Ok(Self {
            app: app_info!(),
            environment: Environment::from_env(),
            server: ServerConfig::from_env()?,
            database: SqliteConfig::from_env()?,
            jwt: JwtConfig::from_env()?,
            inventory: InventoryConfig::from_env()?,
            hashing: HashingConfig::from_env()?,
            seed: SeedConfig::from_env()?,
        })
    }
}
