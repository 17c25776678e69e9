use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use sea_orm_migration::MigratorTrait;
use tracing::info;

use super::SqliteConfig;

/// Connect to a SQLite database with the default pool settings
///
/// ```ignore
/// use database::sqlite::connect;
///
/// let db = connect("sqlite://inventory.db?mode=rwc").await?;
/// ```
pub async fn connect(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    connect_from_config(SqliteConfig::new(database_url)).await
}

/// Connect using a [`SqliteConfig`]
pub async fn connect_from_config(config: SqliteConfig) -> Result<DatabaseConnection, DbErr> {
    let url = config.url.clone();
    let options: ConnectOptions = config.into_connect_options();
    let db = Database::connect(options).await?;

    info!(url = %url, "Successfully connected to SQLite database");
    Ok(db)
}

/// Run database migrations using the provided Migrator
///
/// ```ignore
/// use migration::Migrator;
/// use database::sqlite::run_migrations;
///
/// run_migrations::<Migrator>(&db, "inventory_api").await?;
/// ```
pub async fn run_migrations<M: MigratorTrait>(
    db: &DatabaseConnection,
    app_name: &str,
) -> Result<(), DbErr> {
    info!("Running {} database migrations...", app_name);
    M::up(db, None).await?;
    info!("Migrations completed successfully for {}", app_name);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_connect_in_memory() {
        let db = connect("sqlite::memory:").await;
        assert!(db.is_ok());
    }
}
