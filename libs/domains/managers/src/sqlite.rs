use async_trait::async_trait;
use sea_orm::{ConnectionTrait, DatabaseConnection, DbBackend, FromQueryResult, Statement};

use crate::error::AuthResult;
use crate::models::Manager;
use crate::repository::ManagerRepository;

/// SQLite implementation of ManagerRepository using SeaORM raw statements
#[derive(Clone)]
pub struct SqliteManagerRepository {
    db: DatabaseConnection,
}

impl SqliteManagerRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[derive(Debug, FromQueryResult)]
struct ManagerRow {
    id: String,
    email: String,
    password: String,
}

impl From<ManagerRow> for Manager {
    fn from(row: ManagerRow) -> Self {
        Manager {
            id: row.id,
            email: row.email,
            password: row.password,
        }
    }
}

#[derive(Debug, FromQueryResult)]
struct CountRow {
    count: i64,
}

#[async_trait]
impl ManagerRepository for SqliteManagerRepository {
    async fn find_by_email(&self, email: &str) -> AuthResult<Option<Manager>> {
        let sql = "SELECT id, email, password FROM managers WHERE email = ?";

        let stmt = Statement::from_sql_and_values(DbBackend::Sqlite, sql, [email.into()]);
        let row = ManagerRow::find_by_statement(stmt).one(&self.db).await?;

        Ok(row.map(Manager::from))
    }

    async fn insert(&self, manager: &Manager) -> AuthResult<()> {
        let sql = "INSERT INTO managers (id, email, password) VALUES (?, ?, ?)";

        let stmt = Statement::from_sql_and_values(
            DbBackend::Sqlite,
            sql,
            [
                manager.id.clone().into(),
                manager.email.clone().into(),
                manager.password.clone().into(),
            ],
        );

        self.db.execute_raw(stmt).await?;
        Ok(())
    }

    async fn count(&self) -> AuthResult<u64> {
        let stmt = Statement::from_string(
            DbBackend::Sqlite,
            "SELECT COUNT(*) AS count FROM managers",
        );

        let row = CountRow::find_by_statement(stmt).one(&self.db).await?;
        Ok(row.map_or(0, |r| r.count.max(0) as u64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AuthError;
    use test_utils::{TestDataBuilder, TestDatabase};

    #[tokio::test]
    async fn test_insert_and_find_by_email() {
        let db = TestDatabase::new().await;
        let repo = SqliteManagerRepository::new(db.connection());
        let builder = TestDataBuilder::from_test_name("sqlite_manager_find");

        assert_eq!(repo.count().await.unwrap(), 0);

        let manager = Manager::new(builder.email("manager"), "$argon2id$stored");
        repo.insert(&manager).await.unwrap();

        let found = repo
            .find_by_email(&builder.email("manager"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.id, manager.id);
        assert_eq!(found.password, "$argon2id$stored");
        assert_eq!(repo.count().await.unwrap(), 1);

        assert!(repo.find_by_email("nobody@test.local").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_email_is_repository_error() {
        let db = TestDatabase::new().await;
        let repo = SqliteManagerRepository::new(db.connection());

        repo.insert(&Manager::new("dup@test.local", "a")).await.unwrap();
        let err = repo
            .insert(&Manager::new("dup@test.local", "b"))
            .await
            .unwrap_err();

        assert!(matches!(err, AuthError::Repository(_)));
    }
}
