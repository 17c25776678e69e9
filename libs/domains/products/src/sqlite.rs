use async_trait::async_trait;
use sea_orm::{ConnectionTrait, DatabaseConnection, DbBackend, FromQueryResult, Statement};

use crate::error::ProductResult;
use crate::models::Product;
use crate::repository::ProductRepository;

/// SQLite implementation of ProductRepository using SeaORM raw statements
#[derive(Clone)]
pub struct SqliteProductRepository {
    db: DatabaseConnection,
}

impl SqliteProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn fetch_one(&self, stmt: Statement) -> ProductResult<Option<Product>> {
        let row = ProductRow::find_by_statement(stmt).one(&self.db).await?;
        Ok(row.map(Product::from))
    }
}

#[derive(Debug, FromQueryResult)]
struct ProductRow {
    id: String,
    name: String,
    price: f64,
    quantity: i64,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Product {
            id: row.id,
            name: row.name,
            price: row.price,
            quantity: row.quantity,
        }
    }
}

#[async_trait]
impl ProductRepository for SqliteProductRepository {
    async fn insert(&self, product: &Product) -> ProductResult<()> {
        let sql = "INSERT INTO products (id, name, price, quantity) VALUES (?, ?, ?, ?)";

        let stmt = Statement::from_sql_and_values(
            DbBackend::Sqlite,
            sql,
            [
                product.id.clone().into(),
                product.name.clone().into(),
                product.price.into(),
                product.quantity.into(),
            ],
        );

        self.db.execute_raw(stmt).await?;
        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> ProductResult<Option<Product>> {
        let sql = "SELECT id, name, price, quantity FROM products WHERE id = ?";

        let stmt = Statement::from_sql_and_values(DbBackend::Sqlite, sql, [id.into()]);
        self.fetch_one(stmt).await
    }

    async fn list(&self) -> ProductResult<Vec<Product>> {
        let sql = "SELECT id, name, price, quantity FROM products ORDER BY rowid";

        let stmt = Statement::from_string(DbBackend::Sqlite, sql);
        let rows = ProductRow::find_by_statement(stmt).all(&self.db).await?;

        Ok(rows.into_iter().map(Product::from).collect())
    }

    async fn update_price(&self, id: &str, price: f64) -> ProductResult<Option<Product>> {
        let sql = r#"
            UPDATE products SET price = ?
            WHERE id = ?
            RETURNING id, name, price, quantity
        "#;

        let stmt = Statement::from_sql_and_values(DbBackend::Sqlite, sql, [price.into(), id.into()]);
        self.fetch_one(stmt).await
    }

    async fn withdraw_stock(&self, id: &str, quantity: i64) -> ProductResult<Option<Product>> {
        // Check and decrement happen in one statement
        let sql = r#"
            UPDATE products SET quantity = quantity - ?
            WHERE id = ? AND quantity >= ?
            RETURNING id, name, price, quantity
        "#;

        let stmt = Statement::from_sql_and_values(
            DbBackend::Sqlite,
            sql,
            [quantity.into(), id.into(), quantity.into()],
        );
        self.fetch_one(stmt).await
    }

    async fn add_stock(&self, id: &str, quantity: i64) -> ProductResult<Option<Product>> {
        let sql = r#"
            UPDATE products SET quantity = quantity + ?
            WHERE id = ?
            RETURNING id, name, price, quantity
        "#;

        let stmt =
            Statement::from_sql_and_values(DbBackend::Sqlite, sql, [quantity.into(), id.into()]);
        self.fetch_one(stmt).await
    }

    async fn delete(&self, id: &str) -> ProductResult<bool> {
        let sql = "DELETE FROM products WHERE id = ?";

        let stmt = Statement::from_sql_and_values(DbBackend::Sqlite, sql, [id.into()]);
        let result = self.db.execute_raw(stmt).await?;

        Ok(result.rows_affected() > 0)
    }
}
