use async_trait::async_trait;
use sqlx::PgPool;

use super::{map_violation, FOREIGN_KEY_VIOLATION, NUMERIC_OUT_OF_RANGE};
use crate::error::{ApiResult, AppError};
use crate::models::product::{NewProduct, Product, ProductChanges, ProductFilter};
use crate::validation::PRICE_MAX;

/// Every read joins the owning category so responses can carry its name.
const SELECT_PRODUCTS: &str = "SELECT p.id, p.name, p.description,
            p.price::FLOAT8 AS price,
            p.stock, p.status, p.category_id,
            c.name AS category_name,
            p.created_at, p.updated_at
     FROM products p
     LEFT JOIN categories c ON c.id = p.category_id";

/// Projection over a `written` CTE holding the row just inserted or updated.
const SELECT_WRITTEN: &str = "SELECT w.id, w.name, w.description,
            w.price::FLOAT8 AS price,
            w.stock, w.status, w.category_id,
            c.name AS category_name,
            w.created_at, w.updated_at
     FROM written w
     LEFT JOIN categories c ON c.id = w.category_id";

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> ApiResult<Option<Product>>;

    async fn find_all(&self, filter: ProductFilter) -> ApiResult<Vec<Product>>;

    async fn insert(&self, input: NewProduct) -> ApiResult<Product>;

    /// Writes only the `Some` fields of `changes` and stamps `updated_at`
    /// with the database clock; `None` if the row is gone.
    async fn update(&self, id: i64, changes: ProductChanges) -> ApiResult<Option<Product>>;

    /// Returns whether a row was removed.
    async fn delete(&self, id: i64) -> ApiResult<bool>;
}

#[derive(Clone)]
pub struct PgProductRepository {
    pool: PgPool,
}

impl PgProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Maps the write-side constraint failures shared by insert and update.
fn map_write_error(err: sqlx::Error, category_id: Option<i64>) -> AppError {
    map_violation(err, |code| match code {
        FOREIGN_KEY_VIOLATION => category_id.map(AppError::CategoryNotFound),
        NUMERIC_OUT_OF_RANGE => Some(AppError::ValidationFailed(vec![format!(
            "Price must be at most {PRICE_MAX:.2}"
        )])),
        _ => None,
    })
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn find_by_id(&self, id: i64) -> ApiResult<Option<Product>> {
        let sql = format!("{SELECT_PRODUCTS} WHERE p.id = $1");
        let product = sqlx::query_as::<_, Product>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(product)
    }

    async fn find_all(&self, filter: ProductFilter) -> ApiResult<Vec<Product>> {
        let sql = format!(
            "{SELECT_PRODUCTS}
             WHERE ($1::BIGINT IS NULL OR p.category_id = $1)
               AND ($2::product_status IS NULL OR p.status = $2)
             ORDER BY p.id"
        );
        let products = sqlx::query_as::<_, Product>(&sql)
            .bind(filter.category_id)
            .bind(filter.status)
            .fetch_all(&self.pool)
            .await?;
        Ok(products)
    }

    async fn insert(&self, input: NewProduct) -> ApiResult<Product> {
        let sql = format!(
            "WITH written AS (
                INSERT INTO products (name, description, price, stock, status, category_id)
                VALUES ($1, $2, $3::FLOAT8, $4, $5, $6)
                RETURNING *
             )
             {SELECT_WRITTEN}"
        );
        sqlx::query_as::<_, Product>(&sql)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.price)
            .bind(input.stock)
            .bind(input.status)
            .bind(input.category_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_write_error(e, Some(input.category_id)))
    }

    async fn update(&self, id: i64, changes: ProductChanges) -> ApiResult<Option<Product>> {
        let sql = format!(
            "WITH written AS (
                UPDATE products SET
                    name = COALESCE($2, name),
                    description = COALESCE($3, description),
                    price = COALESCE($4::FLOAT8, price),
                    stock = COALESCE($5, stock),
                    status = COALESCE($6, status),
                    category_id = COALESCE($7, category_id),
                    updated_at = now()
                WHERE id = $1
                RETURNING *
             )
             {SELECT_WRITTEN}"
        );
        sqlx::query_as::<_, Product>(&sql)
            .bind(id)
            .bind(&changes.name)
            .bind(&changes.description)
            .bind(changes.price)
            .bind(changes.stock)
            .bind(changes.status)
            .bind(changes.category_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_write_error(e, changes.category_id))
    }

    async fn delete(&self, id: i64) -> ApiResult<bool> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
