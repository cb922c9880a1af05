use async_trait::async_trait;
use sqlx::PgPool;

use super::{map_violation, FOREIGN_KEY_VIOLATION, UNIQUE_VIOLATION};
use crate::error::{ApiResult, AppError};
use crate::models::category::{Category, NewCategory, UpdateCategory};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> ApiResult<Option<Category>>;

    async fn find_all(&self) -> ApiResult<Vec<Category>>;

    /// Exact, case-sensitive match.
    async fn find_by_name(&self, name: &str) -> ApiResult<Option<Category>>;

    async fn insert(&self, input: NewCategory) -> ApiResult<Category>;

    /// Writes only the `Some` fields of `changes`; `None` if the row is gone.
    async fn update(&self, id: i64, changes: UpdateCategory) -> ApiResult<Option<Category>>;

    /// Returns whether a row was removed.
    async fn delete(&self, id: i64) -> ApiResult<bool>;

    /// Number of products referencing the category.
    async fn count_products(&self, id: i64) -> ApiResult<i64>;
}

#[derive(Clone)]
pub struct PgCategoryRepository {
    pool: PgPool,
}

impl PgCategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryRepository for PgCategoryRepository {
    async fn find_by_id(&self, id: i64) -> ApiResult<Option<Category>> {
        let category = sqlx::query_as::<_, Category>(
            "SELECT id, name, description, created_at FROM categories WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(category)
    }

    async fn find_all(&self) -> ApiResult<Vec<Category>> {
        let categories = sqlx::query_as::<_, Category>(
            "SELECT id, name, description, created_at FROM categories ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(categories)
    }

    async fn find_by_name(&self, name: &str) -> ApiResult<Option<Category>> {
        let category = sqlx::query_as::<_, Category>(
            "SELECT id, name, description, created_at FROM categories WHERE name = $1 LIMIT 1",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;
        Ok(category)
    }

    async fn insert(&self, input: NewCategory) -> ApiResult<Category> {
        sqlx::query_as::<_, Category>(
            "INSERT INTO categories (name, description)
             VALUES ($1, $2)
             RETURNING id, name, description, created_at",
        )
        .bind(&input.name)
        .bind(&input.description)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            map_violation(e, |code| {
                (code == UNIQUE_VIOLATION).then(|| AppError::DuplicateName(input.name.clone()))
            })
        })
    }

    async fn update(&self, id: i64, changes: UpdateCategory) -> ApiResult<Option<Category>> {
        sqlx::query_as::<_, Category>(
            "UPDATE categories SET
                name = COALESCE($2, name),
                description = COALESCE($3, description)
             WHERE id = $1
             RETURNING id, name, description, created_at",
        )
        .bind(id)
        .bind(&changes.name)
        .bind(&changes.description)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            map_violation(e, |code| {
                (code == UNIQUE_VIOLATION)
                    .then(|| AppError::DuplicateName(changes.name.clone().unwrap_or_default()))
            })
        })
    }

    async fn delete(&self, id: i64) -> ApiResult<bool> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                map_violation(e, |code| (code == FOREIGN_KEY_VIOLATION).then(|| AppError::HasDependents(id)))
            })?;
        Ok(result.rows_affected() > 0)
    }

    async fn count_products(&self, id: i64) -> ApiResult<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM products WHERE category_id = $1")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
