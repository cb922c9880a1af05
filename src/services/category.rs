use std::sync::Arc;
use tracing::{info, instrument};

use crate::error::{ApiResult, AppError};
use crate::models::category::{Category, NewCategory, UpdateCategory};
use crate::repositories::CategoryRepository;

#[derive(Clone)]
pub struct CategoryService {
    categories: Arc<dyn CategoryRepository>,
}

impl CategoryService {
    pub fn new(categories: Arc<dyn CategoryRepository>) -> Self {
        Self { categories }
    }

    #[instrument(skip(self))]
    pub async fn list(&self) -> ApiResult<Vec<Category>> {
        self.categories.find_all().await
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: i64) -> ApiResult<Option<Category>> {
        self.categories.find_by_id(id).await
    }

    #[instrument(skip(self, input), fields(name = %input.name))]
    pub async fn create(&self, input: NewCategory) -> ApiResult<Category> {
        if self.categories.find_by_name(&input.name).await?.is_some() {
            return Err(AppError::DuplicateName(input.name));
        }

        let category = self.categories.insert(input).await?;
        info!(id = category.id, "Category created");
        Ok(category)
    }

    #[instrument(skip(self, input))]
    pub async fn update(&self, id: i64, input: UpdateCategory) -> ApiResult<Category> {
        let category = self
            .categories
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::category_not_found(id))?;

        if let Some(name) = input.name.as_deref() {
            if name != category.name {
                if let Some(other) = self.categories.find_by_name(name).await? {
                    if other.id != id {
                        return Err(AppError::DuplicateName(name.to_string()));
                    }
                }
            }
        }

        self.categories
            .update(id, input)
            .await?
            .ok_or_else(|| AppError::category_not_found(id))
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> ApiResult<()> {
        if self.categories.find_by_id(id).await?.is_none() {
            return Err(AppError::category_not_found(id));
        }

        if self.categories.count_products(id).await? > 0 {
            return Err(AppError::HasDependents(id));
        }

        if !self.categories.delete(id).await? {
            return Err(AppError::category_not_found(id));
        }
        info!(id, "Category deleted");
        Ok(())
    }
}
