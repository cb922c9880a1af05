use std::str::FromStr;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::error::{ApiResult, AppError};
use crate::models::product::{
    CreateProduct, NewProduct, Product, ProductChanges, ProductFilter, ProductStatus, UpdateProduct,
};
use crate::repositories::{CategoryRepository, ProductRepository};

#[derive(Clone)]
pub struct ProductService {
    products: Arc<dyn ProductRepository>,
    categories: Arc<dyn CategoryRepository>,
}

impl ProductService {
    pub fn new(products: Arc<dyn ProductRepository>, categories: Arc<dyn CategoryRepository>) -> Self {
        Self { products, categories }
    }

    #[instrument(skip(self))]
    pub async fn list(&self, filter: ProductFilter) -> ApiResult<Vec<Product>> {
        self.products.find_all(filter).await
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: i64) -> ApiResult<Option<Product>> {
        self.products.find_by_id(id).await
    }

    #[instrument(skip(self, input), fields(name = %input.name, category_id = input.category_id))]
    pub async fn create(&self, input: CreateProduct) -> ApiResult<Product> {
        self.ensure_category(input.category_id).await?;

        let product = self
            .products
            .insert(NewProduct {
                name: input.name,
                description: input.description,
                price: input.price,
                stock: input.stock.unwrap_or(0),
                status: ProductStatus::Active,
                category_id: input.category_id,
            })
            .await?;
        info!(id = product.id, "Product created");
        Ok(product)
    }

    #[instrument(skip(self, input))]
    pub async fn update(&self, id: i64, input: UpdateProduct) -> ApiResult<Product> {
        if self.products.find_by_id(id).await?.is_none() {
            return Err(AppError::product_not_found(id));
        }

        if let Some(category_id) = input.category_id {
            self.ensure_category(category_id).await?;
        }
        let status = input
            .status
            .map(|raw| ProductStatus::from_str(&raw).map_err(|_| AppError::InvalidStatus(raw)))
            .transpose()?;

        let changes = ProductChanges {
            name: input.name,
            description: input.description,
            price: input.price,
            stock: input.stock,
            category_id: input.category_id,
            status,
        };
        self.products
            .update(id, changes)
            .await?
            .ok_or_else(|| AppError::product_not_found(id))
    }

    /// Products have no dependents, so removal is unconditional.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> ApiResult<()> {
        if !self.products.delete(id).await? {
            return Err(AppError::product_not_found(id));
        }
        info!(id, "Product deleted");
        Ok(())
    }

    async fn ensure_category(&self, category_id: i64) -> ApiResult<()> {
        match self.categories.find_by_id(category_id).await? {
            Some(_) => Ok(()),
            None => Err(AppError::CategoryNotFound(category_id)),
        }
    }
}
