use sqlx::PgPool;
use std::sync::Arc;

use crate::repositories::{CategoryRepository, PgCategoryRepository, PgProductRepository, ProductRepository};
use crate::services::{CategoryService, ProductService};

#[derive(Clone)]
pub struct AppState {
    pub categories: CategoryService,
    pub products: ProductService,
}

impl AppState {
    pub fn new(db_pool: PgPool) -> Self {
        Self::from_repositories(
            Arc::new(PgCategoryRepository::new(db_pool.clone())),
            Arc::new(PgProductRepository::new(db_pool)),
        )
    }

    pub fn from_repositories(
        categories: Arc<dyn CategoryRepository>,
        products: Arc<dyn ProductRepository>,
    ) -> Self {
        Self {
            categories: CategoryService::new(Arc::clone(&categories)),
            products: ProductService::new(products, categories),
        }
    }
}
