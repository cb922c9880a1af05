//! Business rules against a real Postgres database.
//!
//! Run with `DATABASE_URL` pointing at a server the test user may create
//! databases on: `cargo test -- --ignored`.

use catalog_backend::error::AppError;
use catalog_backend::models::category::{NewCategory, UpdateCategory};
use catalog_backend::models::product::{
    CreateProduct, NewProduct, ProductFilter, ProductStatus, UpdateProduct,
};
use catalog_backend::repositories::{
    CategoryRepository, PgCategoryRepository, PgProductRepository, ProductRepository,
};
use catalog_backend::state::AppState;
use sqlx::PgPool;

fn notebook(category_id: i64) -> CreateProduct {
    CreateProduct {
        name: "Notebook".into(),
        description: Some("14 inch".into()),
        price: 3500.5,
        stock: None,
        category_id,
    }
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn category_round_trip(pool: PgPool) {
    let state = AppState::new(pool);

    let created = state
        .categories
        .create(NewCategory { name: "Eletrônicos".into(), description: Some("Gadgets".into()) })
        .await
        .unwrap();
    let fetched = state.categories.get(created.id).await.unwrap().unwrap();

    assert_eq!(fetched, created);
    assert_eq!(fetched.name, "Eletrônicos");
    assert_eq!(fetched.description.as_deref(), Some("Gadgets"));
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn duplicate_category_name_is_rejected(pool: PgPool) {
    let state = AppState::new(pool.clone());
    let input = NewCategory { name: "Eletrônicos".into(), description: None };

    state.categories.create(input.clone()).await.unwrap();
    let err = state.categories.create(input.clone()).await.unwrap_err();
    assert!(matches!(err, AppError::DuplicateName(_)));

    // The unique constraint holds even when the in-process check is bypassed
    let err = PgCategoryRepository::new(pool).insert(input).await.unwrap_err();
    assert!(matches!(err, AppError::DuplicateName(_)));
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn category_delete_waits_for_last_product(pool: PgPool) {
    let state = AppState::new(pool);
    let category = state
        .categories
        .create(NewCategory { name: "Livros".into(), description: None })
        .await
        .unwrap();
    let product = state.products.create(notebook(category.id)).await.unwrap();

    let err = state.categories.delete(category.id).await.unwrap_err();
    assert!(matches!(err, AppError::HasDependents(id) if id == category.id));

    state.products.delete(product.id).await.unwrap();
    state.categories.delete(category.id).await.unwrap();
    assert!(state.categories.get(category.id).await.unwrap().is_none());
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn product_rules(pool: PgPool) {
    let state = AppState::new(pool);

    let err = state.products.create(notebook(999)).await.unwrap_err();
    assert!(matches!(err, AppError::CategoryNotFound(999)));

    let category = state
        .categories
        .create(NewCategory { name: "Eletrônicos".into(), description: None })
        .await
        .unwrap();
    let created = state.products.create(notebook(category.id)).await.unwrap();
    assert_eq!(created.status, ProductStatus::Active);
    assert_eq!(created.stock, 0);
    assert_eq!(created.price, 3500.5);
    assert_eq!(created.category_name.as_deref(), Some("Eletrônicos"));

    let err = state
        .products
        .update(created.id, UpdateProduct { status: Some("QUALQUER".into()), ..Default::default() })
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::InvalidStatus(_)));

    let updated = state
        .products
        .update(created.id, UpdateProduct { status: Some("INATIVO".into()), ..Default::default() })
        .await
        .unwrap();
    assert_eq!(updated.status, ProductStatus::Inactive);
    assert!(updated.updated_at > created.updated_at);

    let inactive = state
        .products
        .list(ProductFilter { category_id: None, status: Some(ProductStatus::Inactive) })
        .await
        .unwrap();
    assert_eq!(inactive.len(), 1);
    let active = state
        .products
        .list(ProductFilter { category_id: Some(category.id), status: Some(ProductStatus::Active) })
        .await
        .unwrap();
    assert!(active.is_empty());
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn partial_updates_touch_only_their_columns(pool: PgPool) {
    let state = AppState::new(pool);
    let category = state
        .categories
        .create(NewCategory { name: "Eletrônicos".into(), description: Some("Gadgets".into()) })
        .await
        .unwrap();
    let created = state.products.create(notebook(category.id)).await.unwrap();

    state
        .products
        .update(created.id, UpdateProduct { price: Some(10.25), ..Default::default() })
        .await
        .unwrap();
    let after = state
        .products
        .update(created.id, UpdateProduct { stock: Some(7), ..Default::default() })
        .await
        .unwrap();

    assert_eq!(after.price, 10.25);
    assert_eq!(after.stock, 7);
    assert_eq!(after.name, "Notebook");
    assert_eq!(after.description.as_deref(), Some("14 inch"));
    assert!(after.updated_at >= created.updated_at);

    let renamed = state
        .categories
        .update(category.id, UpdateCategory {
            name: Some("Informática".into()),
            description: None,
        })
        .await
        .unwrap();
    assert_eq!(renamed.name, "Informática");
    assert_eq!(renamed.description.as_deref(), Some("Gadgets"));
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn price_overflow_is_a_validation_failure(pool: PgPool) {
    let state = AppState::new(pool.clone());
    let category = state
        .categories
        .create(NewCategory { name: "Náutica".into(), description: None })
        .await
        .unwrap();

    let err = PgProductRepository::new(pool)
        .insert(NewProduct {
            name: "Yacht".into(),
            description: None,
            price: 1.0e9,
            stock: 0,
            status: ProductStatus::Active,
            category_id: category.id,
        })
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::ValidationFailed(ref v) if v.len() == 1));
}
