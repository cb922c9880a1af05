// src/handlers/product.rs
use axum::extract::State;
use tracing::instrument;

use crate::dtos::product::{CreateProductRequest, ListProductsQuery, ProductResponse, UpdateProductRequest};
use crate::envelope::ApiResponse;
use crate::error::{ApiResult, AppError};
use crate::extract::{IdPath, QueryParams, ValidatedJson};
use crate::state::AppState;

// GET /products?category_id=&status=
#[instrument(skip(state))]
pub async fn list_products(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<ListProductsQuery>,
) -> ApiResult<ApiResponse<Vec<ProductResponse>>> {
    let products: Vec<ProductResponse> = state
        .products
        .list(query.into_filter())
        .await?
        .into_iter()
        .map(ProductResponse::from)
        .collect();

    let message = format!("Found {} products", products.len());
    Ok(ApiResponse::ok(products, message))
}

// GET /products/{id}
#[instrument(skip(state))]
pub async fn get_product(
    IdPath(id): IdPath,
    State(state): State<AppState>,
) -> ApiResult<ApiResponse<ProductResponse>> {
    let product = state
        .products
        .get(id)
        .await?
        .ok_or_else(|| AppError::product_not_found(id))?;

    Ok(ApiResponse::ok(ProductResponse::from(product), "Product found"))
}

// POST /products
#[instrument(skip(state, input))]
pub async fn create_product(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateProductRequest>,
) -> ApiResult<ApiResponse<ProductResponse>> {
    let product = state.products.create(input).await?;
    Ok(ApiResponse::created(ProductResponse::from(product), "Product created"))
}

// PUT /products/{id}
#[instrument(skip(state, input))]
pub async fn update_product(
    IdPath(id): IdPath,
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<UpdateProductRequest>,
) -> ApiResult<ApiResponse<ProductResponse>> {
    let product = state.products.update(id, input).await?;
    Ok(ApiResponse::ok(ProductResponse::from(product), "Product updated"))
}

// DELETE /products/{id}
#[instrument(skip(state))]
pub async fn delete_product(
    IdPath(id): IdPath,
    State(state): State<AppState>,
) -> ApiResult<ApiResponse<()>> {
    state.products.delete(id).await?;
    Ok(ApiResponse::no_content("Product deleted"))
}
