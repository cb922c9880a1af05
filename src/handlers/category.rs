// src/handlers/category.rs
use axum::extract::State;
use tracing::instrument;

use crate::dtos::category::{CategoryResponse, CreateCategoryRequest, UpdateCategoryRequest};
use crate::envelope::ApiResponse;
use crate::error::{ApiResult, AppError};
use crate::extract::{IdPath, ValidatedJson};
use crate::state::AppState;

// GET /categories
#[instrument(skip(state))]
pub async fn list_categories(State(state): State<AppState>) -> ApiResult<ApiResponse<Vec<CategoryResponse>>> {
    let categories: Vec<CategoryResponse> = state
        .categories
        .list()
        .await?
        .into_iter()
        .map(CategoryResponse::from)
        .collect();

    let message = format!("Found {} categories", categories.len());
    Ok(ApiResponse::ok(categories, message))
}

// GET /categories/{id}
#[instrument(skip(state))]
pub async fn get_category(
    IdPath(id): IdPath,
    State(state): State<AppState>,
) -> ApiResult<ApiResponse<CategoryResponse>> {
    let category = state
        .categories
        .get(id)
        .await?
        .ok_or_else(|| AppError::category_not_found(id))?;

    Ok(ApiResponse::ok(CategoryResponse::from(category), "Category found"))
}

// POST /categories
#[instrument(skip(state, input))]
pub async fn create_category(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateCategoryRequest>,
) -> ApiResult<ApiResponse<CategoryResponse>> {
    let category = state.categories.create(input).await?;
    Ok(ApiResponse::created(CategoryResponse::from(category), "Category created"))
}

// PUT /categories/{id}
#[instrument(skip(state, input))]
pub async fn update_category(
    IdPath(id): IdPath,
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<UpdateCategoryRequest>,
) -> ApiResult<ApiResponse<CategoryResponse>> {
    let category = state.categories.update(id, input).await?;
    Ok(ApiResponse::ok(CategoryResponse::from(category), "Category updated"))
}

// DELETE /categories/{id}
#[instrument(skip(state))]
pub async fn delete_category(
    IdPath(id): IdPath,
    State(state): State<AppState>,
) -> ApiResult<ApiResponse<()>> {
    state.categories.delete(id).await?;
    Ok(ApiResponse::no_content("Category deleted"))
}
