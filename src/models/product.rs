use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use strum::{Display, EnumString};

/// Lifecycle status of a product.
///
/// The wire, database and parse representations all use the same
/// vocabulary (`ATIVO`, `INATIVO`, `DESCONTINUADO`) and are case-sensitive.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    sqlx::Type,
)]
#[sqlx(type_name = "product_status")]
pub enum ProductStatus {
    #[default]
    #[serde(rename = "ATIVO")]
    #[strum(serialize = "ATIVO")]
    #[sqlx(rename = "ATIVO")]
    Active,
    #[serde(rename = "INATIVO")]
    #[strum(serialize = "INATIVO")]
    #[sqlx(rename = "INATIVO")]
    Inactive,
    #[serde(rename = "DESCONTINUADO")]
    #[strum(serialize = "DESCONTINUADO")]
    #[sqlx(rename = "DESCONTINUADO")]
    Discontinued,
}

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub stock: i32,
    pub status: ProductStatus,
    pub category_id: i64,
    /// Joined from `categories`; absent only if the row was read without the join.
    pub category_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated create command; the service fills in the defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateProduct {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub stock: Option<i32>,
    pub category_id: i64,
}

/// Partial update; only `Some` fields are applied. `status` stays raw so the
/// business rules decide how an unknown value is reported.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateProduct {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub stock: Option<i32>,
    pub category_id: Option<i64>,
    pub status: Option<String>,
}

/// Columns a product update writes; `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductChanges {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub stock: Option<i32>,
    pub category_id: Option<i64>,
    pub status: Option<ProductStatus>,
}

/// Row ready to be inserted.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub stock: i32,
    pub status: ProductStatus,
    pub category_id: i64,
}

/// Conjunctive filters for product listing. `None` means "not filtered".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProductFilter {
    pub category_id: Option<i64>,
    pub status: Option<ProductStatus>,
}
