// src/dtos/product.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::models::product::{CreateProduct, Product, ProductFilter, ProductStatus, UpdateProduct};
use crate::validation::{self, Validate, PRODUCT_NAME_MAX};

#[derive(Debug, Default, Deserialize)]
pub struct CreateProductRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub stock: Option<i32>,
    pub category_id: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateProductRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub stock: Option<i32>,
    pub category_id: Option<i64>,
    pub status: Option<String>,
}

/// Query string of `GET /products`. Values arrive as text and are parsed
/// leniently: anything unparseable simply drops that filter.
#[derive(Debug, Default, Deserialize)]
pub struct ListProductsQuery {
    pub category_id: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ProductResponse {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub stock: i32,
    pub status: ProductStatus,
    pub category_id: i64,
    pub category: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Validate for CreateProductRequest {
    type Command = CreateProduct;

    fn validate(self) -> Result<CreateProduct, Vec<String>> {
        let mut violations = validation::required_name(self.name.as_deref(), "Product", PRODUCT_NAME_MAX);
        violations.extend(validation::required_price(self.price));
        violations.extend(validation::required_category_id(self.category_id));
        violations.extend(validation::optional_stock(self.stock));

        match (self.name, self.price, self.category_id) {
            (Some(name), Some(price), Some(category_id)) if violations.is_empty() => Ok(CreateProduct {
                name: name.trim().to_string(),
                description: self.description,
                price,
                stock: self.stock,
                category_id,
            }),
            _ => Err(violations),
        }
    }
}

impl Validate for UpdateProductRequest {
    type Command = UpdateProduct;

    fn validate(self) -> Result<UpdateProduct, Vec<String>> {
        let mut violations = validation::optional_name(self.name.as_deref(), "Product", PRODUCT_NAME_MAX);
        violations.extend(validation::optional_price(self.price));
        violations.extend(validation::optional_category_id(self.category_id));
        violations.extend(validation::optional_stock(self.stock));
        violations.extend(validation::optional_status(self.status.as_deref()));
        if !violations.is_empty() {
            return Err(violations);
        }

        Ok(UpdateProduct {
            name: self.name.map(|n| n.trim().to_string()),
            description: self.description,
            price: self.price,
            stock: self.stock,
            category_id: self.category_id,
            status: self.status,
        })
    }
}

impl ListProductsQuery {
    pub fn into_filter(self) -> ProductFilter {
        ProductFilter {
            category_id: self
                .category_id
                .and_then(|raw| raw.trim().parse::<i64>().ok())
                .filter(|id| *id != 0),
            status: self.status.and_then(|raw| ProductStatus::from_str(&raw).ok()),
        }
    }
}

// Convert from Model to Response DTO
impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            description: product.description,
            price: product.price,
            stock: product.stock,
            status: product.status,
            category_id: product.category_id,
            category: product.category_name,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_reports_every_violation() {
        let req = CreateProductRequest {
            name: Some("".into()),
            price: Some(-1.0),
            category_id: Some(0),
            stock: Some(-5),
            description: None,
        };
        assert_eq!(
            req.validate().unwrap_err(),
            vec![
                "Product name is required",
                "Price must be zero or greater",
                "Category is required",
                "Stock cannot be negative",
            ]
        );
    }

    #[test]
    fn create_with_missing_fields_lists_them_all() {
        let errors = CreateProductRequest::default().validate().unwrap_err();
        assert_eq!(
            errors,
            vec!["Product name is required", "Price is required", "Category is required"]
        );
    }

    #[test]
    fn create_keeps_stock_absent_for_the_service_default() {
        let req = CreateProductRequest {
            name: Some(" Notebook ".into()),
            price: Some(3500.0),
            category_id: Some(1),
            ..Default::default()
        };
        let cmd = req.validate().unwrap();
        assert_eq!(cmd.name, "Notebook");
        assert_eq!(cmd.stock, None);
    }

    #[test]
    fn update_validates_only_present_fields() {
        let req = UpdateProductRequest { stock: Some(0), ..Default::default() };
        let cmd = req.validate().unwrap();
        assert_eq!(cmd.stock, Some(0));
        assert_eq!(cmd.name, None);

        let req = UpdateProductRequest {
            price: Some(-2.0),
            status: Some("QUALQUER".into()),
            ..Default::default()
        };
        assert_eq!(
            req.validate().unwrap_err(),
            vec!["Price must be zero or greater", "Status must be ATIVO, INATIVO or DESCONTINUADO"]
        );
    }

    #[test]
    fn list_query_drops_unparseable_filters() {
        let query = ListProductsQuery { category_id: Some("abc".into()), status: Some("xyz".into()) };
        assert_eq!(query.into_filter(), ProductFilter::default());

        let query = ListProductsQuery { category_id: Some("0".into()), status: None };
        assert_eq!(query.into_filter(), ProductFilter::default());

        let query = ListProductsQuery { category_id: Some("3".into()), status: Some("INATIVO".into()) };
        assert_eq!(
            query.into_filter(),
            ProductFilter { category_id: Some(3), status: Some(ProductStatus::Inactive) }
        );
    }
}
