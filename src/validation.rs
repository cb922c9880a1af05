//! Field rules for incoming payloads.
//!
//! Every rule is pure and returns the violations it finds, so callers can
//! collect all of them before answering instead of stopping at the first.

use std::str::FromStr;

use crate::models::product::ProductStatus;

pub const CATEGORY_NAME_MAX: usize = 100;
pub const PRODUCT_NAME_MAX: usize = 200;
/// Largest value a `NUMERIC(10, 2)` price column holds.
pub const PRICE_MAX: f64 = 99_999_999.99;

/// A payload that can be checked and turned into a typed command.
pub trait Validate {
    type Command;

    /// Returns the command, or every violation in rule order.
    fn validate(self) -> Result<Self::Command, Vec<String>>;
}

fn too_long(value: &str, max: usize) -> bool {
    value.trim().chars().count() > max
}

pub fn required_name(value: Option<&str>, subject: &str, max: usize) -> Vec<String> {
    match value {
        None => vec![format!("{subject} name is required")],
        Some(v) if v.trim().is_empty() => vec![format!("{subject} name is required")],
        Some(v) if too_long(v, max) => {
            vec![format!("{subject} name must be at most {max} characters")]
        }
        Some(_) => Vec::new(),
    }
}

pub fn optional_name(value: Option<&str>, subject: &str, max: usize) -> Vec<String> {
    match value {
        Some(v) if v.trim().is_empty() => vec![format!("{subject} name cannot be empty")],
        Some(v) if too_long(v, max) => {
            vec![format!("{subject} name must be at most {max} characters")]
        }
        _ => Vec::new(),
    }
}

pub fn required_price(value: Option<f64>) -> Vec<String> {
    match value {
        None => vec!["Price is required".to_string()],
        Some(p) => optional_price(Some(p)),
    }
}

/// Prices are stored with two decimal places; anything finer is rejected
/// instead of being rounded by the store.
pub fn optional_price(value: Option<f64>) -> Vec<String> {
    let Some(p) = value else {
        return Vec::new();
    };
    if !p.is_finite() || p < 0.0 {
        return vec!["Price must be zero or greater".to_string()];
    }

    let mut violations = Vec::new();
    if p > PRICE_MAX {
        violations.push(format!("Price must be at most {PRICE_MAX:.2}"));
    }
    let cents = p * 100.0;
    if (cents - cents.round()).abs() > 1e-4 {
        violations.push("Price must have at most 2 decimal places".to_string());
    }
    violations
}

pub fn required_category_id(value: Option<i64>) -> Vec<String> {
    match value {
        Some(id) if id > 0 => Vec::new(),
        _ => vec!["Category is required".to_string()],
    }
}

pub fn optional_category_id(value: Option<i64>) -> Vec<String> {
    match value {
        Some(id) if id <= 0 => vec!["Category id must be a positive integer".to_string()],
        _ => Vec::new(),
    }
}

pub fn optional_stock(value: Option<i32>) -> Vec<String> {
    match value {
        Some(s) if s < 0 => vec!["Stock cannot be negative".to_string()],
        _ => Vec::new(),
    }
}

pub fn optional_status(value: Option<&str>) -> Vec<String> {
    match value {
        Some(s) if ProductStatus::from_str(s).is_err() => {
            vec!["Status must be ATIVO, INATIVO or DESCONTINUADO".to_string()]
        }
        _ => Vec::new(),
    }
}
