//! Data-store seam. Services only see these traits; the Postgres
//! implementations live next to them.

pub mod category;
pub mod product;

pub use category::{CategoryRepository, PgCategoryRepository};
pub use product::{PgProductRepository, ProductRepository};

use sqlx::Error as SqlxError;

use crate::error::AppError;

pub const UNIQUE_VIOLATION: &str = "23505";
pub const FOREIGN_KEY_VIOLATION: &str = "23503";
pub const NUMERIC_OUT_OF_RANGE: &str = "22003";

/// Translates a Postgres error code into a business error; any code the
/// caller does not map stays unexpected.
fn map_violation(err: SqlxError, mapped: impl FnOnce(&str) -> Option<AppError>) -> AppError {
    let code = err
        .as_database_error()
        .and_then(|db_err| db_err.code())
        .map(|code| code.into_owned());
    code.as_deref().and_then(mapped).unwrap_or_else(|| err.into())
}
