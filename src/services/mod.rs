//! Business rules for categories and products.
//!
//! The store-level constraints in `migrations/` back the check-then-act
//! sequences here; the in-process checks alone do not prevent duplicates
//! under concurrent requests.
//!
//! Updates hand the store only the fields the caller supplied; absent fields
//! keep whatever the row holds at write time, and `updated_at` is stamped by
//! the database.

pub mod category;
pub mod product;

pub use category::CategoryService;
pub use product::ProductService;
