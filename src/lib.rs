//! Category and product catalog service.
//!
//! Requests flow handler → field validation → business rules → store, and
//! every outcome is answered in the same JSON envelope.

pub mod config;
pub mod database;
pub mod dtos;
pub mod envelope;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod validation;
