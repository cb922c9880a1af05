// src/error.rs
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::envelope::Envelope;

pub const GENERIC_FAILURE: &str = "An unexpected error occurred. Please try again later.";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid data")]
    ValidationFailed(Vec<String>),

    #[error("{resource} not found")]
    NotFound { resource: &'static str, id: i64 },

    #[error("A category named '{0}' already exists")]
    DuplicateName(String),

    #[error("Category {0} has associated products and cannot be deleted")]
    HasDependents(i64),

    #[error("Category {0} not found")]
    CategoryNotFound(i64),

    #[error("Invalid status '{0}'; expected ATIVO, INATIVO or DESCONTINUADO")]
    InvalidStatus(String),

    #[error("Request body missing or malformed")]
    MalformedBody(String),

    #[error("Invalid query string")]
    InvalidQuery(String),

    #[error("Route not found")]
    RouteNotFound,

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Unexpected error: {0}")]
    Unexpected(#[from] sqlx::Error),
}

pub type ApiResult<T> = Result<T, AppError>;

impl AppError {
    pub fn category_not_found(id: i64) -> Self {
        AppError::NotFound { resource: "Category", id }
    }

    pub fn product_not_found(id: i64) -> Self {
        AppError::NotFound { resource: "Product", id }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationFailed(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::NotFound { .. } | AppError::RouteNotFound => StatusCode::NOT_FOUND,
            AppError::DuplicateName(_)
            | AppError::HasDependents(_)
            | AppError::CategoryNotFound(_)
            | AppError::InvalidStatus(_)
            | AppError::MalformedBody(_)
            | AppError::InvalidQuery(_) => StatusCode::BAD_REQUEST,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Caller-facing body. Internal failure text never leaves the process.
    pub fn envelope(&self) -> Envelope<()> {
        match self {
            AppError::ValidationFailed(violations) => {
                Envelope::failure(self.to_string(), violations.clone())
            }
            AppError::NotFound { resource, id } => Envelope::failure(
                self.to_string(),
                vec![format!("No {} with id {}", resource.to_lowercase(), id)],
            ),
            AppError::MalformedBody(reason) | AppError::InvalidQuery(reason) => {
                Envelope::failure(self.to_string(), vec![reason.clone()])
            }
            AppError::RouteNotFound => Envelope::failure(
                self.to_string(),
                vec!["The requested URL was not found on the server".to_string()],
            ),
            AppError::MethodNotAllowed => Envelope::failure(
                self.to_string(),
                vec!["The method is not allowed for the requested URL".to_string()],
            ),
            AppError::Unexpected(_) => {
                Envelope::failure("Internal server error", vec![GENERIC_FAILURE.to_string()])
            }
            AppError::DuplicateName(_)
            | AppError::HasDependents(_)
            | AppError::CategoryNotFound(_)
            | AppError::InvalidStatus(_) => {
                let message = self.to_string();
                Envelope::failure(message.clone(), vec![message])
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::Unexpected(ref err) = self {
            tracing::error!(error = ?err, "Unhandled error");
        }
        (self.status_code(), Json(self.envelope())).into_response()
    }
}
