//! Uniform success/error body returned by every endpoint.

use axum::{
    response::{IntoResponse, Response},
    Json,
};
use http::StatusCode;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<String>>,
}

impl Envelope<()> {
    pub fn failure(message: impl Into<String>, details: Vec<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
            details: Some(details),
        }
    }
}

/// A successful outcome paired with the status code it is answered with.
#[derive(Debug)]
pub struct ApiResponse<T> {
    status: StatusCode,
    envelope: Envelope<T>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(data: T, message: impl Into<String>) -> Self {
        Self::with_status(StatusCode::OK, data, message)
    }

    pub fn created(data: T, message: impl Into<String>) -> Self {
        Self::with_status(StatusCode::CREATED, data, message)
    }

    fn with_status(status: StatusCode, data: T, message: impl Into<String>) -> Self {
        Self {
            status,
            envelope: Envelope {
                success: true,
                message: message.into(),
                data: Some(data),
                details: None,
            },
        }
    }
}

impl ApiResponse<()> {
    pub fn no_content(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NO_CONTENT,
            envelope: Envelope {
                success: true,
                message: message.into(),
                data: None,
                details: None,
            },
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        // 204 must not carry a body
        if self.status == StatusCode::NO_CONTENT {
            tracing::debug!(message = %self.envelope.message, "No content");
            return self.status.into_response();
        }
        (self.status, Json(self.envelope)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use serde_json::{json, Value};

    async fn body_json(response: Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn created_carries_data_without_details() {
        let response = ApiResponse::created(json!({"id": 1}), "Category created").into_response();
        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(
            body_json(response).await,
            json!({"success": true, "message": "Category created", "data": {"id": 1}})
        );
    }

    #[tokio::test]
    async fn no_content_has_empty_body() {
        let response = ApiResponse::no_content("Product deleted").into_response();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert!(bytes.is_empty());
    }

    #[test]
    fn failure_serializes_details_and_omits_data() {
        let envelope = Envelope::failure("Invalid data", vec!["Name is required".into()]);
        assert_eq!(
            serde_json::to_value(&envelope).unwrap(),
            json!({"success": false, "message": "Invalid data", "details": ["Name is required"]})
        );
    }
}
