//! The one error type every handler returns, and its mapping onto HTTP.

use crate::category_actor::CategoryError;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error, PartialEq)]
pub enum ApiError {
    /// Malformed or constraint-violating input, including malformed ids.
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    /// The path exists but doesn't accept the request's method.
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// The store failed for reasons unrelated to the input.
    #[error("{0}")]
    Store(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            warn!(%status, error = %self, "Request failed");
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

impl From<CategoryError> for ApiError {
    fn from(e: CategoryError) -> Self {
        match e {
            CategoryError::NotFound | CategoryError::ProductNotFound => {
                ApiError::NotFound(e.to_string())
            }
            CategoryError::Validation(_) => ApiError::Validation(e.to_string()),
            CategoryError::Store(_) => ApiError::Store(e.to_string()),
        }
    }
}

/// Unparseable bodies, wrong JSON types and missing fields are all client errors.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_errors_map_onto_taxonomy() {
        let cases = [
            (CategoryError::NotFound, StatusCode::NOT_FOUND, "Category not found"),
            (CategoryError::ProductNotFound, StatusCode::NOT_FOUND, "Product not found"),
            (
                CategoryError::Validation("`name` is required".into()),
                StatusCode::BAD_REQUEST,
                "Category validation failed: `name` is required",
            ),
            (
                CategoryError::Store("closed".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
                "Category store error: closed",
            ),
        ];
        for (error, status, message) in cases {
            let api = ApiError::from(error);
            assert_eq!(api.status(), status);
            assert_eq!(api.to_string(), message);
        }
    }

    #[test]
    fn test_method_not_allowed_status() {
        assert_eq!(ApiError::MethodNotAllowed.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(ApiError::MethodNotAllowed.to_string(), "Method not allowed");
    }
}
