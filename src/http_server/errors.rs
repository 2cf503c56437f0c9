//! # API Errors
//!
//! Errors returned at the request boundary. Each one maps to a status code
//! and a fixed JSON payload; none escape the handler.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::auth::AuthError;

/// Result type for request handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// Request-boundary errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Missing or incorrect credential
    #[error("Unauthorized")]
    Unauthorized,

    /// `query` absent, not a string, or the body is not JSON
    #[error("Missing 'query' parameter")]
    MissingField,

    /// Query rejected by the validator
    #[error("{0}")]
    InvalidQuery(String),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::MissingField => StatusCode::BAD_REQUEST,
            ApiError::InvalidQuery(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(_: AuthError) -> Self {
        ApiError::Unauthorized
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Body of a failed validation
#[derive(Debug, Serialize)]
pub struct InvalidQueryResponse {
    pub valid: bool,
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self {
            ApiError::InvalidQuery(reason) => (
                status,
                Json(InvalidQueryResponse {
                    valid: false,
                    error: reason,
                }),
            )
                .into_response(),
            other => (
                status,
                Json(ErrorResponse {
                    error: other.to_string(),
                }),
            )
                .into_response(),
        }
    }
}
