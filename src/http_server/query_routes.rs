//! Query HTTP Routes
//!
//! `POST /query`, `POST /explain` and `POST /validate`, all behind the
//! shared-secret guard. The guard runs as route middleware, so a bad
//! credential is answered with 401 before the body is looked at.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, Request, State},
    http::header::AUTHORIZATION,
    middleware::{self, Next},
    response::Response,
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::auth::AccessGuard;
use crate::intent::{Explanation, QueryEngine, QueryOutcome};

use super::errors::{ApiError, ApiResult};

/// Guarded query routes with shared state
pub fn query_routes(engine: Arc<QueryEngine>, guard: Arc<AccessGuard>) -> Router {
    Router::new()
        .route("/query", post(query_handler))
        .route("/explain", post(explain_handler))
        .route("/validate", post(validate_handler))
        .route_layer(middleware::from_fn_with_state(guard, require_shared_secret))
        .with_state(engine)
}

// ==================
// Request/Response Types
// ==================

/// Body accepted by every query route
#[derive(Debug, Clone, Deserialize)]
pub struct QueryRequest {
    pub query: String,
}

impl QueryRequest {
    /// Any parse failure, including a non-string `query`, is a missing field
    pub fn from_body(body: &[u8]) -> ApiResult<Self> {
        serde_json::from_slice(body).map_err(|_| ApiError::MissingField)
    }

    /// Parse an extracted body. A body that could not be buffered, such as
    /// one over axum's default size limit, is reported like any other
    /// unreadable body.
    pub fn from_extracted(body: Result<Bytes, BytesRejection>) -> ApiResult<Self> {
        let body = body.map_err(|_| ApiError::MissingField)?;
        Self::from_body(&body)
    }
}

#[derive(Debug, Serialize)]
pub struct ValidResponse {
    pub valid: bool,
    pub message: String,
}

// ==================
// Middleware
// ==================

async fn require_shared_secret(
    State(guard): State<Arc<AccessGuard>>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let presented = request
        .headers()
        .get(AUTHORIZATION)
        .map(|value| value.as_bytes());
    guard.authorize(presented)?;

    Ok(next.run(request).await)
}

// ==================
// Handlers
// ==================

/// Translate and return matching records
async fn query_handler(
    State(engine): State<Arc<QueryEngine>>,
    body: Result<Bytes, BytesRejection>,
) -> ApiResult<Json<QueryOutcome>> {
    let request = QueryRequest::from_extracted(body)?;
    Ok(Json(engine.query(&request.query)))
}

/// Explain how a query was interpreted
async fn explain_handler(
    State(engine): State<Arc<QueryEngine>>,
    body: Result<Bytes, BytesRejection>,
) -> ApiResult<Json<Explanation>> {
    let request = QueryRequest::from_extracted(body)?;
    Ok(Json(engine.explain(&request.query)))
}

/// Check feasibility; an infeasible query is a 400
async fn validate_handler(
    State(engine): State<Arc<QueryEngine>>,
    body: Result<Bytes, BytesRejection>,
) -> ApiResult<Json<ValidResponse>> {
    let request = QueryRequest::from_extracted(body)?;
    let validation = engine.validate(&request.query);

    if validation.valid {
        Ok(Json(ValidResponse {
            valid: true,
            message: validation.detail,
        }))
    } else {
        Err(ApiError::InvalidQuery(validation.detail))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_parsing() {
        let request = QueryRequest::from_body(br#"{"query": "sales", "extra": 1}"#).unwrap();
        assert_eq!(request.query, "sales");
    }

    #[test]
    fn test_request_without_query_is_missing_field() {
        let bodies: [&[u8]; 6] = [
            b"",
            b"{}",
            b"not json",
            b"[]",
            br#"{"query": null}"#,
            br#"{"query": 3}"#,
        ];
        for body in bodies {
            assert_eq!(
                QueryRequest::from_body(body).unwrap_err(),
                ApiError::MissingField
            );
        }
    }

    #[test]
    fn test_empty_query_string_is_accepted() {
        assert_eq!(QueryRequest::from_body(br#"{"query": ""}"#).unwrap().query, "");
    }
}
