//! Error types for the directory service
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Service Error Enum ==
/// Unified error type for the directory service.
///
/// Cache-internal conditions (miss, expiry, capacity rejection) are never
/// surfaced as errors; only loader failures and contract violations propagate.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Empty cache key supplied to a cache operation (contract violation)
    #[error("Invalid cache key: {0}")]
    InvalidKey(String),

    /// The backing-source loader failed; nothing was cached
    #[error("Load from backing source failed: {0}")]
    LoaderFailed(String),

    /// Requested record does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ServiceError::InvalidKey(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ServiceError::LoaderFailed(msg) => (StatusCode::BAD_GATEWAY, msg.clone()),
            ServiceError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            ServiceError::InvalidRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the directory service.
pub type Result<T> = std::result::Result<T, ServiceError>;
