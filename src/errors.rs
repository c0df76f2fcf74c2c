use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::fmt;

use crate::store::StoreError;

pub const INVALID_RECEIPT_MESSAGE: &str = "The receipt is invalid.";
pub const NOT_FOUND_MESSAGE: &str = "No receipt found for that ID.";

/// Application-specific error types.
///
/// Field-level validation detail is never exposed to callers; every rejected
/// receipt gets the same message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// Request body could not be parsed, or the receipt failed validation.
    InvalidReceipt,
    /// No score is stored under the requested identifier.
    NotFound,
    /// Internal server error.
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::InvalidReceipt => write!(f, "{}", INVALID_RECEIPT_MESSAGE),
            AppError::NotFound => write!(f, "{}", NOT_FOUND_MESSAGE),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    /// Maps each error variant to an HTTP status code and a JSON `{"error": ...}` body.
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            AppError::InvalidReceipt => (StatusCode::BAD_REQUEST, INVALID_RECEIPT_MESSAGE),
            AppError::NotFound => (StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE),
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        AppError::Internal(err.to_string())
    }
}
