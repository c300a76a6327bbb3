use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use super::protocol::ErrorResponse;
use super::types::ItemId;

/// Failures reported by [`ItemStore`](super::memory::ItemStore).
///
/// A missing handle is the only domain failure; it is an expected outcome, not a fault.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Item not found: {0}")]
    NotFound(ItemId),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Reasons a request body is not a usable item payload.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("request body is empty")]
    EmptyBody,

    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("expected a JSON object, found {0}")]
    NotAnObject(&'static str),

    #[error("field `{field}` must be a string, found {found}")]
    FieldType {
        field: &'static str,
        found: &'static str,
    },
}

/// Everything a handler can answer with besides success.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The path segment is not an integer.
    #[error("Invalid item ID")]
    InvalidId,

    /// The request body could not be decoded into an item payload.
    #[error("Invalid item payload: {0}")]
    InvalidBody(String),

    #[error("Item not found")]
    NotFound(ItemId),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidId | ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => ApiError::NotFound(id),
        }
    }
}

impl From<CodecError> for ApiError {
    fn from(err: CodecError) -> Self {
        ApiError::InvalidBody(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}
