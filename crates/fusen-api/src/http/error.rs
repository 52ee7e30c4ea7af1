use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;
use thiserror::Error;

use fusen_core::domain::FusenError;

/// Error surfaced over HTTP.
///
/// The domain knows exactly one failure kind, so this maps 1:1 to a 400.
/// Malformed bodies and unknown routes never reach here; axum rejects them
/// before a handler runs.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
}

impl From<FusenError> for ApiError {
    fn from(err: FusenError) -> Self {
        match err {
            FusenError::InvalidInput(message) => Self::BadRequest(message),
        }
    }
}

/// Wire shape of a failure body: exactly `{"error": "..."}`.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(message) => {
                (StatusCode::BAD_REQUEST, Json(ErrorBody { error: message })).into_response()
            }
        }
    }
}
