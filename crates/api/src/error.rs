use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use verity_core::error::CoreError;

use crate::response::ErrorResponse;
use crate::store::StoreError;

/// Message used when a failure carries no usable text of its own.
pub const FALLBACK_ERROR_MESSAGE: &str = "Identification failed";

/// Application-level error type for HTTP handlers.
///
/// Every variant renders the same `400 { "success": false, "error": ... }`
/// envelope; bad input and backend failures are not distinguished by status.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The body could not be read as the expected JSON object.
    #[error("Malformed request body: {0}")]
    MalformedBody(#[from] JsonRejection),

    /// The store refused or failed the insert.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// A domain-level error from `verity_core`.
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Text placed in the `error` field of the response.
    pub fn public_message(&self) -> String {
        let message = match self {
            AppError::MalformedBody(_) => String::new(),
            AppError::Store(err) => err.message(),
            AppError::Core(CoreError::Validation(msg)) => msg.clone(),
        };

        if message.trim().is_empty() {
            FALLBACK_ERROR_MESSAGE.to_string()
        } else {
            message
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = ErrorResponse::new(self.public_message());
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}
