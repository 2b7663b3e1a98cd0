//! Response envelopes for the enrollment endpoint.
//!
//! Every response carries a `success` flag. Successful writes add a
//! `message`; failures add an `error` (see [`crate::error::AppError`]).

use serde::{Deserialize, Serialize};

/// Message returned after a successful insert.
pub const ENROLLED_MESSAGE: &str = "Enrolled successfully";

/// `{ "success": true, "message": ... }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuccessResponse {
    pub success: bool,
    pub message: String,
}

impl SuccessResponse {
    pub fn enrolled() -> Self {
        Self {
            success: true,
            message: ENROLLED_MESSAGE.to_string(),
        }
    }
}

/// `{ "success": false, "error": ... }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}
