//! Route definitions for enrollment.
//!
//! Mounted under `/api` by `api_routes()`.

use axum::extract::DefaultBodyLimit;
use axum::routing::post;
use axum::Router;

use crate::handlers::enroll;
use crate::state::AppState;

/// ```text
/// POST   /enroll            -> enroll
/// ```
///
/// Request bodies are not size-limited.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/enroll", post(enroll::enroll))
        .layer(DefaultBodyLimit::disable())
}
