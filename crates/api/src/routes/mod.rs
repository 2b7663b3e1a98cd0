pub mod enroll;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /enroll      POST   record a beta enrollment
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(enroll::router())
}
