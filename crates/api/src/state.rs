use std::sync::Arc;

use crate::config::ServerConfig;
use crate::store::EnrollmentStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; handlers hold no other shared mutable state.
#[derive(Clone)]
pub struct AppState {
    /// Where enrollments are written.
    pub store: Arc<dyn EnrollmentStore>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
