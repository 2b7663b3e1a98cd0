#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{HeaderValue, Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use verity_api::config::ServerConfig;
use verity_api::router::build_app_router;
use verity_api::state::AppState;
use verity_api::store::{EnrollmentStore, MemoryEnrollmentStore, StoreError};
use verity_db::models::enrollment::NewEnrollment;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec![HeaderValue::from_static("http://localhost:3000")],
        database_url: None,
        strict_validation: false,
    }
}

/// Build the full application router around the given store.
pub fn build_test_app(store: Arc<dyn EnrollmentStore>) -> Router {
    build_test_app_with(store, test_config())
}

pub fn build_test_app_with(store: Arc<dyn EnrollmentStore>, config: ServerConfig) -> Router {
    let state = AppState {
        store,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Router backed by a fresh in-memory store, returned alongside the store.
pub fn memory_app() -> (Router, Arc<MemoryEnrollmentStore>) {
    let store = Arc::new(MemoryEnrollmentStore::new());
    (build_test_app(store.clone()), store)
}

/// Store whose every operation fails with a fixed message.
pub struct FailingStore {
    pub message: String,
}

impl FailingStore {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

#[async_trait]
impl EnrollmentStore for FailingStore {
    async fn insert(&self, _record: &NewEnrollment) -> Result<(), StoreError> {
        Err(StoreError::Rejected(self.message.clone()))
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Err(StoreError::Rejected(self.message.clone()))
    }
}

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    post_raw(app, uri, "application/json", body.to_string()).await
}

pub async fn post_raw(app: Router, uri: &str, content_type: &str, body: impl Into<String>) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", content_type)
        .body(Body::from(body.into()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
