//! HTTP-level integration tests for `POST /api/enroll`.
//!
//! Uses Axum's `tower::ServiceExt` to send requests directly to the router,
//! backed by the in-memory store or a store that always fails.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use common::{body_json, build_test_app, build_test_app_with, memory_app, post_json, post_raw, FailingStore};
use serde_json::json;

fn valid_payload() -> serde_json::Value {
    json!({
        "email": "a@b.com",
        "company": "Acme",
        "crm": "HubSpot",
        "dataPain": "silent_drift",
        "leadVolume": "<100",
        "commitment": true
    })
}

// ---------------------------------------------------------------------------
// Test: a valid payload is stored and acknowledged
// ---------------------------------------------------------------------------

#[tokio::test]
async fn valid_enrollment_returns_success_envelope() {
    let (app, store) = memory_app();
    let response = post_json(app, "/api/enroll", valid_payload()).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json, json!({ "success": true, "message": "Enrolled successfully" }));

    let records = store.records();
    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert_eq!(record.email.as_deref(), Some("a@b.com"));
    assert_eq!(record.data_pain.as_deref(), Some("silent_drift"));
    assert_eq!(record.lead_volume.as_deref(), Some("<100"));
    assert_eq!(record.commitment, Some(true));
}

// ---------------------------------------------------------------------------
// Test: created_at is stamped by the server at insert time
// ---------------------------------------------------------------------------

#[tokio::test]
async fn created_at_is_set_by_server() {
    let (app, store) = memory_app();
    let before = chrono::Utc::now();

    let mut payload = valid_payload();
    payload["created_at"] = json!("1999-01-01T00:00:00Z");
    let response = post_json(app, "/api/enroll", payload).await;
    assert_eq!(response.status(), StatusCode::OK);

    let after = chrono::Utc::now();
    let created_at = store.records()[0].created_at;
    assert!(created_at >= before && created_at <= after);
}

// ---------------------------------------------------------------------------
// Test: duplicates are not deduplicated
// ---------------------------------------------------------------------------

#[tokio::test]
async fn same_payload_twice_creates_two_records() {
    let (app, store) = memory_app();

    let first = post_json(app.clone(), "/api/enroll", valid_payload()).await;
    let second = post_json(app, "/api/enroll", valid_payload()).await;

    assert_eq!(first.status(), StatusCode::OK);
    assert_eq!(second.status(), StatusCode::OK);
    assert_eq!(store.len(), 2);
}

// ---------------------------------------------------------------------------
// Test: values outside the option sets are trusted by default
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unknown_option_values_are_stored_as_received() {
    let (app, store) = memory_app();
    let mut payload = valid_payload();
    payload["crm"] = json!("Notion");
    payload["commitment"] = json!(false);

    let response = post_json(app, "/api/enroll", payload).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(store.records()[0].crm.as_deref(), Some("Notion"));
}

// ---------------------------------------------------------------------------
// Test: both spellings of the middle lead volume are stored the same way
// ---------------------------------------------------------------------------

#[tokio::test]
async fn lead_volume_alias_is_stored_canonically() {
    let (app, store) = memory_app();

    for spelling in ["100–1,000", "100 – 1,000"] {
        let mut payload = valid_payload();
        payload["leadVolume"] = json!(spelling);
        let response = post_json(app.clone(), "/api/enroll", payload).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    let volumes: Vec<_> = store.records().into_iter().map(|r| r.lead_volume).collect();
    assert_eq!(volumes, vec![Some("100–1,000".to_string()), Some("100–1,000".to_string())]);
}

// ---------------------------------------------------------------------------
// Test: store failure message is surfaced verbatim
// ---------------------------------------------------------------------------

#[tokio::test]
async fn store_failure_returns_400_with_store_message() {
    let app = build_test_app(Arc::new(FailingStore::new("connection refused")));
    let response = post_json(app, "/api/enroll", valid_payload()).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json, json!({ "success": false, "error": "connection refused" }));
}

// ---------------------------------------------------------------------------
// Test: a store failure without text falls back to the generic message
// ---------------------------------------------------------------------------

#[tokio::test]
async fn empty_store_message_uses_fallback() {
    let app = build_test_app(Arc::new(FailingStore::new("")));
    let response = post_json(app, "/api/enroll", valid_payload()).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Identification failed");
}

// ---------------------------------------------------------------------------
// Test: malformed JSON returns the fallback message
// ---------------------------------------------------------------------------

#[tokio::test]
async fn malformed_json_returns_identification_failed() {
    let (app, store) = memory_app();
    let response = post_raw(app, "/api/enroll", "application/json", "{\"email\": ").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json, json!({ "success": false, "error": "Identification failed" }));
    assert!(store.is_empty());
}

// ---------------------------------------------------------------------------
// Test: a non-JSON content type is handled by the same path
// ---------------------------------------------------------------------------

#[tokio::test]
async fn missing_json_content_type_returns_identification_failed() {
    let (app, _store) = memory_app();
    let response = post_raw(app, "/api/enroll", "text/plain", valid_payload().to_string()).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], "Identification failed");
}

// ---------------------------------------------------------------------------
// Test: wrongly typed field fails JSON parsing
// ---------------------------------------------------------------------------

#[tokio::test]
async fn wrongly_typed_field_returns_identification_failed() {
    let (app, store) = memory_app();
    let mut payload = valid_payload();
    payload["commitment"] = json!("yes");

    let response = post_json(app, "/api/enroll", payload).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "Identification failed");
    assert!(store.is_empty());
}

// ---------------------------------------------------------------------------
// Test: a missing field is left for the store constraints to reject
// ---------------------------------------------------------------------------

#[tokio::test]
async fn missing_field_is_rejected_by_store_constraint() {
    let (app, store) = memory_app();
    let mut payload = valid_payload();
    payload.as_object_mut().unwrap().remove("company");

    let response = post_json(app, "/api/enroll", payload).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert!(
        json["error"].as_str().unwrap().contains("\"company\""),
        "error should name the column, got {json}"
    );
    assert!(store.is_empty());
}

// ---------------------------------------------------------------------------
// Test: strict validation re-checks the option sets
// ---------------------------------------------------------------------------

#[tokio::test]
async fn strict_validation_rejects_unknown_crm() {
    let store = Arc::new(verity_api::store::MemoryEnrollmentStore::new());
    let config = verity_api::config::ServerConfig {
        strict_validation: true,
        ..common::test_config()
    };
    let app = build_test_app_with(store.clone(), config);

    let mut payload = valid_payload();
    payload["crm"] = json!("Notion");
    let response = post_json(app.clone(), "/api/enroll", payload).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "Please select your current CRM.");
    assert!(store.is_empty());

    let response = post_json(app, "/api/enroll", valid_payload()).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(store.len(), 1);
}

// ---------------------------------------------------------------------------
// Test: GET on the enroll route is not allowed
// ---------------------------------------------------------------------------

#[tokio::test]
async fn get_enroll_is_method_not_allowed() {
    let (app, _store) = memory_app();
    let response = common::get(app, "/api/enroll").await;
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}
