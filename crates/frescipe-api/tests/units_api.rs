//! HTTP tests for unit conversion and health.

mod helpers;

use axum::http::StatusCode;
use serde_json::json;

use helpers::TestApp;

#[tokio::test]
async fn test_convert_within_dimension() {
    let app = TestApp::new();
    let response = app
        .request(
            "POST",
            "/api/units/convert",
            Some(json!({ "amount": 1.5, "from": "kg", "to": "g" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);
    assert_eq!(response.body["data"]["result"], 1500.0);
}

#[tokio::test]
async fn test_convert_across_dimensions_is_unprocessable() {
    let app = TestApp::new();
    let response = app
        .request(
            "POST",
            "/api/units/convert",
            Some(json!({ "amount": 1.0, "from": "kg", "to": "ml" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response.body["error"], "UNIT_MISMATCH");
}

#[tokio::test]
async fn test_convert_unknown_unit_is_bad_request() {
    let app = TestApp::new();
    let response = app
        .request(
            "POST",
            "/api/units/convert",
            Some(json!({ "amount": 1.0, "from": "stone", "to": "g" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION");
}

#[tokio::test]
async fn test_health_reports_memory_backend() {
    let app = TestApp::new();
    let response = app.request_as("GET", "/api/health", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["status"], "ok");
    assert_eq!(response.body["data"]["database"], "memory");
}
