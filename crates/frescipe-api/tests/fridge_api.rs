//! HTTP tests for the fridge endpoints.

mod helpers;

use axum::http::StatusCode;
use chrono::{DateTime, Duration, Utc};
use serde_json::json;

use frescipe_core::types::{IngredientId, UserId};
use frescipe_entity::ingredient::{
    CatalogIngredient, IngredientCategory, MeasurementUnit, ShelfLife, StorageMethod,
};

use helpers::{TestApp, item_id, start};

#[tokio::test]
async fn test_create_item_starts_fresh() {
    let app = TestApp::new();
    let item = app
        .create_item(IngredientId::new(), "Milk", 1000.0, "ml", Some(10))
        .await;

    assert_eq!(item["freshness_score"], 100);
    assert_eq!(item["freshness_status"], "excellent");
    assert_eq!(item["original_quantity"], 1000.0);
    assert_eq!(item["days_until_expiry"], 10);
    assert_eq!(item["is_expiring_soon"], false);
    assert_eq!(item["is_opened"], false);
    assert_eq!(item["notifications"]["reminder_days"], 3);
}

#[tokio::test]
async fn test_create_rejects_negative_quantity() {
    let app = TestApp::new();
    let response = app
        .request(
            "POST",
            "/api/fridge/items",
            Some(json!({
                "ingredient_id": IngredientId::new(),
                "ingredient_name": "Eggs",
                "quantity": -1.0,
                "unit": "piece",
                "storage_method": "refrigerated",
            })),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION");
}

#[tokio::test]
async fn test_missing_user_header_is_unauthorized() {
    let app = TestApp::new();
    let response = app
        .request_as("GET", "/api/fridge/items", None, None)
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "UNAUTHORIZED");
}

#[tokio::test]
async fn test_invalid_item_id_is_bad_request() {
    let app = TestApp::new();
    let response = app.request("GET", "/api/fridge/items/not-a-uuid", None).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION");
}

#[tokio::test]
async fn test_other_users_item_is_not_found() {
    let app = TestApp::new();
    let item = app
        .create_item(IngredientId::new(), "Cheese", 200.0, "g", None)
        .await;

    let path = format!("/api/fridge/items/{}", item_id(&item));
    let response = app
        .request_as("GET", &path, None, Some(UserId::new()))
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["error"], "NOT_FOUND");
}

#[tokio::test]
async fn test_use_item_rejections() {
    let app = TestApp::new();
    let item = app
        .create_item(IngredientId::new(), "Milk", 1000.0, "ml", Some(10))
        .await;
    let path = format!("/api/fridge/items/{}/use", item_id(&item));

    let wrong_unit = app
        .request("POST", &path, Some(json!({ "amount": 100.0, "unit": "g" })))
        .await;
    assert_eq!(wrong_unit.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(wrong_unit.body["error"], "UNIT_MISMATCH");

    let too_much = app
        .request("POST", &path, Some(json!({ "amount": 2000.0, "unit": "ml" })))
        .await;
    assert_eq!(too_much.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(too_much.body["error"], "INSUFFICIENT_QUANTITY");

    let zero = app
        .request("POST", &path, Some(json!({ "amount": 0.0, "unit": "ml" })))
        .await;
    assert_eq!(zero.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_use_item_records_history() {
    let app = TestApp::new();
    let item = app
        .create_item(IngredientId::new(), "Milk", 1000.0, "ml", Some(10))
        .await;
    let path = format!("/api/fridge/items/{}/use", item_id(&item));

    let response = app
        .request(
            "POST",
            &path,
            Some(json!({
                "amount": 250.0,
                "unit": "ml",
                "recipe_name": "Pancakes",
            })),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    let data = &response.body["data"];
    assert_eq!(data["quantity"], 750.0);
    assert_eq!(data["usage_percentage"], 25.0);
    assert_eq!(data["usage_history"].as_array().unwrap().len(), 1);
    assert_eq!(data["usage_history"][0]["recipe_name"], "Pancakes");
    assert_eq!(data["is_consumed"], false);
}

#[tokio::test]
async fn test_using_everything_consumes_item() {
    let app = TestApp::new();
    let item = app
        .create_item(IngredientId::new(), "Tofu", 300.0, "g", None)
        .await;
    let path = format!("/api/fridge/items/{}/use", item_id(&item));

    let response = app
        .request("POST", &path, Some(json!({ "amount": 300.0, "unit": "g" })))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["quantity"], 0.0);
    assert_eq!(response.body["data"]["is_consumed"], true);

    let listed = app.request("GET", "/api/fridge/items", None).await;
    assert_eq!(listed.body["data"]["total_items"], 0);

    let all = app
        .request("GET", "/api/fridge/items?include_consumed=true", None)
        .await;
    assert_eq!(all.body["data"]["total_items"], 1);
}

#[tokio::test]
async fn test_open_then_refresh_applies_penalty() {
    let app = TestApp::new();
    let item = app
        .create_item(IngredientId::new(), "Cream", 200.0, "ml", Some(10))
        .await;
    let id = item_id(&item);

    let opened = app
        .request("POST", &format!("/api/fridge/items/{id}/open"), None)
        .await;
    assert_eq!(opened.status, StatusCode::OK);
    assert_eq!(opened.body["data"]["is_opened"], true);
    assert!(opened.body["data"]["estimated_expiry_date"].is_null());

    app.clock.advance(Duration::days(2));

    let refreshed = app
        .request("POST", &format!("/api/fridge/items/{id}/refresh"), None)
        .await;
    assert_eq!(refreshed.status, StatusCode::OK);
    assert_eq!(refreshed.body["data"]["freshness_score"], 70);
    assert_eq!(refreshed.body["data"]["freshness_status"], "good");
}

#[tokio::test]
async fn test_open_without_expiry_estimates_from_opening() {
    let app = TestApp::new();
    let item = app
        .create_item(IngredientId::new(), "Yogurt", 500.0, "g", None)
        .await;
    let id = item_id(&item);

    let opened = app
        .request("POST", &format!("/api/fridge/items/{id}/open"), None)
        .await;
    assert_eq!(opened.status, StatusCode::OK);
    assert!(opened.body["data"]["expiry_date"].is_null());
    let estimate: DateTime<Utc> =
        serde_json::from_value(opened.body["data"]["estimated_expiry_date"].clone()).unwrap();
    assert_eq!(estimate, start() + Duration::days(7));
}

#[tokio::test]
async fn test_consume_and_delete() {
    let app = TestApp::new();
    let item = app
        .create_item(IngredientId::new(), "Bread", 1.0, "package", None)
        .await;
    let id = item_id(&item);

    let consumed = app
        .request("POST", &format!("/api/fridge/items/{id}/consume"), None)
        .await;
    assert_eq!(consumed.status, StatusCode::OK);
    assert_eq!(consumed.body["data"]["is_consumed"], true);
    assert_eq!(consumed.body["data"]["quantity"], 0.0);

    let deleted = app
        .request("DELETE", &format!("/api/fridge/items/{id}"), None)
        .await;
    assert_eq!(deleted.status, StatusCode::OK);

    let gone = app
        .request("GET", &format!("/api/fridge/items/{id}"), None)
        .await;
    assert_eq!(gone.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_check_stamps_last_checked() {
    let app = TestApp::new();
    let item = app
        .create_item(IngredientId::new(), "Kimchi", 500.0, "g", None)
        .await;
    assert!(item["last_checked_at"].is_null());

    let checked = app
        .request(
            "POST",
            &format!("/api/fridge/items/{}/check", item_id(&item)),
            None,
        )
        .await;
    assert_eq!(checked.status, StatusCode::OK);
    assert!(checked.body["data"]["last_checked_at"].is_string());
}

#[tokio::test]
async fn test_expiring_window() {
    let app = TestApp::new();
    app.create_item(IngredientId::new(), "Yoghurt", 500.0, "g", Some(2))
        .await;
    app.create_item(IngredientId::new(), "Milk", 1000.0, "ml", Some(10))
        .await;

    let soon = app.request("GET", "/api/fridge/expiring?days=3", None).await;
    assert_eq!(soon.status, StatusCode::OK);
    let items = soon.body["data"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["ingredient_name"], "Yoghurt");

    let wide = app.request("GET", "/api/fridge/expiring?days=30", None).await;
    assert_eq!(wide.body["data"].as_array().unwrap().len(), 2);

    let too_wide = app
        .request("GET", "/api/fridge/expiring?days=400", None)
        .await;
    assert_eq!(too_wide.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_summary_and_categories() {
    let app = TestApp::new();
    let dairy = IngredientId::new();
    app.catalog
        .insert(CatalogIngredient {
            id: dairy,
            name: "Milk".into(),
            category: IngredientCategory::Dairy,
            storage_method: StorageMethod::Refrigerated,
            default_unit: MeasurementUnit::Milliliter,
            common_units: vec![MeasurementUnit::Milliliter, MeasurementUnit::Liter],
            shelf_life: ShelfLife::default(),
        })
        .await;

    app.create_item(dairy, "Milk", 1000.0, "ml", Some(2)).await;
    app.create_item(IngredientId::new(), "Mystery", 1.0, "piece", None)
        .await;

    let summary = app.request("GET", "/api/fridge/summary", None).await;
    assert_eq!(summary.status, StatusCode::OK);
    let data = &summary.body["data"];
    assert_eq!(data["total_items"], 2);
    assert_eq!(data["expiring_soon_count"], 1);
    assert_eq!(data["categories"]["dairy"], 1);
    assert_eq!(data["unresolved_items"], 1);

    let groups = app
        .request("GET", "/api/fridge/categories?category=dairy", None)
        .await;
    assert_eq!(groups.status, StatusCode::OK);
    let groups = groups.body["data"].as_array().unwrap();
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0]["category"], "dairy");
    assert_eq!(groups[0]["count"], 1);
}

#[tokio::test]
async fn test_pending_alerts() {
    let app = TestApp::new();
    app.create_item(IngredientId::new(), "Yoghurt", 500.0, "g", Some(2))
        .await;
    app.create_item(IngredientId::new(), "Rice", 5.0, "kg", None)
        .await;

    let response = app.request("GET", "/api/fridge/alerts", None).await;
    assert_eq!(response.status, StatusCode::OK);
    let alerts = response.body["data"].as_array().unwrap();
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0]["type"], "ExpiringSoon");
    assert_eq!(alerts[0]["days_until_expiry"], 2);
}
