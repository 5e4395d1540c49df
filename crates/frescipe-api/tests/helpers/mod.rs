//! Shared helpers for API tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use chrono::{DateTime, Duration, TimeZone, Utc};
use serde_json::Value;
use tower::ServiceExt;

use frescipe_api::{build_app, build_state};
use frescipe_core::config::AppConfig;
use frescipe_core::traits::{FixedClock, NoopPublisher};
use frescipe_core::types::{IngredientId, UserId};
use frescipe_database::{MemoryFridgeItemStore, MemoryIngredientCatalog};

/// Response status plus parsed JSON body.
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

/// Router over in-memory stores with a controllable clock.
pub struct TestApp {
    pub router: Router,
    pub clock: Arc<FixedClock>,
    pub catalog: MemoryIngredientCatalog,
    pub user: UserId,
}

pub fn start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 4, 15, 18, 0, 0).unwrap()
}

impl TestApp {
    pub fn new() -> Self {
        let config: AppConfig = serde_json::from_value(serde_json::json!({
            "database": { "url": "postgres://unused/frescipe" }
        }))
        .expect("test config");

        let clock = Arc::new(FixedClock::new(start()));
        let catalog = MemoryIngredientCatalog::new();
        let state = build_state(
            config,
            Arc::new(MemoryFridgeItemStore::new()),
            Arc::new(catalog.clone()),
            Arc::new(NoopPublisher),
            clock.clone(),
            None,
        );

        Self {
            router: build_app(state),
            clock,
            catalog,
            user: UserId::new(),
        }
    }

    /// Request as the default test user.
    pub async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        self.request_as(method, path, body, Some(self.user)).await
    }

    /// Request as `user`, or anonymously.
    pub async fn request_as(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        user: Option<UserId>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(path);
        if let Some(user) = user {
            builder = builder.header("x-user-id", user.to_string());
        }
        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_vec(&json).unwrap()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        TestResponse { status, body }
    }

    /// Create an item expiring `expires_in_days` from the start instant.
    pub async fn create_item(
        &self,
        ingredient_id: IngredientId,
        name: &str,
        quantity: f64,
        unit: &str,
        expires_in_days: Option<i64>,
    ) -> Value {
        let mut body = serde_json::json!({
            "ingredient_id": ingredient_id,
            "ingredient_name": name,
            "quantity": quantity,
            "unit": unit,
            "storage_method": "refrigerated",
        });
        if let Some(days) = expires_in_days {
            body["expiry_date"] = serde_json::json!(start() + Duration::days(days));
        }

        let response = self.request("POST", "/api/fridge/items", Some(body)).await;
        assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
        response.body["data"].clone()
    }
}

/// The `id` of an item payload.
pub fn item_id(item: &Value) -> String {
    item["id"].as_str().expect("item id").to_string()
}
