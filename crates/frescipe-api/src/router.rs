//! Route definitions for the Frescipe HTTP API.
//!
//! All routes are mounted under `/api`. Handlers receive `AppState`
//! through Axum's `State` extractor.

use std::time::Duration;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{get, post},
};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let server = &state.config.server;
    let max_body = server.max_body_bytes;
    let timeout = Duration::from_secs(server.request_timeout_seconds);

    let api_routes = Router::new()
        .merge(fridge_routes())
        .merge(unit_routes())
        .merge(health_routes());

    Router::new()
        .nest("/api", api_routes)
        .layer(DefaultBodyLimit::max(max_body))
        .layer(TimeoutLayer::new(timeout))
        .layer(middleware::compression::build_compression_layer())
        .layer(middleware::cors::build_cors_layer(&server.cors))
        .layer(TraceLayer::new_for_http())
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// Item lifecycle and read-side views.
fn fridge_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/fridge/items",
            get(handlers::fridge::list_items).post(handlers::fridge::create_item),
        )
        .route(
            "/fridge/items/{id}",
            get(handlers::fridge::get_item).delete(handlers::fridge::delete_item),
        )
        .route("/fridge/items/{id}/use", post(handlers::fridge::use_item))
        .route("/fridge/items/{id}/open", post(handlers::fridge::open_item))
        .route(
            "/fridge/items/{id}/consume",
            post(handlers::fridge::consume_item),
        )
        .route(
            "/fridge/items/{id}/check",
            post(handlers::fridge::mark_checked),
        )
        .route(
            "/fridge/items/{id}/refresh",
            post(handlers::fridge::refresh_freshness),
        )
        .route("/fridge/summary", get(handlers::fridge::summary))
        .route("/fridge/expiring", get(handlers::fridge::expiring_items))
        .route("/fridge/categories", get(handlers::fridge::items_by_category))
        .route("/fridge/alerts", get(handlers::fridge::pending_alerts))
}

fn unit_routes() -> Router<AppState> {
    Router::new().route("/units/convert", post(handlers::units::convert_units))
}

fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
