//! Fridge item handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use frescipe_core::events::AlertEvent;
use frescipe_core::types::PageResponse;
use frescipe_entity::fridge::{CreateFridgeItem, FridgeItem, UseIngredient};
use frescipe_entity::summary::{CategoryGroup, FridgeSummary};

use crate::dto::request::{CategoryParams, ExpiringParams};
use crate::dto::response::{ApiResponse, FridgeItemResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::{ApiQuery, CurrentUser, ListItemsParams, ValidatedJson, parse_item_id};
use crate::state::AppState;

type ItemResult = Result<Json<ApiResponse<FridgeItemResponse>>, ApiError>;

fn respond(state: &AppState, item: FridgeItem) -> ItemResult {
    Ok(Json(ApiResponse::ok(FridgeItemResponse::at(
        item,
        state.clock.now(),
    ))))
}

/// POST /api/fridge/items
pub async fn create_item(
    State(state): State<AppState>,
    user: CurrentUser,
    ValidatedJson(req): ValidatedJson<CreateFridgeItem>,
) -> Result<(StatusCode, Json<ApiResponse<FridgeItemResponse>>), ApiError> {
    let item = state.fridge.create_item(user.context(), req).await?;
    let body = FridgeItemResponse::at(item, state.clock.now());
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(body))))
}

/// GET /api/fridge/items
pub async fn list_items(
    State(state): State<AppState>,
    user: CurrentUser,
    ApiQuery(params): ApiQuery<ListItemsParams>,
) -> Result<Json<ApiResponse<PageResponse<FridgeItemResponse>>>, ApiError> {
    let page = state
        .fridge
        .list_items(user.context(), params.include_consumed, params.page_request())
        .await?;
    Ok(Json(ApiResponse::ok(FridgeItemResponse::page(
        page,
        state.clock.now(),
    ))))
}

/// GET /api/fridge/items/{id}
pub async fn get_item(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<String>,
) -> ItemResult {
    let id = parse_item_id(&id)?;
    let item = state.fridge.get_item(user.context(), id).await?;
    respond(&state, item)
}

/// DELETE /api/fridge/items/{id}
pub async fn delete_item(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    let id = parse_item_id(&id)?;
    state.fridge.delete_item(user.context(), id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new(
        "Fridge item deleted",
    ))))
}

/// POST /api/fridge/items/{id}/use
pub async fn use_item(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<String>,
    ValidatedJson(req): ValidatedJson<UseIngredient>,
) -> ItemResult {
    let id = parse_item_id(&id)?;
    let item = state.fridge.use_item(user.context(), id, req).await?;
    respond(&state, item)
}

/// POST /api/fridge/items/{id}/open
pub async fn open_item(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<String>,
) -> ItemResult {
    let id = parse_item_id(&id)?;
    let item = state.fridge.open_item(user.context(), id).await?;
    respond(&state, item)
}

/// POST /api/fridge/items/{id}/consume
pub async fn consume_item(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<String>,
) -> ItemResult {
    let id = parse_item_id(&id)?;
    let item = state.fridge.consume_item(user.context(), id).await?;
    respond(&state, item)
}

/// POST /api/fridge/items/{id}/check
pub async fn mark_checked(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<String>,
) -> ItemResult {
    let id = parse_item_id(&id)?;
    let item = state.fridge.mark_checked(user.context(), id).await?;
    respond(&state, item)
}

/// POST /api/fridge/items/{id}/refresh
pub async fn refresh_freshness(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<String>,
) -> ItemResult {
    let id = parse_item_id(&id)?;
    let item = state.fridge.refresh_freshness(user.context(), id).await?;
    respond(&state, item)
}

/// GET /api/fridge/summary
pub async fn summary(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<Json<ApiResponse<FridgeSummary>>, ApiError> {
    let summary = state.fridge.summary(user.context()).await?;
    Ok(Json(ApiResponse::ok(summary)))
}

/// GET /api/fridge/expiring
pub async fn expiring_items(
    State(state): State<AppState>,
    user: CurrentUser,
    ApiQuery(params): ApiQuery<ExpiringParams>,
) -> Result<Json<ApiResponse<Vec<FridgeItemResponse>>>, ApiError> {
    let items = state
        .fridge
        .expiring_items(user.context(), params.days, params.refresh)
        .await?;
    let now = state.clock.now();
    Ok(Json(ApiResponse::ok(
        items
            .into_iter()
            .map(|item| FridgeItemResponse::at(item, now))
            .collect(),
    )))
}

/// GET /api/fridge/categories
pub async fn items_by_category(
    State(state): State<AppState>,
    user: CurrentUser,
    ApiQuery(params): ApiQuery<CategoryParams>,
) -> Result<Json<ApiResponse<Vec<CategoryGroup>>>, ApiError> {
    let groups = state
        .fridge
        .items_by_category(user.context(), params.category)
        .await?;
    Ok(Json(ApiResponse::ok(groups)))
}

/// GET /api/fridge/alerts
pub async fn pending_alerts(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<Json<ApiResponse<Vec<AlertEvent>>>, ApiError> {
    let alerts = state.fridge.pending_alerts(user.context()).await?;
    Ok(Json(ApiResponse::ok(alerts)))
}
