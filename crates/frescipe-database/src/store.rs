//! Storage ports used by the fridge service.

use std::fmt::Debug;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use frescipe_core::result::AppResult;
use frescipe_core::types::{FridgeItemId, IngredientId, PageRequest, PageResponse, UserId};
use frescipe_entity::fridge::FridgeItem;
use frescipe_entity::ingredient::CatalogIngredient;

/// Persistence for fridge items.
///
/// `update` is a conditional write: it succeeds only when the stored
/// version equals `item.version`, increments the version, and returns the
/// stored row. A stale version fails with `PersistenceConflict` and leaves
/// the stored item untouched.
#[async_trait]
pub trait FridgeItemStore: Send + Sync + Debug + 'static {
    /// Insert a new item.
    async fn insert(&self, item: &FridgeItem) -> AppResult<FridgeItem>;

    /// Find an item by ID.
    async fn find_by_id(&self, id: FridgeItemId) -> AppResult<Option<FridgeItem>>;

    /// Every item of a user, optionally including consumed ones.
    async fn find_by_user(
        &self,
        user_id: UserId,
        include_consumed: bool,
    ) -> AppResult<Vec<FridgeItem>>;

    /// One page of a user's items, newest first.
    async fn list_by_user(
        &self,
        user_id: UserId,
        include_consumed: bool,
        page: PageRequest,
    ) -> AppResult<PageResponse<FridgeItem>>;

    /// Non-consumed items whose expiry falls in `[from, until]`, soonest first.
    async fn find_expiring(
        &self,
        user_id: UserId,
        from: DateTime<Utc>,
        until: DateTime<Utc>,
    ) -> AppResult<Vec<FridgeItem>>;

    /// Conditionally overwrite an item.
    async fn update(&self, item: &FridgeItem) -> AppResult<FridgeItem>;

    /// Delete an item. Returns whether a row was removed.
    async fn delete(&self, id: FridgeItemId) -> AppResult<bool>;
}

/// Read access to the ingredient catalog.
#[async_trait]
pub trait IngredientCatalog: Send + Sync + Debug + 'static {
    /// Look up one ingredient.
    async fn find(&self, id: IngredientId) -> AppResult<Option<CatalogIngredient>>;
}
