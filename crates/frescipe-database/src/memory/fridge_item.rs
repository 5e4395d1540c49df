//! In-memory fridge item store.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use frescipe_core::error::AppError;
use frescipe_core::result::AppResult;
use frescipe_core::types::{FridgeItemId, PageRequest, PageResponse, UserId};
use frescipe_entity::fridge::FridgeItem;

use crate::store::FridgeItemStore;

/// [`FridgeItemStore`] over a map guarded by a tokio `RwLock`.
///
/// The version compare and the write happen under one write guard, which
/// gives `update` the same conditional semantics as the SQL repository.
#[derive(Debug, Clone, Default)]
pub struct MemoryFridgeItemStore {
    items: Arc<RwLock<HashMap<FridgeItemId, FridgeItem>>>,
}

impl MemoryFridgeItemStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored items.
    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    /// Whether the store is empty.
    pub async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }

    async fn user_items(&self, user_id: UserId, include_consumed: bool) -> Vec<FridgeItem> {
        let items = self.items.read().await;
        let mut found: Vec<FridgeItem> = items
            .values()
            .filter(|i| i.user_id == user_id && (include_consumed || !i.is_consumed))
            .cloned()
            .collect();
        found.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(a.id.cmp(&b.id)));
        found
    }
}

#[async_trait]
impl FridgeItemStore for MemoryFridgeItemStore {
    async fn insert(&self, item: &FridgeItem) -> AppResult<FridgeItem> {
        let mut items = self.items.write().await;
        if items.contains_key(&item.id) {
            return Err(AppError::persistence_conflict(format!(
                "Fridge item {} already exists",
                item.id
            )));
        }
        items.insert(item.id, item.clone());
        Ok(item.clone())
    }

    async fn find_by_id(&self, id: FridgeItemId) -> AppResult<Option<FridgeItem>> {
        Ok(self.items.read().await.get(&id).cloned())
    }

    async fn find_by_user(
        &self,
        user_id: UserId,
        include_consumed: bool,
    ) -> AppResult<Vec<FridgeItem>> {
        Ok(self.user_items(user_id, include_consumed).await)
    }

    async fn list_by_user(
        &self,
        user_id: UserId,
        include_consumed: bool,
        page: PageRequest,
    ) -> AppResult<PageResponse<FridgeItem>> {
        Ok(page.slice(self.user_items(user_id, include_consumed).await))
    }

    async fn find_expiring(
        &self,
        user_id: UserId,
        from: DateTime<Utc>,
        until: DateTime<Utc>,
    ) -> AppResult<Vec<FridgeItem>> {
        let mut found: Vec<FridgeItem> = self
            .user_items(user_id, false)
            .await
            .into_iter()
            .filter(|i| i.expiry_date.is_some_and(|e| e >= from && e <= until))
            .collect();
        found.sort_by_key(|i| i.expiry_date);
        Ok(found)
    }

    async fn update(&self, item: &FridgeItem) -> AppResult<FridgeItem> {
        let mut items = self.items.write().await;
        let stored = items
            .get_mut(&item.id)
            .ok_or_else(|| AppError::not_found(format!("Fridge item {} not found", item.id)))?;

        if stored.version != item.version {
            return Err(AppError::persistence_conflict(format!(
                "Fridge item {} was modified concurrently (expected version {}, found {})",
                item.id, item.version, stored.version
            )));
        }

        let mut next = item.clone();
        next.version += 1;
        *stored = next.clone();
        Ok(next)
    }

    async fn delete(&self, id: FridgeItemId) -> AppResult<bool> {
        Ok(self.items.write().await.remove(&id).is_some())
    }
}
