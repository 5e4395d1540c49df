//! Catalog lookup cache backed by moka.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use moka::future::Cache;
use tracing::debug;

use frescipe_core::config::CatalogConfig;
use frescipe_core::result::AppResult;
use frescipe_core::types::IngredientId;
use frescipe_entity::ingredient::CatalogIngredient;

use crate::store::IngredientCatalog;

/// Wraps a catalog and caches successful lookups.
///
/// Misses and errors are not cached, so a newly added ingredient is
/// visible on the next lookup.
#[derive(Debug, Clone)]
pub struct CachedCatalog {
    inner: Arc<dyn IngredientCatalog>,
    cache: Cache<IngredientId, CatalogIngredient>,
}

impl CachedCatalog {
    /// Wrap `inner` with the capacity and TTL from configuration.
    pub fn new(inner: Arc<dyn IngredientCatalog>, config: &CatalogConfig) -> Self {
        let cache = Cache::builder()
            .max_capacity(config.cache_capacity)
            .time_to_live(Duration::from_secs(config.cache_ttl_seconds))
            .build();
        Self { inner, cache }
    }

    /// Drop one cached entry.
    pub async fn invalidate(&self, id: IngredientId) {
        self.cache.invalidate(&id).await;
    }
}

#[async_trait]
impl IngredientCatalog for CachedCatalog {
    async fn find(&self, id: IngredientId) -> AppResult<Option<CatalogIngredient>> {
        if let Some(hit) = self.cache.get(&id).await {
            return Ok(Some(hit));
        }

        let found = self.inner.find(id).await?;
        if let Some(ingredient) = &found {
            debug!(ingredient_id = %id, "Caching catalog entry");
            self.cache.insert(id, ingredient.clone()).await;
        }
        Ok(found)
    }
}
