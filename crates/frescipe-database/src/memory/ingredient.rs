//! In-memory ingredient catalog.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use frescipe_core::result::AppResult;
use frescipe_core::types::IngredientId;
use frescipe_entity::ingredient::CatalogIngredient;

use crate::store::IngredientCatalog;

/// [`IngredientCatalog`] backed by a map.
#[derive(Debug, Clone, Default)]
pub struct MemoryIngredientCatalog {
    entries: Arc<RwLock<HashMap<IngredientId, CatalogIngredient>>>,
}

impl MemoryIngredientCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog holding `ingredients`.
    pub fn with_ingredients(ingredients: impl IntoIterator<Item = CatalogIngredient>) -> Self {
        let entries = ingredients.into_iter().map(|i| (i.id, i)).collect();
        Self {
            entries: Arc::new(RwLock::new(entries)),
        }
    }

    /// Add or replace an entry.
    pub async fn insert(&self, ingredient: CatalogIngredient) {
        self.entries.write().await.insert(ingredient.id, ingredient);
    }
}

#[async_trait]
impl IngredientCatalog for MemoryIngredientCatalog {
    async fn find(&self, id: IngredientId) -> AppResult<Option<CatalogIngredient>> {
        Ok(self.entries.read().await.get(&id).cloned())
    }
}
