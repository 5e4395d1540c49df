//! Catalog ingredient reference data.

use serde::{Deserialize, Serialize};

use frescipe_core::types::IngredientId;

use super::category::IngredientCategory;
use super::storage::StorageMethod;
use super::unit::MeasurementUnit;

/// Typical shelf life in days.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShelfLife {
    /// Days the ingredient keeps while sealed.
    pub unopened_days: Option<u32>,
    /// Days the ingredient keeps once opened.
    pub opened_days: Option<u32>,
}

/// Static reference data for one ingredient, owned by the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogIngredient {
    /// Ingredient ID.
    pub id: IngredientId,
    /// Display name.
    pub name: String,
    /// Catalog category.
    pub category: IngredientCategory,
    /// Recommended storage.
    pub storage_method: StorageMethod,
    /// Default unit for new fridge items.
    pub default_unit: MeasurementUnit,
    /// Units commonly used for this ingredient.
    pub common_units: Vec<MeasurementUnit>,
    /// Typical shelf life.
    #[serde(default)]
    pub shelf_life: ShelfLife,
}

impl CatalogIngredient {
    /// Whether `unit` is one of the ingredient's customary units.
    pub fn supports_unit(&self, unit: MeasurementUnit) -> bool {
        self.default_unit == unit || self.common_units.contains(&unit)
    }
}
