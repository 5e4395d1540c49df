//! Ingredient catalog repository implementation.

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

use frescipe_core::error::{AppError, ErrorKind};
use frescipe_core::result::AppResult;
use frescipe_core::types::IngredientId;
use frescipe_entity::ingredient::{CatalogIngredient, MeasurementUnit, ShelfLife};

use crate::store::IngredientCatalog;

#[derive(Debug, FromRow)]
struct IngredientRow {
    id: IngredientId,
    name: String,
    category: String,
    storage_method: String,
    default_unit: String,
    common_units: Vec<String>,
    shelf_life_unopened_days: Option<i32>,
    shelf_life_opened_days: Option<i32>,
}

impl TryFrom<IngredientRow> for CatalogIngredient {
    type Error = AppError;

    fn try_from(row: IngredientRow) -> Result<Self, Self::Error> {
        let common_units = row
            .common_units
            .iter()
            .map(|u| u.parse::<MeasurementUnit>())
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            id: row.id,
            name: row.name,
            category: row.category.parse()?,
            storage_method: row.storage_method.parse()?,
            default_unit: row.default_unit.parse()?,
            common_units,
            shelf_life: ShelfLife {
                unopened_days: row.shelf_life_unopened_days.and_then(|d| u32::try_from(d).ok()),
                opened_days: row.shelf_life_opened_days.and_then(|d| u32::try_from(d).ok()),
            },
        })
    }
}

/// PostgreSQL-backed [`IngredientCatalog`].
#[derive(Debug, Clone)]
pub struct IngredientRepository {
    pool: PgPool,
}

impl IngredientRepository {
    /// Create a new ingredient repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl IngredientCatalog for IngredientRepository {
    async fn find(&self, id: IngredientId) -> AppResult<Option<CatalogIngredient>> {
        sqlx::query_as::<_, IngredientRow>(
            "SELECT id, name, category, storage_method, default_unit, common_units, \
             shelf_life_unopened_days, shelf_life_opened_days FROM ingredients WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find ingredient", e))?
        .map(CatalogIngredient::try_from)
        .transpose()
    }
}
