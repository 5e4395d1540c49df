//! Request DTOs not already covered by entity input types.

use serde::{Deserialize, Serialize};
use validator::Validate;

use frescipe_entity::ingredient::{IngredientCategory, MeasurementUnit};

/// `POST /api/units/convert`
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ConvertRequest {
    /// Amount in `from` units.
    #[validate(range(min = 0.0, message = "amount must not be negative"))]
    pub amount: f64,
    /// Source unit.
    pub from: MeasurementUnit,
    /// Target unit.
    pub to: MeasurementUnit,
}

/// `GET /api/fridge/expiring`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExpiringParams {
    /// Window in days. Uses the configured default when absent.
    #[serde(default)]
    pub days: Option<u32>,
    /// Return copies with freshness evaluated now.
    #[serde(default)]
    pub refresh: bool,
}

/// `GET /api/fridge/categories`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoryParams {
    /// Restrict to one category.
    #[serde(default)]
    pub category: Option<IngredientCategory>,
}
