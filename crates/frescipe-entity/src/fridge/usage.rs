//! Usage history.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use frescipe_core::types::RecipeId;

use crate::ingredient::MeasurementUnit;

/// One entry of the append-only usage log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageRecord {
    /// Amount taken, in `unit`.
    pub amount_used: f64,
    /// Unit of `amount_used`. Always the item's unit.
    pub unit: MeasurementUnit,
    /// Recipe the amount was used for.
    pub recipe_id: Option<RecipeId>,
    /// Recipe name as supplied by the caller.
    pub recipe_name: Option<String>,
    /// When the amount was taken.
    pub used_date: DateTime<Utc>,
    /// Free-text notes.
    pub notes: Option<String>,
}

/// Request to take an amount from an item.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UseIngredient {
    /// Amount to take. Must be positive.
    pub amount: f64,
    /// Unit of `amount`. Must equal the item's unit.
    pub unit: MeasurementUnit,
    /// Recipe the amount is used for.
    #[serde(default)]
    pub recipe_id: Option<RecipeId>,
    /// Recipe name.
    #[serde(default)]
    #[validate(length(max = 200))]
    pub recipe_name: Option<String>,
    /// Free-text notes.
    #[serde(default)]
    #[validate(length(max = 500))]
    pub notes: Option<String>,
}

impl UseIngredient {
    /// A plain usage without recipe or notes.
    pub fn new(amount: f64, unit: MeasurementUnit) -> Self {
        Self {
            amount,
            unit,
            recipe_id: None,
            recipe_name: None,
            notes: None,
        }
    }

    /// Attach the recipe the amount is used for.
    pub fn for_recipe(mut self, recipe_id: RecipeId, recipe_name: impl Into<String>) -> Self {
        self.recipe_id = Some(recipe_id);
        self.recipe_name = Some(recipe_name.into());
        self
    }
}

/// State transitions caused by a successful usage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UsageOutcome {
    /// Quantity left after the usage.
    pub remaining: f64,
    /// The usage emptied the item.
    pub became_consumed: bool,
    /// The usage crossed the low-quantity threshold without emptying the item.
    pub became_low: bool,
}
