//! Fridge item entity, freshness model, and usage accounting.

pub mod freshness;
pub mod model;
pub mod notification;
pub mod purchase;
pub mod usage;

pub use freshness::{Freshness, FreshnessInputs, FreshnessStatus, MILLIS_PER_DAY};
pub use model::{CreateFridgeItem, FridgeItem, QUANTITY_EPSILON};
pub use notification::NotificationSettings;
pub use purchase::PurchaseInfo;
pub use usage::{UsageOutcome, UsageRecord, UseIngredient};

use frescipe_core::AppError;

/// Flatten derive-validation failures into a single validation error.
pub(crate) fn rejected(errors: validator::ValidationErrors) -> AppError {
    AppError::validation(errors.to_string())
}
