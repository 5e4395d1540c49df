//! Alert signals derived from item state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::id::FridgeItemId;

/// Signals consumed by the notification dispatcher.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AlertEvent {
    /// The item expires within its reminder window, or already has.
    ExpiringSoon {
        /// The item ID.
        item_id: FridgeItemId,
        /// Denormalized ingredient name.
        ingredient_name: String,
        /// Declared expiry date.
        expiry_date: DateTime<Utc>,
        /// Whole days until expiry (negative once expired).
        days_until_expiry: i64,
    },
    /// The remaining quantity fell to or below the low-quantity threshold.
    LowQuantity {
        /// The item ID.
        item_id: FridgeItemId,
        /// Denormalized ingredient name.
        ingredient_name: String,
        /// Remaining quantity.
        quantity: f64,
        /// Quantity at which the item counts as low.
        threshold_quantity: f64,
    },
}

impl AlertEvent {
    /// The item this alert refers to.
    pub fn item_id(&self) -> FridgeItemId {
        match self {
            Self::ExpiringSoon { item_id, .. } | Self::LowQuantity { item_id, .. } => *item_id,
        }
    }
}
