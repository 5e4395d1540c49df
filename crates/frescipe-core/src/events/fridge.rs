//! Fridge inventory lifecycle events.

use serde::{Deserialize, Serialize};

use crate::types::id::{FridgeItemId, IngredientId, RecipeId};

/// Events related to fridge item mutations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum FridgeEvent {
    /// A new item was registered.
    ItemAdded {
        /// The item ID.
        item_id: FridgeItemId,
        /// The catalog ingredient.
        ingredient_id: IngredientId,
        /// Denormalized ingredient name.
        ingredient_name: String,
        /// Initial quantity.
        quantity: f64,
        /// Measurement unit code.
        unit: String,
    },
    /// Part of an item was used.
    ItemUsed {
        /// The item ID.
        item_id: FridgeItemId,
        /// Amount consumed by this usage.
        amount: f64,
        /// Measurement unit code.
        unit: String,
        /// Remaining quantity after the usage.
        remaining: f64,
        /// Recipe the usage was recorded against.
        recipe_id: Option<RecipeId>,
    },
    /// An item was opened for the first time.
    ItemOpened {
        /// The item ID.
        item_id: FridgeItemId,
    },
    /// An item reached the consumed state.
    ItemConsumed {
        /// The item ID.
        item_id: FridgeItemId,
        /// Denormalized ingredient name.
        ingredient_name: String,
    },
    /// An item was deleted by its owner.
    ItemRemoved {
        /// The item ID.
        item_id: FridgeItemId,
    },
}
