//! In-memory stores for tests and database-less runs.

pub mod fridge_item;
pub mod ingredient;

pub use fridge_item::MemoryFridgeItemStore;
pub use ingredient::MemoryIngredientCatalog;
