//! PostgreSQL repository implementations.

pub mod fridge_item;
pub mod ingredient;

pub use fridge_item::FridgeItemRepository;
pub use ingredient::IngredientRepository;
