//! # frescipe-database
//!
//! Storage ports for fridge items and the ingredient catalog, with
//! PostgreSQL repositories, in-memory stores for tests and local runs,
//! and a moka-backed catalog cache.

pub mod cache;
pub mod connection;
pub mod memory;
pub mod migration;
pub mod repositories;
pub mod store;

pub use cache::CachedCatalog;
pub use connection::DatabasePool;
pub use memory::{MemoryFridgeItemStore, MemoryIngredientCatalog};
pub use repositories::{FridgeItemRepository, IngredientRepository};
pub use store::{FridgeItemStore, IngredientCatalog};
