//! Ingredient catalog entities and reference enums.

pub mod category;
pub mod conversion;
pub mod model;
pub mod storage;
pub mod unit;

pub use category::IngredientCategory;
pub use conversion::convert;
pub use model::{CatalogIngredient, ShelfLife};
pub use storage::StorageMethod;
pub use unit::{MeasurementUnit, UnitDimension};
