//! # frescipe-entity
//!
//! Domain entity models for Frescipe. The fridge item is an explicit value
//! type: every mutation goes through a method on [`fridge::FridgeItem`] and
//! every write is preceded by [`fridge::FridgeItem::prepare_for_save`],
//! which recomputes the derived freshness fields. Nothing in this crate
//! touches a database.

pub mod fridge;
pub mod ingredient;
pub mod summary;

pub use fridge::{
    CreateFridgeItem, Freshness, FreshnessStatus, FridgeItem, NotificationSettings, PurchaseInfo,
    UsageOutcome, UsageRecord, UseIngredient,
};
pub use ingredient::{
    CatalogIngredient, IngredientCategory, MeasurementUnit, ShelfLife, StorageMethod,
};
pub use summary::{CategoryGroup, FridgeSummary};
