//! Fridge inventory services.

pub mod alerts;
pub mod service;

pub use alerts::AlertRules;
pub use service::FridgeService;
