//! # frescipe-service
//!
//! Business logic for the fridge inventory engine. [`FridgeService`]
//! orchestrates the item store, the ingredient catalog, the clock, and the
//! event publisher to implement every lifecycle operation and query.
//!
//! Services follow constructor injection: all dependencies are provided
//! at construction time via `Arc` references.

pub mod context;
pub mod events;
pub mod fridge;

pub use context::RequestContext;
pub use events::EventBus;
pub use fridge::{AlertRules, FridgeService};
