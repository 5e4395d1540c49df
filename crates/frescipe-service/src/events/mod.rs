//! In-process event bus.

pub mod bus;

pub use bus::EventBus;
