//! HTTP request handlers.

pub mod fridge;
pub mod health;
pub mod units;
