//! # frescipe-core
//!
//! Core crate for Frescipe. Contains configuration schemas, typed
//! identifiers, domain events, pagination types, the clock and event
//! publisher traits, and the unified error system.
//!
//! This crate has **no** internal dependencies on other Frescipe crates.

pub mod config;
pub mod error;
pub mod events;
pub mod result;
pub mod traits;
pub mod types;

pub use error::{AppError, ErrorKind};
pub use result::AppResult;
