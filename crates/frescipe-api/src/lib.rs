//! # frescipe-api
//!
//! HTTP API layer for Frescipe built on Axum.
//!
//! Exposes the fridge engine operations as JSON endpoints under `/api`,
//! with the caller identified by the `X-User-Id` header set by the
//! upstream gateway.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, build_state, run_server};
pub use state::AppState;
