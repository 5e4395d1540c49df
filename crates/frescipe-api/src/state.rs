//! Application state shared across all handlers and middleware.

use std::sync::Arc;
use std::time::Instant;

use frescipe_core::config::AppConfig;
use frescipe_core::traits::Clock;
use frescipe_database::DatabasePool;
use frescipe_service::FridgeService;

/// Application state passed to every handler via `State<AppState>`.
///
/// All fields are cheap to clone.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Fridge inventory service.
    pub fridge: Arc<FridgeService>,
    /// Time source for read-time projections.
    pub clock: Arc<dyn Clock>,
    /// Database pool, absent when running over in-memory stores.
    pub database: Option<DatabasePool>,
    /// Process start, for uptime reporting.
    pub started_at: Instant,
}

impl AppState {
    /// Assemble the state.
    pub fn new(
        config: Arc<AppConfig>,
        fridge: Arc<FridgeService>,
        clock: Arc<dyn Clock>,
        database: Option<DatabasePool>,
    ) -> Self {
        Self {
            config,
            fridge,
            clock,
            database,
            started_at: Instant::now(),
        }
    }
}
