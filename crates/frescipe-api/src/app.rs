//! Application builder: wires stores, services, and state into an Axum app.

use std::sync::Arc;

use axum::Router;
use tracing::{error, info};

use frescipe_core::config::AppConfig;
use frescipe_core::error::AppError;
use frescipe_core::traits::{Clock, EventPublisher, SystemClock};
use frescipe_database::migration::run_migrations;
use frescipe_database::{
    CachedCatalog, DatabasePool, FridgeItemRepository, FridgeItemStore, IngredientCatalog,
    IngredientRepository,
};
use frescipe_service::{EventBus, FridgeService};

use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application.
pub fn build_app(state: AppState) -> Router {
    build_router(state)
}

/// Assembles `AppState` over the given ports.
///
/// The catalog is wrapped in the lookup cache when enabled.
pub fn build_state(
    config: AppConfig,
    items: Arc<dyn FridgeItemStore>,
    catalog: Arc<dyn IngredientCatalog>,
    publisher: Arc<dyn EventPublisher>,
    clock: Arc<dyn Clock>,
    database: Option<DatabasePool>,
) -> AppState {
    let catalog: Arc<dyn IngredientCatalog> = if config.catalog.cache_enabled {
        Arc::new(CachedCatalog::new(catalog, &config.catalog))
    } else {
        catalog
    };

    let fridge = Arc::new(FridgeService::new(
        items,
        catalog,
        publisher,
        Arc::clone(&clock),
        config.fridge.clone(),
    ));

    AppState::new(Arc::new(config), fridge, clock, database)
}

/// Runs the Frescipe server until Ctrl+C.
pub async fn run_server(config: AppConfig) -> Result<(), AppError> {
    info!("Starting Frescipe server...");

    let db = DatabasePool::connect(&config.database).await?;
    if config.database.run_migrations {
        run_migrations(db.pool()).await?;
    }

    let items: Arc<dyn FridgeItemStore> = Arc::new(FridgeItemRepository::new(db.pool().clone()));
    let catalog: Arc<dyn IngredientCatalog> =
        Arc::new(IngredientRepository::new(db.pool().clone()));

    let bus = EventBus::new(config.fridge.event_buffer_size);
    let _event_logger = bus.spawn_logger();

    let addr = config.server.bind_address();
    let state = build_state(
        config,
        items,
        catalog,
        Arc::new(bus),
        Arc::new(SystemClock),
        Some(db.clone()),
    );
    let app = build_app(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    info!(%addr, "Frescipe server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    db.close().await;
    info!("Frescipe server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
    }
}
