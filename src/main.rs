//! Frescipe Server: fridge inventory engine.
//!
//! Main entry point that loads configuration, installs logging, and
//! starts the HTTP server.

use tracing_subscriber::{EnvFilter, fmt};

use frescipe_core::config::{AppConfig, LoggingConfig};
use frescipe_core::error::AppError;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config.logging);
    tracing::info!("Starting Frescipe v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = frescipe_api::run_server(config).await {
        tracing::error!(error = %e, "Server error");
        std::process::exit(1);
    }
}

/// Load configuration from an explicit file or the environment layers.
///
/// `FRESCIPE_CONFIG` names a single file; otherwise `config/default.toml`
/// is overlaid with `config/{FRESCIPE_ENV}.toml`.
fn load_configuration() -> Result<AppConfig, AppError> {
    match std::env::var("FRESCIPE_CONFIG") {
        Ok(path) => AppConfig::load_from(&path),
        Err(_) => {
            let env = std::env::var("FRESCIPE_ENV").unwrap_or_else(|_| "development".to_string());
            AppConfig::load(&env)
        }
    }
}

/// Initialize tracing/logging
fn init_logging(config: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    match config.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}
