//! CLI command definitions and dispatch.

pub mod convert;
pub mod fridge;
pub mod freshness;
pub mod migrate;
pub mod serve;

use std::sync::Arc;

use clap::{Parser, Subcommand};

use frescipe_core::config::AppConfig;
use frescipe_core::error::AppError;
use frescipe_core::traits::{NoopPublisher, SystemClock};
use frescipe_database::{
    CachedCatalog, DatabasePool, FridgeItemRepository, IngredientRepository,
};
use frescipe_service::FridgeService;

use crate::output::OutputFormat;

/// Frescipe fridge inventory engine
#[derive(Debug, Parser)]
#[command(name = "frescipe", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the HTTP server
    Serve(serve::ServeArgs),
    /// Database migration management
    Migrate(migrate::MigrateArgs),
    /// Compute a freshness score from dates
    Freshness(freshness::FreshnessArgs),
    /// Summarize a user's fridge
    Summary(fridge::SummaryArgs),
    /// List a user's items expiring soon
    Expiring(fridge::ExpiringArgs),
    /// Convert an amount between units
    Convert(convert::ConvertArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        match &self.command {
            Commands::Serve(args) => serve::execute(args, &self.config).await,
            Commands::Migrate(args) => migrate::execute(args, &self.config, self.format).await,
            Commands::Freshness(args) => freshness::execute(args, self.format),
            Commands::Summary(args) => fridge::summary(args, &self.config, self.format).await,
            Commands::Expiring(args) => fridge::expiring(args, &self.config, self.format).await,
            Commands::Convert(args) => convert::execute(args, self.format),
        }
    }
}

/// Helper: load configuration from file
pub fn load_config(config_path: &str) -> Result<AppConfig, AppError> {
    AppConfig::load_from(config_path)
}

/// Helper: connect to the configured database
pub async fn connect(config: &AppConfig) -> Result<DatabasePool, AppError> {
    DatabasePool::connect(&config.database).await
}

/// Helper: a fridge service over the Postgres stores.
///
/// Events are discarded; the CLI only reads.
pub fn fridge_service(config: &AppConfig, db: &DatabasePool) -> FridgeService {
    let catalog = Arc::new(CachedCatalog::new(
        Arc::new(IngredientRepository::new(db.pool().clone())),
        &config.catalog,
    ));
    FridgeService::new(
        Arc::new(FridgeItemRepository::new(db.pool().clone())),
        catalog,
        Arc::new(NoopPublisher),
        Arc::new(SystemClock),
        config.fridge.clone(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use frescipe_entity::ingredient::MeasurementUnit;

    #[test]
    fn test_parse_convert() {
        let cli = Cli::try_parse_from(["frescipe", "-f", "json", "convert", "2", "cup", "ml"])
            .expect("parse");
        assert_eq!(cli.format, OutputFormat::Json);
        match cli.command {
            Commands::Convert(args) => {
                assert_eq!(args.amount, 2.0);
                assert_eq!(args.from, MeasurementUnit::Cup);
                assert_eq!(args.to, MeasurementUnit::Milliliter);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_freshness_dates() {
        let cli = Cli::try_parse_from([
            "frescipe",
            "freshness",
            "--purchased",
            "2024-04-01T00:00:00Z",
            "--expires",
            "2024-04-11T00:00:00Z",
        ])
        .expect("parse");
        match cli.command {
            Commands::Freshness(args) => {
                assert!(args.expires.is_some());
                assert!(args.opened.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_rejects_bad_user_id() {
        assert!(Cli::try_parse_from(["frescipe", "summary", "--user", "bob"]).is_err());
    }
}
