//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section.

pub mod app;
pub mod catalog;
pub mod database;
pub mod fridge;
pub mod logging;

use serde::{Deserialize, Serialize};
use tracing::debug;

pub use self::app::{CorsConfig, ServerConfig};
pub use self::catalog::CatalogConfig;
pub use self::database::DatabaseConfig;
pub use self::fridge::FridgeConfig;
pub use self::logging::LoggingConfig;

use crate::error::AppError;

/// Environment variable prefix for configuration overrides.
pub const ENV_PREFIX: &str = "FRESCIPE";

/// Root application configuration.
///
/// This struct is the top-level deserialization target for the merged
/// TOML configuration files (default.toml + environment overlay).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Database connection settings.
    pub database: DatabaseConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Fridge engine defaults.
    #[serde(default)]
    pub fridge: FridgeConfig,
    /// Ingredient catalog lookup settings.
    #[serde(default)]
    pub catalog: CatalogConfig,
}

impl AppConfig {
    /// Load configuration for a named environment.
    ///
    /// Merges `config/default`, the `config/{env}` overlay and environment
    /// variables prefixed with `FRESCIPE__` (sections separated by `__`).
    pub fn load(env: &str) -> Result<Self, AppError> {
        debug!(env, "Loading configuration");
        let builder = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false));
        Self::finish(builder)
    }

    /// Load configuration from an explicit file path plus environment overrides.
    pub fn load_from(path: &str) -> Result<Self, AppError> {
        debug!(path, "Loading configuration file");
        let builder = config::Config::builder().add_source(config::File::with_name(path));
        Self::finish(builder)
    }

    fn finish(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<Self, AppError> {
        let config = builder
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        let parsed: Self = config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))?;
        parsed.validate()?;
        Ok(parsed)
    }

    /// Check cross-field constraints that serde cannot express.
    pub fn validate(&self) -> Result<(), AppError> {
        self.fridge.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_toml_uses_defaults() {
        let raw = r#"
            [database]
            url = "postgres://localhost/frescipe"
        "#;
        let config: AppConfig = config::Config::builder()
            .add_source(config::File::from_str(raw, config::FileFormat::Toml))
            .build()
            .expect("build")
            .try_deserialize()
            .expect("deserialize");

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.fridge.opened_shelf_life_days, 7);
        assert_eq!(config.fridge.default_reminder_days, 3);
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.database.max_connections, 20);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_fridge_section_rejected() {
        let raw = r#"
            [database]
            url = "postgres://localhost/frescipe"

            [fridge]
            default_reminder_days = 45
        "#;
        let config: AppConfig = config::Config::builder()
            .add_source(config::File::from_str(raw, config::FileFormat::Toml))
            .build()
            .expect("build")
            .try_deserialize()
            .expect("deserialize");

        let err = config.validate().expect_err("reminder days out of range");
        assert_eq!(err.kind, crate::ErrorKind::Configuration);
    }
}
