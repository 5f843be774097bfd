//! Application configuration module
//!
//! Configuration is read from environment variables using the `config` and
//! `dotenvy` crates. Variables carry the `SOFTWARE_ADVISOR` prefix and nested
//! values are separated by double underscores.
//!
//! # Example
//!
//! ```no_run
//! use software_advisor::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod catalog;
mod error;
mod redis;
mod scoring;
mod server;
mod wizard;

pub use catalog::CatalogConfig;
pub use error::{ConfigError, ValidationError};
pub use redis::RedisConfig;
pub use scoring::ScoringConfig;
pub use server::{Environment, ServerConfig};
pub use wizard::WizardConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a runnable
/// development setup with in-memory wizard state.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// Suggestion thresholds
    #[serde(default)]
    pub scoring: ScoringConfig,

    /// Wizard state namespace and lifetime
    #[serde(default)]
    pub wizard: WizardConfig,

    /// Catalog file location
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Redis for wizard state; in-memory storage is used when absent
    #[serde(default)]
    pub redis: Option<RedisConfig>,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// - `SOFTWARE_ADVISOR__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `SOFTWARE_ADVISOR__SCORING__MINIMUM_SCORE=60` -> `scoring.minimum_score = 60.0`
    /// - `SOFTWARE_ADVISOR__REDIS__URL=redis://...` -> `redis.url = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("SOFTWARE_ADVISOR")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.scoring.validate()?;
        self.wizard.validate()?;
        self.catalog.validate()?;
        if let Some(redis) = &self.redis {
            redis.validate()?;
        }
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
