//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Server host must be an IP address, got '{0}'")]
    InvalidHost(String),

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Invalid Redis URL format")]
    InvalidRedisUrl,

    #[error("Minimum score must be between 0 and 100")]
    InvalidMinimumScore,

    #[error("At least one suggestion must be allowed")]
    InvalidMaxSuggestions,

    #[error("Wizard state namespace must not be empty")]
    EmptyNamespace,

    #[error("Wizard state TTL must be positive")]
    InvalidStateTtl,
}
