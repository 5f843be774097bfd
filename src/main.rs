//! Software Advisor server
//!
//! Loads configuration from `SOFTWARE_ADVISOR__*` environment variables, the
//! catalog from YAML, and serves the wizard and suggestion API.

use std::sync::Arc;
use std::time::Duration;

use http::{header, HeaderName, Method};
use thiserror::Error;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use software_advisor::adapters::http::middleware::{SESSION_ID_HEADER, USER_ID_HEADER};
use software_advisor::adapters::http::{advisor_router, AdvisorAppState};
use software_advisor::adapters::{
    CatalogLoadError, InMemorySelectionRepository, InMemoryWizardStateStore,
    RedisWizardStateStore, YamlCatalog,
};
use software_advisor::config::{AppConfig, ConfigError, RedisConfig, ValidationError};
use software_advisor::ports::WizardStateStore;

#[derive(Debug, Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Invalid configuration: {0}")]
    Invalid(#[from] ValidationError),

    #[error(transparent)]
    Catalog(#[from] CatalogLoadError),

    #[error("Redis connection failed: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("Redis connection timed out after {0:?}")]
    RedisTimeout(Duration),

    #[error("Server error: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    let config = AppConfig::load()?;
    init_tracing(&config);
    config.validate()?;

    let catalog = Arc::new(YamlCatalog::load(&config.catalog.path).await?);
    let wizard_states = wizard_state_store(&config).await?;

    let state = AdvisorAppState {
        taxonomy: catalog.clone(),
        applications: catalog,
        selections: Arc::new(InMemorySelectionRepository::new()),
        wizard_states,
        ranking_policy: config.scoring.policy(),
        wizard_namespace: config.wizard.namespace.clone(),
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([
            header::CONTENT_TYPE,
            HeaderName::from_static(USER_ID_HEADER),
            HeaderName::from_static(SESSION_ID_HEADER),
        ]);

    let app = advisor_router()
        .with_state(state)
        .layer(TimeoutLayer::new(config.server.request_timeout()))
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    let addr = config.server.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, environment = ?config.server.environment, "Software advisor listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Software advisor shut down");
    Ok(())
}

/// JSON logs in production, human-readable otherwise. `RUST_LOG` wins over
/// the configured filter.
fn init_tracing(config: &AppConfig) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| config.server.log_level.clone().into());

    if config.is_production() {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

async fn wizard_state_store(config: &AppConfig) -> Result<Arc<dyn WizardStateStore>, StartupError> {
    match &config.redis {
        Some(redis_config) => {
            let conn = connect_redis(redis_config).await?;
            tracing::info!("Wizard state stored in Redis");
            Ok(Arc::new(RedisWizardStateStore::new(
                conn,
                config.wizard.state_ttl_secs,
            )))
        }
        None => {
            tracing::warn!("No Redis configured; wizard state is kept in process memory");
            Ok(Arc::new(InMemoryWizardStateStore::new()))
        }
    }
}

async fn connect_redis(
    config: &RedisConfig,
) -> Result<redis::aio::MultiplexedConnection, StartupError> {
    let client = redis::Client::open(config.url.as_str())?;
    let conn = tokio::time::timeout(
        config.timeout(),
        client.get_multiplexed_async_connection(),
    )
    .await
    .map_err(|_| StartupError::RedisTimeout(config.timeout()))??;
    Ok(conn)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C, shutting down"),
        _ = terminate => tracing::info!("Received terminate signal, shutting down"),
    }
}
