//! Bootstrap - wiring from configuration to a running storefront.

use std::sync::Arc;

use thiserror::Error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::adapters::{
    FileKeyValueStore, HttpStoreGateway, HttpStoreGatewayConfig, InMemoryKeyValueStore,
};
use crate::application::{StorageKeys, Storefront};
use crate::config::{
    AppConfig, GatewayConfig, LogFormat, LoggingConfig, StorageBackend, StorageConfig,
    ValidationError,
};
use crate::ports::{GatewayError, KeyValueStore};

/// Errors that prevent the storefront from starting.
#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ValidationError),

    #[error("Failed to build store gateway: {0}")]
    Gateway(#[from] GatewayError),

    #[error("Failed to initialize tracing: {0}")]
    Tracing(String),
}

/// Validates `config` and builds the storefront it describes.
pub fn build_storefront(config: &AppConfig) -> Result<Storefront, BootstrapError> {
    config.validate()?;

    let gateway = build_gateway(&config.gateway)?;
    let storage = build_storage(&config.storage);
    let keys = StorageKeys {
        token_key: config.storage.token_key.clone(),
        ratings_key: config.storage.ratings_key.clone(),
    };

    tracing::info!(
        base_url = %config.gateway.base_url,
        backend = ?config.storage.backend,
        "Storefront wired"
    );
    Ok(Storefront::new(Arc::new(gateway), storage, keys))
}

fn build_gateway(config: &GatewayConfig) -> Result<HttpStoreGateway, GatewayError> {
    let mut gateway_config = HttpStoreGatewayConfig::new(config.base_url.clone());
    if let Some(timeout) = config.timeout() {
        gateway_config = gateway_config.with_timeout(timeout);
    }
    HttpStoreGateway::new(gateway_config)
}

fn build_storage(config: &StorageConfig) -> Arc<dyn KeyValueStore> {
    match config.backend {
        StorageBackend::Memory => Arc::new(InMemoryKeyValueStore::new()),
        StorageBackend::File => {
            tracing::debug!(path = %config.path.display(), "Using file storage");
            Arc::new(FileKeyValueStore::new(&config.path))
        }
    }
}

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over the configured filter.
pub fn init_tracing(config: &LoggingConfig) -> Result<(), BootstrapError> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .map_err(|e| BootstrapError::Tracing(e.to_string()))?;

    let json_layer = (config.format == LogFormat::Json)
        .then(|| tracing_subscriber::fmt::layer().json().flatten_event(true));
    let text_layer = (config.format == LogFormat::Pretty).then(tracing_subscriber::fmt::layer);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .try_init()
        .map_err(|e| BootstrapError::Tracing(e.to_string()))
}
