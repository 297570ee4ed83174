//! Application configuration module
//!
//! Type-safe configuration loaded from environment variables using the
//! `config` and `dotenvy` crates. Variables carry the `STOREFRONT` prefix
//! and nested values are separated by double underscores. Every section
//! has defaults, so an empty environment yields a working configuration.
//!
//! # Example
//!
//! ```no_run
//! use storefront_state::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Store API at {}", config.gateway.base_url);
//! ```

mod error;
mod gateway;
mod logging;
mod login;
mod storage;

pub use error::{ConfigError, ValidationError};
pub use gateway::GatewayConfig;
pub use logging::{LogFormat, LoggingConfig};
pub use login::LoginConfig;
pub use storage::{StorageBackend, StorageConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Store API gateway (base URL, timeout)
    #[serde(default)]
    pub gateway: GatewayConfig,

    /// Local key-value storage (backend, file path, keys)
    #[serde(default)]
    pub storage: StorageConfig,

    /// Log filter and format
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Optional credentials to log in with at startup
    #[serde(default)]
    pub login: LoginConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `STOREFRONT` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `STOREFRONT__GATEWAY__BASE_URL=...` -> `gateway.base_url = ...`
    /// - `STOREFRONT__STORAGE__BACKEND=memory` -> `storage.backend = memory`
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
                    .prefix("STOREFRONT")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.gateway.validate()?;
        self.storage.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::path::PathBuf;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: &[&str] = &[
        "STOREFRONT__GATEWAY__BASE_URL",
        "STOREFRONT__GATEWAY__REQUEST_TIMEOUT_SECS",
        "STOREFRONT__STORAGE__BACKEND",
        "STOREFRONT__STORAGE__PATH",
        "STOREFRONT__STORAGE__TOKEN_KEY",
        "STOREFRONT__LOGGING__FORMAT",
        "STOREFRONT__LOGIN__USERNAME",
        "STOREFRONT__LOGIN__PASSWORD",
    ];

    /// Helper to clear environment variables after testing
    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_load_defaults_from_empty_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.gateway.base_url, "https://fakestoreapi.com");
        assert_eq!(config.storage.backend, StorageBackend::File);
        assert_eq!(config.logging.format, LogFormat::Pretty);
        assert!(config.login.credentials().is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("STOREFRONT__GATEWAY__BASE_URL", "http://localhost:4000");
        env::set_var("STOREFRONT__GATEWAY__REQUEST_TIMEOUT_SECS", "10");
        env::set_var("STOREFRONT__STORAGE__BACKEND", "memory");
        env::set_var("STOREFRONT__STORAGE__PATH", "/tmp/store.yaml");
        env::set_var("STOREFRONT__LOGGING__FORMAT", "json");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.gateway.base_url, "http://localhost:4000");
        assert_eq!(config.gateway.request_timeout_secs, Some(10));
        assert_eq!(config.storage.backend, StorageBackend::Memory);
        assert_eq!(config.storage.path, PathBuf::from("/tmp/store.yaml"));
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_login_credentials_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("STOREFRONT__LOGIN__USERNAME", "testuser");
        env::set_var("STOREFRONT__LOGIN__PASSWORD", "testpassword");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        let credentials = config.login.credentials().unwrap().unwrap();
        assert_eq!(credentials.username(), "testuser");
    }

    #[test]
    fn test_validate_rejects_duplicate_keys() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("STOREFRONT__STORAGE__TOKEN_KEY", "userRatings");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.validate(), Err(ValidationError::DuplicateStorageKey));
    }
}
