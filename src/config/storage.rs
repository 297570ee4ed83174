//! Local key-value storage configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Local key-value storage configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Which backend to use
    #[serde(default)]
    pub backend: StorageBackend,

    /// File used by the `file` backend
    #[serde(default = "default_path")]
    pub path: PathBuf,

    /// Key holding the session token
    #[serde(default = "default_token_key")]
    pub token_key: String,

    /// Key holding the user ratings map
    #[serde(default = "default_ratings_key")]
    pub ratings_key: String,
}

/// Storage backend type
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// Process-lifetime map; nothing survives a restart
    Memory,
    /// Single YAML file on disk
    #[default]
    File,
}

impl StorageConfig {
    /// Validate storage configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.token_key.trim().is_empty() {
            return Err(ValidationError::MissingRequired("STORAGE__TOKEN_KEY"));
        }
        if self.ratings_key.trim().is_empty() {
            return Err(ValidationError::MissingRequired("STORAGE__RATINGS_KEY"));
        }
        if self.token_key == self.ratings_key {
            return Err(ValidationError::DuplicateStorageKey);
        }
        if self.backend == StorageBackend::File && self.path.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("STORAGE__PATH"));
        }
        Ok(())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            path: default_path(),
            token_key: default_token_key(),
            ratings_key: default_ratings_key(),
        }
    }
}

fn default_path() -> PathBuf {
    PathBuf::from("./data/storefront.yaml")
}

fn default_token_key() -> String {
    "authToken".to_string()
}

fn default_ratings_key() -> String {
    "userRatings".to_string()
}
