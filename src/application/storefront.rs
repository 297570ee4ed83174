//! Storefront - the composed set of state containers.

use std::sync::Arc;

use thiserror::Error;

use super::containers::{CatalogContainer, RatingsContainer, SessionContainer};
use crate::domain::session::AuthToken;
use crate::ports::{KeyValueStore, StoreGateway};

/// Storage key for the session token.
pub const DEFAULT_TOKEN_KEY: &str = "authToken";

/// Storage key for the user ratings map.
pub const DEFAULT_RATINGS_KEY: &str = "userRatings";

/// Keys under which the containers persist their state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageKeys {
    pub token_key: String,
    pub ratings_key: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            token_key: DEFAULT_TOKEN_KEY.to_string(),
            ratings_key: DEFAULT_RATINGS_KEY.to_string(),
        }
    }
}

/// Raised when an operation needs a logged-in session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccessError {
    #[error("Not authenticated")]
    NotAuthenticated,
}

/// Handle to the three containers. Clones share state.
#[derive(Clone)]
pub struct Storefront {
    session: Arc<SessionContainer>,
    catalog: Arc<CatalogContainer>,
    ratings: Arc<RatingsContainer>,
}

impl Storefront {
    pub fn new(
        gateway: Arc<dyn StoreGateway>,
        storage: Arc<dyn KeyValueStore>,
        keys: StorageKeys,
    ) -> Self {
        Self {
            session: Arc::new(SessionContainer::new(
                Arc::clone(&gateway),
                Arc::clone(&storage),
                keys.token_key,
            )),
            catalog: Arc::new(CatalogContainer::new(gateway)),
            ratings: Arc::new(RatingsContainer::new(storage, keys.ratings_key)),
        }
    }

    pub fn session(&self) -> &SessionContainer {
        &self.session
    }

    pub fn catalog(&self) -> &CatalogContainer {
        &self.catalog
    }

    pub fn ratings(&self) -> &RatingsContainer {
        &self.ratings
    }

    /// Gate for views that require login: the current token, if any.
    pub fn require_session(&self) -> Result<AuthToken, AccessError> {
        self.session.token().ok_or(AccessError::NotAuthenticated)
    }
}
