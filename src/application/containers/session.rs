//! SessionContainer - owner of the authentication state.

use std::sync::{Arc, RwLock};

use super::{read, write};
use crate::domain::session::{AuthToken, Credentials, SessionState, LOGIN_FAILED_MESSAGE};
use crate::ports::{KeyValueStore, StoreGateway};

/// Holds the session token and login lifecycle, mirroring the token into
/// durable storage.
pub struct SessionContainer {
    state: RwLock<SessionState>,
    gateway: Arc<dyn StoreGateway>,
    storage: Arc<dyn KeyValueStore>,
    token_key: String,
}

impl SessionContainer {
    /// Creates the container, restoring a token persisted under `token_key`.
    ///
    /// Unreadable storage is logged and the session starts anonymous.
    pub fn new(
        gateway: Arc<dyn StoreGateway>,
        storage: Arc<dyn KeyValueStore>,
        token_key: impl Into<String>,
    ) -> Self {
        let token_key = token_key.into();
        let token = match storage.get(&token_key) {
            Ok(token) => token.filter(|t| !t.is_empty()).map(AuthToken::new),
            Err(e) => {
                tracing::warn!(key = %token_key, error = %e, "Could not read persisted session token");
                None
            }
        };
        if token.is_some() {
            tracing::debug!("Restored persisted session token");
        }

        Self {
            state: RwLock::new(SessionState::with_token(token)),
            gateway,
            storage,
            token_key,
        }
    }

    /// Returns a copy of the current state.
    pub fn snapshot(&self) -> SessionState {
        read(&self.state).clone()
    }

    pub fn token(&self) -> Option<AuthToken> {
        read(&self.state).token().cloned()
    }

    pub fn is_authenticated(&self) -> bool {
        read(&self.state).is_authenticated()
    }

    /// Attempts a login and returns the resulting state.
    ///
    /// Failures never escape: they land in the state's `error` as text. Only
    /// the most recent attempt settles the session; responses to an attempt
    /// superseded by a newer `login` or cancelled by `logout` are discarded.
    pub async fn login(&self, credentials: &Credentials) -> SessionState {
        let attempt = write(&self.state).begin_login();
        tracing::debug!(username = credentials.username(), "Login started");

        let result = self.gateway.check_credentials(credentials).await;

        let mut state = write(&self.state);
        match result {
            Ok(token) => match state.login_succeeded(attempt, token.clone()) {
                Ok(()) => {
                    self.persist_token(&token);
                    tracing::info!(username = credentials.username(), "Login succeeded");
                }
                Err(e) => tracing::debug!(error = %e, "Discarding superseded login response"),
            },
            Err(err) => {
                tracing::warn!(
                    username = credentials.username(),
                    status = ?err.status_code,
                    error = %err,
                    "Login failed"
                );
                match state.login_failed(attempt, err.message_or(LOGIN_FAILED_MESSAGE)) {
                    Ok(()) => self.forget_token(),
                    Err(e) => tracing::debug!(error = %e, "Discarding superseded login failure"),
                }
            }
        }
        state.clone()
    }

    /// Drops the token in memory and in storage. No network call.
    pub fn logout(&self) {
        let mut state = write(&self.state);
        state.logout();
        self.forget_token();
        tracing::info!("Logged out");
    }

    pub fn clear_error(&self) {
        write(&self.state).clear_error();
    }

    fn persist_token(&self, token: &AuthToken) {
        if let Err(e) = self.storage.set(&self.token_key, token.as_str()) {
            tracing::warn!(key = %self.token_key, error = %e, "Could not persist session token");
        }
    }

    fn forget_token(&self) {
        if let Err(e) = self.storage.remove(&self.token_key) {
            tracing::warn!(key = %self.token_key, error = %e, "Could not remove persisted session token");
        }
    }
}
