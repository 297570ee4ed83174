//! Session state and its reducers.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::SessionStatus;
use crate::domain::foundation::{LoginAttemptId, StateMachine, ValidationError};

/// Message surfaced when a login fails without a usable server message.
pub const LOGIN_FAILED_MESSAGE: &str = "Login failed. Please check your credentials.";

/// Bearer token returned by a successful credential check.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthToken(String);

impl AuthToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Authentication state of the current user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    token: Option<AuthToken>,
    pending_login: Option<LoginAttemptId>,
    error: Option<String>,
}

impl SessionState {
    /// Creates a state seeded with a previously persisted token.
    pub fn with_token(token: Option<AuthToken>) -> Self {
        Self {
            token,
            pending_login: None,
            error: None,
        }
    }

    pub fn token(&self) -> Option<&AuthToken> {
        self.token.as_ref()
    }

    /// True while a login attempt awaits its response.
    pub fn is_loading(&self) -> bool {
        self.pending_login.is_some()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Derives the lifecycle status from the raw fields.
    pub fn status(&self) -> SessionStatus {
        if self.pending_login.is_some() {
            SessionStatus::Pending
        } else if self.token.is_some() {
            SessionStatus::Authenticated
        } else {
            SessionStatus::Anonymous
        }
    }

    /// A login request was issued. Any attempt still in flight is superseded.
    pub fn begin_login(&mut self) -> LoginAttemptId {
        let attempt = LoginAttemptId::new();
        self.pending_login = Some(attempt);
        self.error = None;
        attempt
    }

    /// Settles `attempt` if it is still the latest one.
    fn settle(
        &mut self,
        attempt: LoginAttemptId,
        target: SessionStatus,
    ) -> Result<(), ValidationError> {
        if self.pending_login != Some(attempt) {
            return Err(ValidationError::invalid_format(
                "login_attempt",
                format!("attempt {} is no longer pending", attempt),
            ));
        }
        self.status().transition_to(target)?;
        self.pending_login = None;
        Ok(())
    }

    /// The credential check for `attempt` returned a token.
    ///
    /// Rejected when `attempt` was superseded by a newer login or cancelled
    /// by logout.
    pub fn login_succeeded(
        &mut self,
        attempt: LoginAttemptId,
        token: AuthToken,
    ) -> Result<(), ValidationError> {
        self.settle(attempt, SessionStatus::Authenticated)?;
        self.token = Some(token);
        Ok(())
    }

    /// The credential check for `attempt` failed with a user-facing message.
    ///
    /// Rejected under the same conditions as [`Self::login_succeeded`].
    pub fn login_failed(
        &mut self,
        attempt: LoginAttemptId,
        message: impl Into<String>,
    ) -> Result<(), ValidationError> {
        self.settle(attempt, SessionStatus::Anonymous)?;
        self.token = None;
        self.error = Some(message.into());
        Ok(())
    }

    pub fn logout(&mut self) {
        self.token = None;
        self.pending_login = None;
        self.error = None;
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }
}
