//! Login credentials value object.

use secrecy::{ExposeSecret, Secret};

use crate::domain::foundation::ValidationError;

/// Username and password for a login attempt.
///
/// Transient: credentials are handed to the gateway and never stored.
#[derive(Debug, Clone)]
pub struct Credentials {
    username: String,
    password: Secret<String>,
}

impl Credentials {
    /// Creates credentials, requiring both fields to be present.
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let username = username.into();
        let password = password.into();

        if username.trim().is_empty() {
            return Err(ValidationError::empty_field("username"));
        }
        if password.is_empty() {
            return Err(ValidationError::empty_field("password"));
        }

        Ok(Self {
            username,
            password: Secret::new(password),
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Exposes the password for the outgoing request body.
    pub fn expose_password(&self) -> &str {
        self.password.expose_secret()
    }
}
