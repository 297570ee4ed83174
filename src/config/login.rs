//! Startup login configuration

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;

use crate::domain::foundation::ValidationError;
use crate::domain::session::Credentials;

/// Credentials to log in with at startup. Both or neither must be set.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginConfig {
    pub username: Option<String>,
    pub password: Option<Secret<String>>,
}

impl LoginConfig {
    /// Builds credentials when both fields are configured.
    pub fn credentials(&self) -> Option<Result<Credentials, ValidationError>> {
        match (&self.username, &self.password) {
            (Some(username), Some(password)) => Some(Credentials::new(
                username.clone(),
                password.expose_secret().clone(),
            )),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_credentials_by_default() {
        assert!(LoginConfig::default().credentials().is_none());
    }

    #[test]
    fn test_username_alone_is_not_enough() {
        let config = LoginConfig {
            username: Some("testuser".to_string()),
            password: None,
        };
        assert!(config.credentials().is_none());
    }

    #[test]
    fn test_both_fields_build_credentials() {
        let config = LoginConfig {
            username: Some("testuser".to_string()),
            password: Some(Secret::new("testpassword".to_string())),
        };
        let credentials = config.credentials().unwrap().unwrap();
        assert_eq!(credentials.username(), "testuser");
        assert_eq!(credentials.expose_password(), "testpassword");
    }

    #[test]
    fn test_blank_username_is_invalid() {
        let config = LoginConfig {
            username: Some("  ".to_string()),
            password: Some(Secret::new("pw".to_string())),
        };
        assert!(config.credentials().unwrap().is_err());
    }
}
