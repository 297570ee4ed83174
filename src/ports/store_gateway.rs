//! Store Gateway Port - Interface to the remote store API.
//!
//! Covers the four calls the storefront needs: credential check, product
//! list, single product, and category list. Every failure is reported as a
//! [`GatewayError`] with the same shape, so callers match on fields instead
//! of probing an untyped payload.
//!
//! # Example
//!
//! ```ignore
//! let gateway: Arc<dyn StoreGateway> = Arc::new(HttpStoreGateway::new(config)?);
//!
//! match gateway.get_product(ProductId::new(999)).await {
//!     Ok(product) => show(product),
//!     Err(err) if err.is_not_found() => show_missing(),
//!     Err(err) => show_error(err.message_or("Something went wrong")),
//! }
//! ```

use async_trait::async_trait;

use crate::domain::catalog::Product;
use crate::domain::foundation::ProductId;
use crate::domain::session::{AuthToken, Credentials};

/// Port for the remote store API.
#[async_trait]
pub trait StoreGateway: Send + Sync {
    /// Exchanges credentials for a token.
    ///
    /// Rejected credentials surface as a `GatewayError` carrying the HTTP
    /// status (typically 401) and the server's message, if it sent one.
    async fn check_credentials(&self, credentials: &Credentials)
        -> Result<AuthToken, GatewayError>;

    /// Fetches all products in server order.
    async fn list_products(&self) -> Result<Vec<Product>, GatewayError>;

    /// Fetches one product.
    ///
    /// # Errors
    ///
    /// Returns an error with `status_code == Some(404)` when the product does
    /// not exist.
    async fn get_product(&self, id: ProductId) -> Result<Product, GatewayError>;

    /// Fetches the category names, without the synthetic "all".
    async fn list_categories(&self) -> Result<Vec<String>, GatewayError>;
}

/// Failure returned by every gateway call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{detail}")]
pub struct GatewayError {
    /// Human-readable message from the failure payload, if the server sent one.
    pub message: Option<String>,
    /// HTTP status of the response, absent for transport failures.
    pub status_code: Option<u16>,
    /// Diagnostic description for logs.
    pub detail: String,
}

impl GatewayError {
    pub const NOT_FOUND: u16 = 404;

    /// The server answered with a non-success status.
    pub fn status(status_code: u16, message: Option<String>) -> Self {
        let detail = match &message {
            Some(msg) => format!("store API returned {}: {}", status_code, msg),
            None => format!("store API returned {}", status_code),
        };
        Self {
            message,
            status_code: Some(status_code),
            detail,
        }
    }

    /// The resource does not exist.
    pub fn not_found(message: Option<String>) -> Self {
        Self::status(Self::NOT_FOUND, message)
    }

    /// The request never produced a response.
    pub fn transport(detail: impl Into<String>) -> Self {
        Self {
            message: None,
            status_code: None,
            detail: format!("network error: {}", detail.into()),
        }
    }

    /// The response body could not be understood.
    pub fn decode(detail: impl Into<String>) -> Self {
        Self {
            message: None,
            status_code: None,
            detail: format!("invalid response body: {}", detail.into()),
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status_code == Some(Self::NOT_FOUND)
    }

    /// The payload message, or `fallback` when there is none.
    pub fn message_or(&self, fallback: impl Into<String>) -> String {
        match &self.message {
            Some(message) if !message.trim().is_empty() => message.clone(),
            _ => fallback.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_keeps_code_and_message() {
        let err = GatewayError::status(401, Some("bad credentials".to_string()));
        assert_eq!(err.status_code, Some(401));
        assert_eq!(err.message.as_deref(), Some("bad credentials"));
        assert_eq!(err.to_string(), "store API returned 401: bad credentials");
    }

    #[test]
    fn not_found_is_detected_by_status() {
        assert!(GatewayError::not_found(None).is_not_found());
        assert!(!GatewayError::status(500, None).is_not_found());
        assert!(!GatewayError::transport("connection refused").is_not_found());
    }

    #[test]
    fn message_or_falls_back_without_payload_message() {
        let err = GatewayError::transport("timed out");
        assert_eq!(err.message_or("Failed to fetch products."), "Failed to fetch products.");

        let blank = GatewayError::status(500, Some("  ".to_string()));
        assert_eq!(blank.message_or("fallback"), "fallback");
    }

    #[test]
    fn message_or_prefers_payload_message() {
        let err = GatewayError::status(503, Some("maintenance".to_string()));
        assert_eq!(err.message_or("fallback"), "maintenance");
    }

    #[test]
    fn transport_and_decode_have_no_status() {
        assert_eq!(GatewayError::transport("x").status_code, None);
        assert_eq!(GatewayError::decode("x").status_code, None);
        assert!(GatewayError::decode("eof").to_string().contains("invalid response body"));
    }
}
