//! HTTP Store Gateway - Implementation of StoreGateway over the store REST API.
//!
//! # Configuration
//!
//! ```ignore
//! let config = HttpStoreGatewayConfig::new("https://fakestoreapi.com")
//!     .with_timeout(Duration::from_secs(10));
//!
//! let gateway = HttpStoreGateway::new(config)?;
//! ```
//!
//! # Endpoints
//!
//! - `POST /auth/login` with `{username, password}` returns `{token}`
//! - `GET /products`, `GET /products/{id}`, `GET /products/categories`
//!
//! The API answers a lookup of an unknown product id with `200` and an
//! empty body; that is reported as a 404 so callers see one shape for
//! "not found".

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;

use super::dto::{ErrorBody, LoginRequest, TokenResponse};
use crate::domain::catalog::Product;
use crate::domain::foundation::ProductId;
use crate::domain::session::{AuthToken, Credentials};
use crate::ports::{GatewayError, StoreGateway};

/// Public demo store API.
pub const DEFAULT_BASE_URL: &str = "https://fakestoreapi.com";

/// Configuration for the HTTP gateway.
#[derive(Debug, Clone)]
pub struct HttpStoreGatewayConfig {
    /// Base URL without trailing slash.
    pub base_url: String,
    /// Per-request timeout. `None` waits indefinitely.
    pub timeout: Option<Duration>,
}

impl HttpStoreGatewayConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout: None,
        }
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

impl Default for HttpStoreGatewayConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

/// reqwest-backed store gateway.
#[derive(Debug, Clone)]
pub struct HttpStoreGateway {
    config: HttpStoreGatewayConfig,
    client: Client,
}

impl HttpStoreGateway {
    /// Creates a gateway with the given configuration.
    pub fn new(config: HttpStoreGatewayConfig) -> Result<Self, GatewayError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| GatewayError::transport(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    /// Sends a request, translating transport failures.
    async fn send(&self, request: RequestBuilder) -> Result<Response, GatewayError> {
        request.send().await.map_err(|e| {
            if e.is_timeout() {
                GatewayError::transport(format!("request timed out: {}", e))
            } else if e.is_connect() {
                GatewayError::transport(format!("Connection failed: {}", e))
            } else {
                GatewayError::transport(e.to_string())
            }
        })
    }

    /// Reads the body, turning non-success statuses into errors.
    async fn read_body(response: Response) -> Result<String, GatewayError> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| GatewayError::transport(format!("failed to read body: {}", e)))?;

        if status.is_success() {
            Ok(body)
        } else {
            Err(GatewayError::status(
                status.as_u16(),
                ErrorBody::message_from(&body),
            ))
        }
    }

    fn decode<T: DeserializeOwned>(body: &str) -> Result<T, GatewayError> {
        serde_json::from_str(body).map_err(|e| GatewayError::decode(e.to_string()))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, GatewayError> {
        let url = self.url(path);
        tracing::debug!(%url, "GET");
        let response = self.send(self.client.get(&url)).await?;
        let body = Self::read_body(response).await?;
        Self::decode(&body)
    }
}

#[async_trait]
impl StoreGateway for HttpStoreGateway {
    async fn check_credentials(
        &self,
        credentials: &Credentials,
    ) -> Result<AuthToken, GatewayError> {
        let url = self.url("/auth/login");
        tracing::debug!(%url, username = credentials.username(), "POST login");

        let request = self.client.post(&url).json(&LoginRequest {
            username: credentials.username(),
            password: credentials.expose_password(),
        });
        let response = self.send(request).await?;
        let body = Self::read_body(response).await?;
        let parsed: TokenResponse = Self::decode(&body)?;

        Ok(AuthToken::new(parsed.token))
    }

    async fn list_products(&self) -> Result<Vec<Product>, GatewayError> {
        self.get_json("/products").await
    }

    async fn get_product(&self, id: ProductId) -> Result<Product, GatewayError> {
        let url = self.url(&format!("/products/{}", id));
        tracing::debug!(%url, "GET");

        let response = self.send(self.client.get(&url)).await?;
        let body = Self::read_body(response).await?;

        let trimmed = body.trim();
        if trimmed.is_empty() || trimmed == "null" {
            return Err(GatewayError::not_found(None));
        }
        Self::decode(trimmed)
    }

    async fn list_categories(&self) -> Result<Vec<String>, GatewayError> {
        self.get_json("/products/categories").await
    }
}
