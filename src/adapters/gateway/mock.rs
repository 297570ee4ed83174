//! Mock Store Gateway for testing.
//!
//! Provides a configurable implementation of the StoreGateway port so the
//! state containers can be exercised without a network.
//!
//! # Features
//!
//! - Scripted products, categories, and login outcome
//! - Queued per-call login replies with their own latency
//! - Error injection per operation and per product id
//! - Simulated latency, globally or per product id
//! - Call tracking for verification
//!
//! # Example
//!
//! ```ignore
//! let gateway = MockStoreGateway::new()
//!     .with_token("mock-jwt-token")
//!     .with_products(vec![backpack, jacket])
//!     .with_product_delay(ProductId::new(1), Duration::from_millis(50));
//! ```

use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use tokio::time::sleep;

use crate::domain::catalog::Product;
use crate::domain::foundation::ProductId;
use crate::domain::session::{AuthToken, Credentials};
use crate::ports::{GatewayError, StoreGateway};

/// A recorded gateway call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayCall {
    CheckCredentials { username: String },
    ListProducts,
    GetProduct(ProductId),
    ListCategories,
}

#[derive(Debug)]
struct Script {
    login: Result<AuthToken, GatewayError>,
    login_replies: VecDeque<(Duration, Result<AuthToken, GatewayError>)>,
    products: Result<Vec<Product>, GatewayError>,
    categories: Result<Vec<String>, GatewayError>,
    product_errors: HashMap<ProductId, GatewayError>,
    product_delays: HashMap<ProductId, Duration>,
    delay: Duration,
}

impl Default for Script {
    fn default() -> Self {
        Self {
            login: Err(GatewayError::status(401, None)),
            login_replies: VecDeque::new(),
            products: Ok(Vec::new()),
            categories: Ok(Vec::new()),
            product_errors: HashMap::new(),
            product_delays: HashMap::new(),
            delay: Duration::ZERO,
        }
    }
}

/// Mock store gateway for testing.
///
/// Clones share the same script and call log.
#[derive(Debug, Clone, Default)]
pub struct MockStoreGateway {
    script: Arc<Mutex<Script>>,
    calls: Arc<Mutex<Vec<GatewayCall>>>,
}

impl MockStoreGateway {
    /// Creates a gateway that rejects logins and serves an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    fn script(&self) -> std::sync::MutexGuard<'_, Script> {
        self.script.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Logins succeed with this token.
    pub fn with_token(self, token: impl Into<String>) -> Self {
        self.set_login_result(Ok(AuthToken::new(token)));
        self
    }

    /// Logins fail with this error.
    pub fn with_login_error(self, error: GatewayError) -> Self {
        self.set_login_result(Err(error));
        self
    }

    pub fn with_products(self, products: Vec<Product>) -> Self {
        self.set_products(Ok(products));
        self
    }

    pub fn with_products_error(self, error: GatewayError) -> Self {
        self.set_products(Err(error));
        self
    }

    pub fn with_categories<S: Into<String>>(self, categories: impl IntoIterator<Item = S>) -> Self {
        self.set_categories(Ok(categories.into_iter().map(Into::into).collect()));
        self
    }

    pub fn with_categories_error(self, error: GatewayError) -> Self {
        self.set_categories(Err(error));
        self
    }

    /// Lookups of `id` fail with `error` even if the product is scripted.
    pub fn with_product_error(self, id: ProductId, error: GatewayError) -> Self {
        self.script().product_errors.insert(id, error);
        self
    }

    /// Lookups of `id` take this long.
    pub fn with_product_delay(self, id: ProductId, delay: Duration) -> Self {
        self.script().product_delays.insert(id, delay);
        self
    }

    /// Every call takes at least this long.
    pub fn with_delay(self, delay: Duration) -> Self {
        self.script().delay = delay;
        self
    }

    /// Queues a reply for the next unanswered login, delivered after
    /// `delay`. Queued replies are used before the scripted outcome.
    pub fn with_login_reply(
        self,
        delay: Duration,
        result: Result<AuthToken, GatewayError>,
    ) -> Self {
        self.script().login_replies.push_back((delay, result));
        self
    }

    pub fn set_login_result(&self, result: Result<AuthToken, GatewayError>) {
        self.script().login = result;
    }

    pub fn set_products(&self, result: Result<Vec<Product>, GatewayError>) {
        self.script().products = result;
    }

    pub fn set_categories(&self, result: Result<Vec<String>, GatewayError>) {
        self.script().categories = result;
    }

    /// Returns all calls made so far, in order.
    pub fn calls(&self) -> Vec<GatewayCall> {
        self.calls.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    fn record(&self, call: GatewayCall) {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(call);
    }

    async fn pause(&self, extra: Duration) {
        let total = self.script().delay + extra;
        if !total.is_zero() {
            sleep(total).await;
        }
    }
}

#[async_trait]
impl StoreGateway for MockStoreGateway {
    async fn check_credentials(
        &self,
        credentials: &Credentials,
    ) -> Result<AuthToken, GatewayError> {
        self.record(GatewayCall::CheckCredentials {
            username: credentials.username().to_string(),
        });
        let queued = self.script().login_replies.pop_front();
        match queued {
            Some((delay, result)) => {
                self.pause(delay).await;
                result
            }
            None => {
                self.pause(Duration::ZERO).await;
                self.script().login.clone()
            }
        }
    }

    async fn list_products(&self) -> Result<Vec<Product>, GatewayError> {
        self.record(GatewayCall::ListProducts);
        self.pause(Duration::ZERO).await;
        self.script().products.clone()
    }

    async fn get_product(&self, id: ProductId) -> Result<Product, GatewayError> {
        self.record(GatewayCall::GetProduct(id));
        let extra = self
            .script()
            .product_delays
            .get(&id)
            .copied()
            .unwrap_or_default();
        self.pause(extra).await;

        let script = self.script();
        if let Some(error) = script.product_errors.get(&id) {
            return Err(error.clone());
        }
        match &script.products {
            Ok(products) => products
                .iter()
                .find(|product| product.id == id)
                .cloned()
                .ok_or_else(|| GatewayError::not_found(None)),
            Err(error) => Err(error.clone()),
        }
    }

    async fn list_categories(&self) -> Result<Vec<String>, GatewayError> {
        self.record(GatewayCall::ListCategories);
        self.pause(Duration::ZERO).await;
        self.script().categories.clone()
    }
}
