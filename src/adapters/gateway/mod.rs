//! Store gateway adapters.
//!
//! Implementations of the `StoreGateway` port:
//!
//! - `http` - reqwest client for the fake store REST API
//! - `mock` - Scripted in-process gateway for tests and offline runs

mod dto;
mod http;
mod mock;

pub use http::{HttpStoreGateway, HttpStoreGatewayConfig, DEFAULT_BASE_URL};
pub use mock::{GatewayCall, MockStoreGateway};
