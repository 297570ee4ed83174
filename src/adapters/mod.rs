//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the storefront state to external systems:
//! - `gateway` - Store API clients (HTTP, mock)
//! - `storage` - Key-value stores (file, in-memory, unavailable)

pub mod gateway;
pub mod storage;

pub use gateway::{GatewayCall, HttpStoreGateway, HttpStoreGatewayConfig, MockStoreGateway};
pub use storage::{FileKeyValueStore, InMemoryKeyValueStore, UnavailableKeyValueStore};
