//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the storefront state and the outside world. Adapters implement these ports.
//!
//! - `StoreGateway` - The remote store API (credentials, products, categories)
//! - `KeyValueStore` - Durable local string storage (session token, user ratings)

mod key_value_store;
mod store_gateway;

pub use key_value_store::{KeyValueStore, StorageError};
pub use store_gateway::{GatewayError, StoreGateway};
