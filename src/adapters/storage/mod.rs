//! Storage Adapters
//!
//! Implementations of the KeyValueStore port.
//!
//! ## Available Adapters
//!
//! - **FileKeyValueStore** - Stores all entries in one YAML file on disk
//! - **InMemoryKeyValueStore** - Stores entries in memory (testing/development)
//! - **UnavailableKeyValueStore** - Fails every call (storage disabled)
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{FileKeyValueStore, InMemoryKeyValueStore};
//!
//! // Production: file-backed storage
//! let storage = FileKeyValueStore::new("./data/storefront.yaml");
//!
//! // Testing: in-memory storage
//! let storage = InMemoryKeyValueStore::new();
//! ```

mod file_key_value_store;
mod in_memory_key_value_store;
mod unavailable_key_value_store;

pub use file_key_value_store::FileKeyValueStore;
pub use in_memory_key_value_store::InMemoryKeyValueStore;
pub use unavailable_key_value_store::UnavailableKeyValueStore;
