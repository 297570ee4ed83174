//! Application layer - state containers and their composition.
//!
//! Containers own the storefront state and are the only way to change it.
//! They call the gateway, apply domain reducers to the result, and mirror
//! the durable parts into key-value storage.

mod containers;
mod storefront;

pub use containers::{CatalogContainer, RatingsContainer, SessionContainer};
pub use storefront::{
    AccessError, StorageKeys, Storefront, DEFAULT_RATINGS_KEY, DEFAULT_TOKEN_KEY,
};
