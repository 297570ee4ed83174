//! Storefront State - client-side state for a small online store
//!
//! This crate holds the state behind a storefront UI: the login session,
//! the product catalog with its category filter and sort order, and the
//! user's own product ratings. It talks to the store API through the
//! [`ports::StoreGateway`] port and persists the session token and ratings
//! through the [`ports::KeyValueStore`] port.

pub mod adapters;
pub mod application;
pub mod bootstrap;
pub mod config;
pub mod domain;
pub mod ports;
