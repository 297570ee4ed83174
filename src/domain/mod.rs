//! Domain layer containing the storefront state and its pure reducers.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (ids, state machine trait, validation errors)
//! - `session` - Authentication token and login lifecycle
//! - `catalog` - Product list, filter/sort derivation, detail view state
//! - `ratings` - Local user-assigned star ratings

pub mod catalog;
pub mod foundation;
pub mod ratings;
pub mod session;
