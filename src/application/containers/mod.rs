//! State containers.
//!
//! Each container is the single owner of one slice of storefront state.
//! Mutations go through its methods, which take the container's lock only
//! for the synchronous reducer step; the lock is never held across a
//! gateway call, so a slow request does not block reads.

mod catalog;
mod ratings;
mod session;

pub use catalog::CatalogContainer;
pub use ratings::RatingsContainer;
pub use session::SessionContainer;

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Read access that survives a panic in another holder.
fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

/// Write access that survives a panic in another holder.
fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}
