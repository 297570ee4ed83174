//! Key-value store that rejects every call.
//!
//! Stands in for disabled or full browser storage so callers' recovery
//! paths can be exercised.

use crate::ports::{KeyValueStore, StorageError};

#[derive(Debug, Clone)]
pub struct UnavailableKeyValueStore {
    reason: String,
}

impl UnavailableKeyValueStore {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl Default for UnavailableKeyValueStore {
    fn default() -> Self {
        Self::new("storage disabled")
    }
}

impl KeyValueStore for UnavailableKeyValueStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable(self.reason.clone()))
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable(self.reason.clone()))
    }

    fn remove(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable(self.reason.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_call_fails_with_reason() {
        let store = UnavailableKeyValueStore::new("quota exceeded");
        for err in [
            store.get("k").unwrap_err(),
            store.set("k", "v").unwrap_err(),
            store.remove("k").unwrap_err(),
        ] {
            assert!(err.to_string().contains("quota exceeded"));
        }
    }
}
