//! Key-Value Store Port - Interface for durable local storage.
//!
//! Models the browser's local key-value storage: string keys, string
//! values, synchronous calls that may fail (quota exceeded, storage
//! disabled). Callers treat every failure as recoverable.

/// Errors that can occur during key-value storage operations
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("Failed to serialize store contents: {0}")]
    Serialization(String),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// Port for durable string storage.
pub trait KeyValueStore: Send + Sync {
    /// Reads a value.
    ///
    /// # Returns
    /// `Ok(None)` if the key has never been set or was removed
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Writes a value, replacing any previous one.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Removes a value. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}
