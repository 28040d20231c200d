//! Backend for environments with no persistent storage at all.
//!
//! Every operation fails with `StorageError::Unavailable`. The store
//! turns that into empty reads, so a host without storage still renders
//! an empty dashboard instead of failing.

use crate::ports::storage::{KeyValueStorage, StorageError};

#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableStorage;

impl KeyValueStorage for UnavailableStorage {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }

    fn remove(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }

    fn is_available(&self) -> bool {
        false
    }
}
