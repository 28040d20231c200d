//! Storage Port - String Key-Value Persistence Interface
//!
//! The store keeps every collection as one JSON document under one key.
//! Implementors only move strings; (de)serialization happens above this
//! boundary, so any backend that can hold text per key will do.

use thiserror::Error;

/// Failure reported by a storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
  /// No persistent storage exists in this environment.
  #[error("persistent storage is not available")]
  Unavailable,

  /// The backend's lock was poisoned by a panicking writer.
  #[error("storage lock poisoned during {0}")]
  LockPoisoned(&'static str),

  /// Filesystem or device error.
  #[error("storage I/O error for key {key:?}")]
  Io {
    key: String,
    #[source]
    source: std::io::Error,
  },
}

/// Trait for key-value storage backends.
///
/// Operations are synchronous and unsynchronized with each other:
/// a read-modify-write by two callers on one key loses one update.
pub trait KeyValueStorage: Send + Sync {
  /// Read the value stored under `key`.
  ///
  /// Returns `Ok(None)` when the key has never been written.
  fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

  /// Store `value` under `key`, replacing any previous value.
  fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

  /// Delete `key`. Removing an absent key is not an error.
  fn remove(&self, key: &str) -> Result<(), StorageError>;

  /// Whether this backend can persist anything at all.
  fn is_available(&self) -> bool {
    true
  }
}

impl<T: KeyValueStorage + ?Sized> KeyValueStorage for std::sync::Arc<T> {
  fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
    (**self).get(key)
  }

  fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
    (**self).set(key, value)
  }

  fn remove(&self, key: &str) -> Result<(), StorageError> {
    (**self).remove(key)
  }

  fn is_available(&self) -> bool {
    (**self).is_available()
  }
}
