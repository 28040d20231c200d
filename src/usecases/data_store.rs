//! Data Store - Per-user Persistence Facade
//!
//! `DataStore` owns a storage backend and a clock and exposes every
//! store operation. The operations themselves live in sibling modules
//! (`reports`, `activity_log`, `matches`, `profiles`, `dashboard`) as
//! further `impl` blocks on this type; this module holds the shared
//! JSON read/write plumbing and the maintenance operations.
//!
//! Reads never fail: a missing key, an unavailable backend, or a
//! document that no longer parses all yield the caller's default.
//! Writes return `StoreError` so callers can decide whether a lost
//! write matters to them.

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, info, instrument, warn};

use crate::adapters::clock::SystemClock;
use crate::domain::activity::DEFAULT_ACTIVITY_CAP;
use crate::domain::address::{AddressError, PER_USER_KEYS, WalletAddress};
use crate::domain::ids::Identified;
use crate::ports::clock::Clock;
use crate::ports::storage::{KeyValueStorage, StorageError};

/// en-US `toLocaleString()` style: `3/1/2024, 2:05:09 PM`.
pub const DEFAULT_ACTIVITY_TIMESTAMP_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

/// Failure to persist a change.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to write storage key {key:?}")]
    Storage {
        key: String,
        #[source]
        source: StorageError,
    },

    #[error("failed to serialize value for storage key {key:?}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Address(#[from] AddressError),
}

/// Tunables for the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreOptions {
    /// Activity entries kept per user.
    pub activity_cap: usize,
    /// chrono format string for activity timestamps, rendered in local time.
    pub activity_timestamp_format: String,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            activity_cap: DEFAULT_ACTIVITY_CAP,
            activity_timestamp_format: DEFAULT_ACTIVITY_TIMESTAMP_FORMAT.to_string(),
        }
    }
}

/// The lost-and-found data store.
///
/// Generic over its storage backend and clock so hosts can pick any
/// persistence and tests can pin time.
pub struct DataStore<S, C = SystemClock> {
    pub(crate) storage: S,
    pub(crate) clock: C,
    pub(crate) options: StoreOptions,
}

impl<S: KeyValueStorage> DataStore<S, SystemClock> {
    /// Create a store over `storage` using the system clock.
    pub fn new(storage: S) -> Self {
        Self::with_clock(storage, SystemClock)
    }
}

impl<S: KeyValueStorage, C: Clock> DataStore<S, C> {
    pub fn with_clock(storage: S, clock: C) -> Self {
        Self {
            storage,
            clock,
            options: StoreOptions::default(),
        }
    }

    #[must_use]
    pub fn with_options(mut self, options: StoreOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &StoreOptions {
        &self.options
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Whether the backend can persist anything.
    pub fn is_healthy(&self) -> bool {
        self.storage.is_available()
    }

    /// Remove the user's lost, found, activity, and match collections.
    ///
    /// Profiles live under a global key and are left untouched.
    #[instrument(skip_all, fields(user = %user))]
    pub fn clear_all_data(&self, user: &WalletAddress) -> Result<(), StoreError> {
        for base in PER_USER_KEYS {
            self.remove(&user.key_for(base))?;
        }
        info!("Cleared all per-user collections");
        Ok(())
    }

    // ── JSON plumbing ───────────────────────────────────────

    /// Deserialize the document under `key`, or fall back to `default()`.
    pub(crate) fn read_or_else<T, F>(&self, key: &str, default: F) -> T
    where
        T: DeserializeOwned,
        F: FnOnce() -> T,
    {
        let raw = match self.storage.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return default(),
            Err(StorageError::Unavailable) => {
                debug!(key, "Storage unavailable, using default");
                return default();
            }
            Err(e) => {
                warn!(key, error = %e, "Failed to read storage key, using default");
                return default();
            }
        };

        serde_json::from_str(&raw).unwrap_or_else(|e| {
            warn!(key, error = %e, "Stored value does not parse, using default");
            default()
        })
    }

    pub(crate) fn write<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let json = serde_json::to_string(value).map_err(|source| {
            warn!(key, error = %source, "Failed to serialize value");
            StoreError::Serialize {
                key: key.to_string(),
                source,
            }
        })?;

        self.storage.set(key, &json).map_err(|source| {
            warn!(key, error = %source, "Failed to write storage key");
            StoreError::Storage {
                key: key.to_string(),
                source,
            }
        })?;

        debug!(key, bytes = json.len(), "Storage key written");
        Ok(())
    }

    pub(crate) fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.storage.remove(key).map_err(|source| {
            warn!(key, error = %source, "Failed to remove storage key");
            StoreError::Storage {
                key: key.to_string(),
                source,
            }
        })
    }

    /// Apply `change` to the record with `id` in the list under `key`.
    ///
    /// Returns `Ok(false)` without writing when no record has that id.
    pub(crate) fn update_record<T, F>(&self, key: &str, id: &str, change: F) -> Result<bool, StoreError>
    where
        T: Serialize + DeserializeOwned + Identified,
        F: FnOnce(&mut T),
    {
        let mut records: Vec<T> = self.read_or_else(key, Vec::new);
        let Some(record) = records.iter_mut().find(|r| r.id() == id) else {
            debug!(key, id, "No record with this id, nothing updated");
            return Ok(false);
        };
        change(record);
        self.write(key, &records)?;
        Ok(true)
    }
}
