//! Ports Layer - Hexagonal Architecture Boundaries
//!
//! Defines the interfaces (traits) that the usecases layer requires
//! from the outside world. Adapters implement these traits.
//!
//! Port categories:
//! - `KeyValueStorage`: String persistence per key
//! - `Clock`: Wall-clock time for ids and timestamps

pub mod clock;
pub mod storage;

pub use clock::Clock;
pub use storage::{KeyValueStorage, StorageError};
