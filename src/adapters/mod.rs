//! Adapters Layer - Hexagonal Architecture Outer Ring
//!
//! Implements the port traits defined in `crate::ports` with concrete
//! infrastructure (memory, files, the system clock).
//!
//! Adapter categories:
//! - `storage`: key-value backends for the store
//! - `clock`: system and fixed clocks

pub mod clock;
pub mod storage;

pub use clock::{FixedClock, SystemClock};
pub use storage::{InMemoryStorage, JsonFileStorage, UnavailableStorage};
