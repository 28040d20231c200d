//! Storage Adapters - Implementations of the `KeyValueStorage` port
//!
//! - `InMemoryStorage`: process-local map
//! - `JsonFileStorage`: one atomically-written JSON file per key
//! - `UnavailableStorage`: no storage at all

pub mod json_file;
pub mod memory;
pub mod unavailable;

pub use json_file::JsonFileStorage;
pub use memory::InMemoryStorage;
pub use unavailable::UnavailableStorage;
