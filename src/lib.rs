//! Lostchain Store — Library Root
//!
//! Per-user persistence for a lost-and-found marketplace: profiles,
//! lost/found reports, a capped activity log, match records, and
//! derived stats, behind a pluggable key-value storage port.

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod usecases;

pub use usecases::{Dashboard, DataStore, StoreError, StoreOptions};
