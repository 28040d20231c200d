//! Use Cases Layer - Application Business Logic
//!
//! Implements every store operation against the storage and clock
//! ports. All operations hang off one facade type, `DataStore`, split
//! across modules by the collection they touch.
//!
//! Modules:
//! - `data_store`: the facade, JSON plumbing, `clear_all_data`
//! - `reports`: lost and found reports
//! - `activity_log`: capped, newest-first activity
//! - `matches`: caller-supplied match records
//! - `profiles`: the global profile map
//! - `dashboard`: stats and the combined dashboard read

pub mod activity_log;
pub mod dashboard;
pub mod data_store;
pub mod matches;
pub mod profiles;
pub mod reports;

pub use dashboard::Dashboard;
pub use data_store::{DataStore, StoreError, StoreOptions};
