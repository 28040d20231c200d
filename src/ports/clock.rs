//! Clock Port - Source of Record Timestamps
//!
//! Ids, report timestamps, profile creation times, and activity display
//! strings all derive from `now()`. Tests substitute a fixed clock.

use chrono::{DateTime, Utc};

/// Trait for wall-clock providers.
pub trait Clock: Send + Sync {
  /// Current instant in UTC.
  fn now(&self) -> DateTime<Utc>;
}
