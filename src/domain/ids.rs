//! Record identifiers: `"{prefix}_{unix_ms}_{suffix}"`.
//!
//! The suffix is nine random hex characters taken from a v4 UUID.
//! Uniqueness is advisory; nothing in the store checks for collisions.

use chrono::{DateTime, Utc};
use uuid::Uuid;

pub const LOST_PREFIX: &str = "lost";
pub const FOUND_PREFIX: &str = "found";
pub const ACTIVITY_PREFIX: &str = "activity";
pub const MATCH_PREFIX: &str = "match";

const SUFFIX_LEN: usize = 9;

/// Records addressed by id within a collection.
pub trait Identified {
    fn id(&self) -> &str;
}

/// Build a fresh id for a record created at `now`.
pub fn generate_id(prefix: &str, now: DateTime<Utc>) -> String {
    let random = Uuid::new_v4().simple().to_string();
    format!("{prefix}_{}_{}", now.timestamp_millis(), &random[..SUFFIX_LEN])
}

impl Identified for super::report::LostItemReport {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Identified for super::report::FoundItemReport {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Identified for super::matching::Match {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Identified for super::activity::Activity {
    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_id_shape() {
        let now = Utc.timestamp_millis_opt(1_700_000_000_123).unwrap();
        let id = generate_id(LOST_PREFIX, now);
        let parts: Vec<&str> = id.split('_').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "lost");
        assert_eq!(parts[1], "1700000000123");
        assert_eq!(parts[2].len(), 9);
    }

    #[test]
    fn test_ids_differ_at_same_instant() {
        let now = Utc::now();
        assert_ne!(generate_id(MATCH_PREFIX, now), generate_id(MATCH_PREFIX, now));
    }
}
