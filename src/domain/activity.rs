//! Activity log entries.
//!
//! The log is kept newest-first and bounded: pushing past the cap drops
//! the oldest entries from the tail.

use serde::{Deserialize, Serialize};

/// Default number of entries retained per user.
pub const DEFAULT_ACTIVITY_CAP: usize = 50;

/// What kind of event an entry describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    Match,
    Report,
    Confirmation,
    Reward,
}

/// Caller-supplied part of an activity entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewActivity {
    #[serde(rename = "type")]
    pub kind: ActivityKind,
    pub message: String,
}

impl NewActivity {
    pub fn new(kind: ActivityKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn lost_reported(item_type: &str, brand: &str) -> Self {
        Self::new(
            ActivityKind::Report,
            format!("Reported lost item: {item_type} ({brand})"),
        )
    }

    pub fn found_reported(item_type: &str, brand: &str) -> Self {
        Self::new(
            ActivityKind::Report,
            format!("Reported found item: {item_type} ({brand})"),
        )
    }

    pub fn match_found(item_name: &str) -> Self {
        Self::new(ActivityKind::Match, format!("Match found for {item_name}"))
    }
}

/// A persisted activity entry.
///
/// `timestamp` is a display string in the configured locale format,
/// not a machine-readable instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ActivityKind,
    pub message: String,
    pub timestamp: String,
}

/// Insert `entry` at the front of a newest-first log and trim to `cap`.
pub fn push_capped(log: &mut Vec<Activity>, entry: Activity, cap: usize) {
    log.insert(0, entry);
    log.truncate(cap);
}
