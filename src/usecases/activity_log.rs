//! Activity log operations.

use std::fmt::Write as _;

use chrono::{DateTime, Local, Utc};
use tracing::{debug, instrument, warn};

use super::data_store::{DEFAULT_ACTIVITY_TIMESTAMP_FORMAT, DataStore, StoreError};
use crate::domain::activity::{Activity, NewActivity, push_capped};
use crate::domain::address::{ACTIVITY_KEY, WalletAddress};
use crate::domain::ids::{ACTIVITY_PREFIX, generate_id};
use crate::ports::clock::Clock;
use crate::ports::storage::KeyValueStorage;

impl<S: KeyValueStorage, C: Clock> DataStore<S, C> {
    /// The user's activity, newest first.
    pub fn activity(&self, user: &WalletAddress) -> Vec<Activity> {
        self.read_or_else(&user.key_for(ACTIVITY_KEY), Vec::new)
    }

    /// Prepend an entry to the user's activity log.
    ///
    /// The log is trimmed to `StoreOptions::activity_cap` entries,
    /// dropping the oldest.
    #[instrument(skip_all, fields(user = %user, kind = ?activity.kind))]
    pub fn add_activity(
        &self,
        activity: NewActivity,
        user: &WalletAddress,
    ) -> Result<Activity, StoreError> {
        let now = self.clock.now();
        let entry = Activity {
            id: generate_id(ACTIVITY_PREFIX, now),
            kind: activity.kind,
            message: activity.message,
            timestamp: render_timestamp(now, &self.options.activity_timestamp_format),
        };

        let mut log = self.activity(user);
        push_capped(&mut log, entry.clone(), self.options.activity_cap);
        self.write(&user.key_for(ACTIVITY_KEY), &log)?;

        debug!(id = %entry.id, retained = log.len(), "Activity recorded");
        Ok(entry)
    }
}

/// Local-time display stamp. An invalid format falls back to the default.
fn render_timestamp(now: DateTime<Utc>, format: &str) -> String {
    let local = now.with_timezone(&Local);
    let mut out = String::new();
    if write!(out, "{}", local.format(format)).is_ok() {
        return out;
    }
    warn!(format, "Invalid activity timestamp format, using default");
    local.format(DEFAULT_ACTIVITY_TIMESTAMP_FORMAT).to_string()
}
