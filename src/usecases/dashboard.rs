//! Stats and dashboard reads.

use serde::Serialize;

use super::data_store::DataStore;
use crate::domain::activity::Activity;
use crate::domain::address::WalletAddress;
use crate::domain::matching::Match;
use crate::domain::profile::UserProfile;
use crate::domain::report::{FoundItemReport, LostItemReport};
use crate::domain::stats::UserStats;
use crate::ports::clock::Clock;
use crate::ports::storage::KeyValueStorage;

/// Everything the dashboard shows for one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub profile: Option<UserProfile>,
    pub stats: UserStats,
    pub found_items: Vec<FoundItemReport>,
    pub lost_items: Vec<LostItemReport>,
    pub matches: Vec<Match>,
    pub activity: Vec<Activity>,
}

impl<S: KeyValueStorage, C: Clock> DataStore<S, C> {
    /// Counts and reward totals, recomputed from storage on every call.
    pub fn stats(&self, user: &WalletAddress) -> UserStats {
        UserStats::compute(
            &self.lost_items(user),
            &self.found_items(user),
            &self.matches(user),
        )
    }

    pub fn dashboard(&self, user: &WalletAddress) -> Dashboard {
        let lost_items = self.lost_items(user);
        let found_items = self.found_items(user);
        let matches = self.matches(user);

        Dashboard {
            profile: self.profile(user),
            stats: UserStats::compute(&lost_items, &found_items, &matches),
            found_items,
            lost_items,
            matches,
            activity: self.activity(user),
        }
    }
}
