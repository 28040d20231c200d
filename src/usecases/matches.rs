//! Match record operations.
//!
//! Matches are recorded, never computed: `add_match` stores exactly the
//! record the caller supplies and logs one `match` activity.

use tracing::{info, instrument};

use super::data_store::{DataStore, StoreError};
use crate::domain::activity::NewActivity;
use crate::domain::address::{MATCHES_KEY, WalletAddress};
use crate::domain::ids::{MATCH_PREFIX, generate_id};
use crate::domain::matching::{Match, MatchUpdate, NewMatch};
use crate::ports::clock::Clock;
use crate::ports::storage::KeyValueStorage;

impl<S: KeyValueStorage, C: Clock> DataStore<S, C> {
    pub fn matches(&self, user: &WalletAddress) -> Vec<Match> {
        self.read_or_else(&user.key_for(MATCHES_KEY), Vec::new)
    }

    #[instrument(skip_all, fields(user = %user, item = %new.item_name))]
    pub fn add_match(&self, new: NewMatch, user: &WalletAddress) -> Result<Match, StoreError> {
        let activity = NewActivity::match_found(&new.item_name);
        let record = Match::from_new(new, generate_id(MATCH_PREFIX, self.clock.now()));

        let mut matches = self.matches(user);
        matches.push(record.clone());
        self.write(&user.key_for(MATCHES_KEY), &matches)?;
        info!(id = %record.id, status = ?record.status, "Match recorded");

        self.add_activity(activity, user)?;
        Ok(record)
    }

    /// Returns `Ok(false)` if the user has no match with `id`.
    #[instrument(skip_all, fields(user = %user, id = %id))]
    pub fn update_match(
        &self,
        id: &str,
        update: MatchUpdate,
        user: &WalletAddress,
    ) -> Result<bool, StoreError> {
        self.update_record(&user.key_for(MATCHES_KEY), id, |record: &mut Match| {
            update.apply(record);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryStorage;
    use crate::domain::activity::ActivityKind;
    use crate::domain::matching::MatchStatus;

    fn umbrella() -> NewMatch {
        NewMatch {
            item_name: "Blue Umbrella".into(),
            match_date: "2024-03-02".into(),
            status: MatchStatus::PendingConfirmation,
            reward: "0.010".into(),
            other_party: "0xdef".into(),
            lost_report_id: Some("lost_1_a".into()),
            found_report_id: Some("found_2_b".into()),
        }
    }

    #[test]
    fn test_add_match_logs_activity() {
        let store = DataStore::new(InMemoryStorage::new());
        let user = WalletAddress::new("0xabc").unwrap();
        let record = store.add_match(umbrella(), &user).unwrap();

        assert!(record.id.starts_with("match_"));
        assert_eq!(record.found_report_id.as_deref(), Some("found_2_b"));
        let log = store.activity(&user);
        assert_eq!(log.len(), 1);
        assert_eq!(log[0].kind, ActivityKind::Match);
        assert_eq!(log[0].message, "Match found for Blue Umbrella");
    }

    #[test]
    fn test_confirm_match() {
        let store = DataStore::new(InMemoryStorage::new());
        let user = WalletAddress::new("0xabc").unwrap();
        let record = store.add_match(umbrella(), &user).unwrap();

        assert!(store
            .update_match(&record.id, MatchUpdate::status(MatchStatus::Confirmed), &user)
            .unwrap());
        assert_eq!(store.matches(&user)[0].status, MatchStatus::Confirmed);
    }
}
