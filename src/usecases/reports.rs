//! Lost and found report operations.
//!
//! Adding a report appends it to the user's list and logs one `report`
//! activity. Updating never logs activity.

use tracing::{info, instrument};

use super::data_store::{DataStore, StoreError};
use crate::domain::activity::NewActivity;
use crate::domain::address::{FOUND_ITEMS_KEY, LOST_ITEMS_KEY, WalletAddress};
use crate::domain::ids::{FOUND_PREFIX, LOST_PREFIX, generate_id};
use crate::domain::report::{
    FoundItemReport, FoundItemUpdate, LostItemReport, LostItemUpdate, NewFoundItem, NewLostItem,
};
use crate::ports::clock::Clock;
use crate::ports::storage::KeyValueStorage;

impl<S: KeyValueStorage, C: Clock> DataStore<S, C> {
    /// The user's lost item reports, oldest first.
    pub fn lost_items(&self, user: &WalletAddress) -> Vec<LostItemReport> {
        self.read_or_else(&user.key_for(LOST_ITEMS_KEY), Vec::new)
    }

    /// File a lost item report for `user`.
    #[instrument(skip_all, fields(user = %user, item = %report.item_type))]
    pub fn add_lost_item(
        &self,
        report: NewLostItem,
        user: &WalletAddress,
    ) -> Result<LostItemReport, StoreError> {
        let key = user.key_for(LOST_ITEMS_KEY);
        let now = self.clock.now();
        let activity = NewActivity::lost_reported(&report.item_type, &report.brand);

        let record = LostItemReport::from_new(
            report,
            generate_id(LOST_PREFIX, now),
            now,
            Some(user.as_str().to_string()),
        );

        let mut items = self.lost_items(user);
        items.push(record.clone());
        self.write(&key, &items)?;
        info!(id = %record.id, total = items.len(), "Lost item reported");

        self.add_activity(activity, user)?;
        Ok(record)
    }

    /// Merge `update` into the lost report with `id`.
    ///
    /// Returns `Ok(false)` if the user has no such report.
    #[instrument(skip_all, fields(user = %user, id = %id))]
    pub fn update_lost_item(
        &self,
        id: &str,
        update: LostItemUpdate,
        user: &WalletAddress,
    ) -> Result<bool, StoreError> {
        self.update_record(&user.key_for(LOST_ITEMS_KEY), id, |report: &mut LostItemReport| {
            update.apply(report);
        })
    }

    /// The user's found item reports, oldest first.
    pub fn found_items(&self, user: &WalletAddress) -> Vec<FoundItemReport> {
        self.read_or_else(&user.key_for(FOUND_ITEMS_KEY), Vec::new)
    }

    /// File a found item report for `user`.
    #[instrument(skip_all, fields(user = %user, item = %report.item_type))]
    pub fn add_found_item(
        &self,
        report: NewFoundItem,
        user: &WalletAddress,
    ) -> Result<FoundItemReport, StoreError> {
        let key = user.key_for(FOUND_ITEMS_KEY);
        let now = self.clock.now();
        let activity = NewActivity::found_reported(&report.item_type, &report.brand);

        let record = FoundItemReport::from_new(
            report,
            generate_id(FOUND_PREFIX, now),
            now,
            Some(user.as_str().to_string()),
        );

        let mut items = self.found_items(user);
        items.push(record.clone());
        self.write(&key, &items)?;
        info!(id = %record.id, total = items.len(), "Found item reported");

        self.add_activity(activity, user)?;
        Ok(record)
    }

    /// Merge `update` into the found report with `id`.
    ///
    /// Returns `Ok(false)` if the user has no such report.
    #[instrument(skip_all, fields(user = %user, id = %id))]
    pub fn update_found_item(
        &self,
        id: &str,
        update: FoundItemUpdate,
        user: &WalletAddress,
    ) -> Result<bool, StoreError> {
        self.update_record(&user.key_for(FOUND_ITEMS_KEY), id, |report: &mut FoundItemReport| {
            update.apply(report);
        })
    }
}
