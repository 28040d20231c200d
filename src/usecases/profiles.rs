//! Profile operations.
//!
//! All profiles share one global document: a map from lowercased wallet
//! address to profile. Creating a profile overwrites whatever was there.

use std::collections::BTreeMap;

use tracing::{info, instrument};

use super::data_store::{DataStore, StoreError};
use crate::domain::address::{USER_PROFILES_KEY, WalletAddress};
use crate::domain::profile::{NewProfile, ProfileUpdate, UserProfile};
use crate::ports::clock::Clock;
use crate::ports::storage::KeyValueStorage;

type ProfileMap = BTreeMap<String, UserProfile>;

impl<S: KeyValueStorage, C: Clock> DataStore<S, C> {
    fn profiles(&self) -> ProfileMap {
        self.read_or_else(USER_PROFILES_KEY, ProfileMap::new)
    }

    pub fn profile(&self, address: &WalletAddress) -> Option<UserProfile> {
        self.profiles().remove(address.normalized())
    }

    /// Create (or replace) the profile for `new.wallet_address`.
    #[instrument(skip_all, fields(user = %new.wallet_address))]
    pub fn create_profile(&self, new: NewProfile) -> Result<UserProfile, StoreError> {
        let address = WalletAddress::new(new.wallet_address.as_str())?;
        let profile = UserProfile::from_new(new, self.clock.now());

        let mut profiles = self.profiles();
        let replaced = profiles
            .insert(address.normalized().to_string(), profile.clone())
            .is_some();
        self.write(USER_PROFILES_KEY, &profiles)?;

        info!(replaced, "Profile created");
        Ok(profile)
    }

    /// Merge `update` into an existing profile.
    ///
    /// Returns `Ok(None)` without writing when the address has no profile.
    #[instrument(skip_all, fields(user = %address))]
    pub fn update_profile(
        &self,
        address: &WalletAddress,
        update: ProfileUpdate,
    ) -> Result<Option<UserProfile>, StoreError> {
        let mut profiles = self.profiles();
        let Some(profile) = profiles.get_mut(address.normalized()) else {
            return Ok(None);
        };
        update.apply(profile);
        let updated = profile.clone();
        self.write(USER_PROFILES_KEY, &profiles)?;
        Ok(Some(updated))
    }

    pub fn is_profile_complete(&self, address: &WalletAddress) -> bool {
        self.profile(address).is_some_and(|p| p.is_profile_complete)
    }

    /// Sign-up form submission: refresh a returning user's contact
    /// details, or create the profile for a new one.
    ///
    /// A returning user keeps their original `created_at`.
    pub fn save_profile(&self, new: NewProfile) -> Result<UserProfile, StoreError> {
        let address = WalletAddress::new(new.wallet_address.as_str())?;
        match self.update_profile(&address, ProfileUpdate::contact_details(&new))? {
            Some(profile) => Ok(profile),
            None => self.create_profile(new),
        }
    }
}
