//! Wallet addresses and per-user storage keys.
//!
//! Every per-user collection lives under `"{base}_{lowercase(address)}"`.
//! The address itself keeps the casing the wallet provider handed us,
//! because reports record `user_address` exactly as given.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Base key for lost item reports.
pub const LOST_ITEMS_KEY: &str = "lostchain_lost_items";
/// Base key for found item reports.
pub const FOUND_ITEMS_KEY: &str = "lostchain_found_items";
/// Base key for the activity log.
pub const ACTIVITY_KEY: &str = "lostchain_activity";
/// Base key for match records.
pub const MATCHES_KEY: &str = "lostchain_matches";
/// Global (not per-user) key holding the address → profile map.
pub const USER_PROFILES_KEY: &str = "lostchain_user_profiles";

/// The four base keys cleared by `clear_all_data`.
pub const PER_USER_KEYS: [&str; 4] = [LOST_ITEMS_KEY, FOUND_ITEMS_KEY, ACTIVITY_KEY, MATCHES_KEY];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    #[error("wallet address must not be blank")]
    Blank,
}

/// A connected wallet's address.
///
/// Equality is case-insensitive: `0xABC` and `0xabc` name the same user.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct WalletAddress {
    raw: String,
    normalized: String,
}

impl WalletAddress {
    /// Wrap a wallet address, rejecting blank input.
    pub fn new(raw: impl Into<String>) -> Result<Self, AddressError> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(AddressError::Blank);
        }
        let normalized = raw.to_lowercase();
        Ok(Self { raw, normalized })
    }

    /// Address as originally supplied.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Lowercased form used in storage keys and the profile map.
    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    /// Storage key for one of this user's collections.
    pub fn key_for(&self, base: &str) -> String {
        format!("{base}_{}", self.normalized)
    }
}

impl PartialEq for WalletAddress {
    fn eq(&self, other: &Self) -> bool {
        self.normalized == other.normalized
    }
}

impl Eq for WalletAddress {}

impl std::hash::Hash for WalletAddress {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.normalized.hash(state);
    }
}

impl fmt::Display for WalletAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl std::str::FromStr for WalletAddress {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for WalletAddress {
    type Error = AddressError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<WalletAddress> for String {
    fn from(value: WalletAddress) -> Self {
        value.raw
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_is_lowercased() {
        let addr = WalletAddress::new("0xABCdef").unwrap();
        assert_eq!(addr.as_str(), "0xABCdef");
        assert_eq!(addr.key_for(LOST_ITEMS_KEY), "lostchain_lost_items_0xabcdef");
    }

    #[test]
    fn test_blank_rejected() {
        assert_eq!(WalletAddress::new("   "), Err(AddressError::Blank));
        assert!("".parse::<WalletAddress>().is_err());
    }

    #[test]
    fn test_case_insensitive_equality() {
        let a = WalletAddress::new("0xABC").unwrap();
        let b = WalletAddress::new("0xabc").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.to_string(), "0xABC");
    }
}
