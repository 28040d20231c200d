//! User profiles, one per wallet address.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::report::replace;

/// Sign-up form contents.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProfile {
    pub wallet_address: String,
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub university: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Always lowercase.
    pub wallet_address: String,
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub university: Option<String>,
    pub created_at: DateTime<Utc>,
    pub is_profile_complete: bool,
}

impl UserProfile {
    /// Build a complete profile, normalizing the address to lowercase.
    pub fn from_new(new: NewProfile, created_at: DateTime<Utc>) -> Self {
        Self {
            wallet_address: new.wallet_address.to_lowercase(),
            full_name: new.full_name,
            email: new.email,
            phone_number: new.phone_number,
            university: new.university,
            created_at,
            is_profile_complete: true,
        }
    }
}

/// Partial profile update. The address and creation time are fixed.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub university: Option<String>,
    pub is_profile_complete: Option<bool>,
}

impl ProfileUpdate {
    /// The contact fields of a sign-up form, as re-submitted by a
    /// returning user. A missing university clears the stored one.
    pub fn contact_details(new: &NewProfile) -> Self {
        Self {
            full_name: Some(new.full_name.clone()),
            email: Some(new.email.clone()),
            phone_number: Some(new.phone_number.clone()),
            university: Some(new.university.clone().unwrap_or_default()),
            is_profile_complete: None,
        }
    }

    pub fn apply(self, profile: &mut UserProfile) {
        replace(&mut profile.full_name, self.full_name);
        replace(&mut profile.email, self.email);
        replace(&mut profile.phone_number, self.phone_number);
        // Some("") clears the field.
        if let Some(university) = self.university {
            profile.university = Some(university).filter(|u| !u.trim().is_empty());
        }
        replace(&mut profile.is_profile_complete, self.is_profile_complete);
    }
}
