//! Input validation for reports, matches, and profiles.
//!
//! These are the same rules the web forms enforce. The store itself does
//! not call them: it accepts any well-typed record, and callers at the
//! input boundary (the CLI, a form handler) validate first.
//!
//! Lengths are counted in characters, not bytes.

use std::str::FromStr;

use rust_decimal::Decimal;
use thiserror::Error;

use super::matching::NewMatch;
use super::profile::NewProfile;
use super::report::{NewFoundItem, NewLostItem};

/// Minimum length of free-text descriptions of an item.
pub const MIN_FEATURES_LENGTH: usize = 10;

/// Minimum length for colors and locations.
pub const MIN_SHORT_TEXT_LENGTH: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} is required")]
    Required { field: &'static str },

    #[error("{field} must be at least {min} characters")]
    TooShort { field: &'static str, min: usize },

    #[error("{field} must be a non-negative decimal amount, got {value:?}")]
    InvalidAmount { field: &'static str, value: String },

    #[error("please enter a valid email address")]
    InvalidEmail,

    #[error("please enter a valid phone number")]
    InvalidPhone,
}

/// Types that can check themselves before being stored.
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationError>;
}

impl Validate for NewProfile {
    fn validate(&self) -> Result<(), ValidationError> {
        required("walletAddress", &self.wallet_address)?;
        required("fullName", &self.full_name)?;
        if !is_valid_phone(&self.phone_number) {
            return Err(ValidationError::InvalidPhone);
        }
        if !self.email.contains('@') {
            return Err(ValidationError::InvalidEmail);
        }
        Ok(())
    }
}

impl Validate for NewLostItem {
    fn validate(&self) -> Result<(), ValidationError> {
        required("category", &self.category)?;
        required("subcategory", &self.subcategory)?;
        required("itemType", &self.item_type)?;
        required("brand", &self.brand)?;
        min_length("color", &self.color, MIN_SHORT_TEXT_LENGTH)?;
        min_length("distinctFeatures", &self.distinct_features, MIN_FEATURES_LENGTH)?;
        min_length("location", &self.location, MIN_SHORT_TEXT_LENGTH)?;
        required("dateLost", &self.date_lost)?;
        if !self.reward_amount.trim().is_empty() {
            amount("rewardAmount", &self.reward_amount)?;
        }
        Ok(())
    }
}

impl Validate for NewFoundItem {
    fn validate(&self) -> Result<(), ValidationError> {
        required("category", &self.category)?;
        required("subcategory", &self.subcategory)?;
        required("itemType", &self.item_type)?;
        required("brand", &self.brand)?;
        min_length("color", &self.color, MIN_SHORT_TEXT_LENGTH)?;
        min_length("distinctFeatures", &self.distinct_features, MIN_FEATURES_LENGTH)?;
        min_length("locationFound", &self.location_found, MIN_SHORT_TEXT_LENGTH)?;
        required("dateFound", &self.date_found)?;
        min_length("currentLocation", &self.current_location, MIN_SHORT_TEXT_LENGTH)?;
        if let Some(reward) = &self.reward {
            amount("reward", reward)?;
        }
        Ok(())
    }
}

impl Validate for NewMatch {
    fn validate(&self) -> Result<(), ValidationError> {
        required("itemName", &self.item_name)?;
        required("otherParty", &self.other_party)?;
        if !self.reward.trim().is_empty() {
            amount("reward", &self.reward)?;
        }
        Ok(())
    }
}

fn required(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required { field });
    }
    Ok(())
}

fn min_length(field: &'static str, value: &str, min: usize) -> Result<(), ValidationError> {
    if value.chars().count() < min {
        return Err(ValidationError::TooShort { field, min });
    }
    Ok(())
}

fn amount(field: &'static str, value: &str) -> Result<(), ValidationError> {
    match Decimal::from_str(value.trim()) {
        Ok(d) if !d.is_sign_negative() => Ok(()),
        _ => Err(ValidationError::InvalidAmount {
            field,
            value: value.to_string(),
        }),
    }
}

/// North American style numbers: `5551234567`, `555-123-4567`,
/// `(555) 123-4567`, `555.123.4567`.
///
/// Each paren is optional on its own, and each separator slot takes at
/// most one of `-`, `.`, or a space.
pub fn is_valid_phone(phone: &str) -> bool {
    let bytes = phone.as_bytes();
    let mut pos = 0;

    let skip = |pos: &mut usize, allowed: &[u8]| {
        if bytes.get(*pos).is_some_and(|b| allowed.contains(b)) {
            *pos += 1;
        }
    };
    let digits = |pos: &mut usize, count: usize| -> bool {
        let end = *pos + count;
        if end > bytes.len() || !bytes[*pos..end].iter().all(u8::is_ascii_digit) {
            return false;
        }
        *pos = end;
        true
    };

    skip(&mut pos, b"(");
    if !digits(&mut pos, 3) {
        return false;
    }
    skip(&mut pos, b")");
    skip(&mut pos, b"-. ");
    if !digits(&mut pos, 3) {
        return false;
    }
    skip(&mut pos, b"-. ");
    digits(&mut pos, 4) && pos == bytes.len()
}
