//! Lost and found item reports.
//!
//! A report is created from a `New*` payload (everything the reporter
//! typed in) and stamped with id, timestamp, and `Pending` status by the
//! store. Updates are partial: every `Some` field in a `*Update` replaces
//! the stored value, `None` leaves it alone. No transition rules exist;
//! any status may follow any other.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Report lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    #[default]
    Pending,
    Matched,
    Confirmed,
}

impl std::fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Matched => write!(f, "matched"),
            Self::Confirmed => write!(f, "confirmed"),
        }
    }
}

// ────────────────────────────────────────────
// Lost items
// ────────────────────────────────────────────

/// Fields supplied by the owner of a lost item.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewLostItem {
    pub category: String,
    pub subcategory: String,
    pub item_type: String,
    pub brand: String,
    pub color: String,
    pub distinct_features: String,
    /// Where the item was last seen.
    pub location: String,
    pub date_lost: String,
    /// Reward offered, as a decimal string (e.g. `"0.010"`).
    pub reward_amount: String,
}

/// A persisted lost item report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LostItemReport {
    pub id: String,
    pub category: String,
    pub subcategory: String,
    pub item_type: String,
    pub brand: String,
    pub color: String,
    pub distinct_features: String,
    pub location: String,
    pub date_lost: String,
    pub reward_amount: String,
    pub status: ReportStatus,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_address: Option<String>,
}

impl LostItemReport {
    /// Stamp a new report. Status always starts at `Pending`.
    pub fn from_new(
        new: NewLostItem,
        id: String,
        timestamp: DateTime<Utc>,
        user_address: Option<String>,
    ) -> Self {
        Self {
            id,
            category: new.category,
            subcategory: new.subcategory,
            item_type: new.item_type,
            brand: new.brand,
            color: new.color,
            distinct_features: new.distinct_features,
            location: new.location,
            date_lost: new.date_lost,
            reward_amount: new.reward_amount,
            status: ReportStatus::Pending,
            timestamp,
            user_address,
        }
    }
}

/// Partial update of a lost item report. Id, timestamp, and owner are fixed.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LostItemUpdate {
    pub category: Option<String>,
    pub subcategory: Option<String>,
    pub item_type: Option<String>,
    pub brand: Option<String>,
    pub color: Option<String>,
    pub distinct_features: Option<String>,
    pub location: Option<String>,
    pub date_lost: Option<String>,
    pub reward_amount: Option<String>,
    pub status: Option<ReportStatus>,
}

impl LostItemUpdate {
    /// Update that only changes the status.
    pub fn status(status: ReportStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    pub fn apply(self, report: &mut LostItemReport) {
        replace(&mut report.category, self.category);
        replace(&mut report.subcategory, self.subcategory);
        replace(&mut report.item_type, self.item_type);
        replace(&mut report.brand, self.brand);
        replace(&mut report.color, self.color);
        replace(&mut report.distinct_features, self.distinct_features);
        replace(&mut report.location, self.location);
        replace(&mut report.date_lost, self.date_lost);
        replace(&mut report.reward_amount, self.reward_amount);
        replace(&mut report.status, self.status);
    }
}

// ────────────────────────────────────────────
// Found items
// ────────────────────────────────────────────

/// Fields supplied by the finder of an item.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewFoundItem {
    pub category: String,
    pub subcategory: String,
    pub item_type: String,
    pub brand: String,
    pub color: String,
    pub distinct_features: String,
    pub location_found: String,
    pub date_found: String,
    /// Where the item is being held now.
    pub current_location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finder_notes: Option<String>,
    /// Reward the finder is due, once known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reward: Option<String>,
}

/// A persisted found item report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoundItemReport {
    pub id: String,
    pub category: String,
    pub subcategory: String,
    pub item_type: String,
    pub brand: String,
    pub color: String,
    pub distinct_features: String,
    pub location_found: String,
    pub date_found: String,
    pub current_location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finder_notes: Option<String>,
    pub status: ReportStatus,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reward: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_address: Option<String>,
}

impl FoundItemReport {
    /// Stamp a new report. Status always starts at `Pending`.
    pub fn from_new(
        new: NewFoundItem,
        id: String,
        timestamp: DateTime<Utc>,
        user_address: Option<String>,
    ) -> Self {
        Self {
            id,
            category: new.category,
            subcategory: new.subcategory,
            item_type: new.item_type,
            brand: new.brand,
            color: new.color,
            distinct_features: new.distinct_features,
            location_found: new.location_found,
            date_found: new.date_found,
            current_location: new.current_location,
            finder_notes: new.finder_notes,
            status: ReportStatus::Pending,
            timestamp,
            reward: new.reward,
            user_address,
        }
    }
}

/// Partial update of a found item report. Id, timestamp, and owner are fixed.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FoundItemUpdate {
    pub category: Option<String>,
    pub subcategory: Option<String>,
    pub item_type: Option<String>,
    pub brand: Option<String>,
    pub color: Option<String>,
    pub distinct_features: Option<String>,
    pub location_found: Option<String>,
    pub date_found: Option<String>,
    pub current_location: Option<String>,
    pub finder_notes: Option<String>,
    pub reward: Option<String>,
    pub status: Option<ReportStatus>,
}

impl FoundItemUpdate {
    /// Update that only changes the status.
    pub fn status(status: ReportStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    pub fn apply(self, report: &mut FoundItemReport) {
        replace(&mut report.category, self.category);
        replace(&mut report.subcategory, self.subcategory);
        replace(&mut report.item_type, self.item_type);
        replace(&mut report.brand, self.brand);
        replace(&mut report.color, self.color);
        replace(&mut report.distinct_features, self.distinct_features);
        replace(&mut report.location_found, self.location_found);
        replace(&mut report.date_found, self.date_found);
        replace(&mut report.current_location, self.current_location);
        if self.finder_notes.is_some() {
            report.finder_notes = self.finder_notes;
        }
        if self.reward.is_some() {
            report.reward = self.reward;
        }
        replace(&mut report.status, self.status);
    }
}

pub(crate) fn replace<T>(slot: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *slot = value;
    }
}
