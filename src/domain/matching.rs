//! Match records linking a lost report and a found report.
//!
//! Nothing here detects matches. A match exists only because some caller
//! supplied every field of it.

use serde::{Deserialize, Serialize};

use super::report::replace;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    #[default]
    PendingConfirmation,
    Confirmed,
}

/// Everything but the id.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMatch {
    pub item_name: String,
    pub match_date: String,
    pub status: MatchStatus,
    pub reward: String,
    /// Address or display name of the counterparty.
    pub other_party: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lost_report_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub found_report_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub id: String,
    pub item_name: String,
    pub match_date: String,
    pub status: MatchStatus,
    pub reward: String,
    pub other_party: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lost_report_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub found_report_id: Option<String>,
}

impl Match {
    pub fn from_new(new: NewMatch, id: String) -> Self {
        Self {
            id,
            item_name: new.item_name,
            match_date: new.match_date,
            status: new.status,
            reward: new.reward,
            other_party: new.other_party,
            lost_report_id: new.lost_report_id,
            found_report_id: new.found_report_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MatchUpdate {
    pub item_name: Option<String>,
    pub match_date: Option<String>,
    pub status: Option<MatchStatus>,
    pub reward: Option<String>,
    pub other_party: Option<String>,
    pub lost_report_id: Option<String>,
    pub found_report_id: Option<String>,
}

impl MatchUpdate {
    pub fn status(status: MatchStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    pub fn apply(self, record: &mut Match) {
        replace(&mut record.item_name, self.item_name);
        replace(&mut record.match_date, self.match_date);
        replace(&mut record.status, self.status);
        replace(&mut record.reward, self.reward);
        replace(&mut record.other_party, self.other_party);
        if self.lost_report_id.is_some() {
            record.lost_report_id = self.lost_report_id;
        }
        if self.found_report_id.is_some() {
            record.found_report_id = self.found_report_id;
        }
    }
}
