//! Dashboard statistics, derived on every read.
//!
//! Reward totals are summed as `Decimal` so that `0.010 + 0.020` prints
//! as `0.030`, never `0.030000000000000002`.

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::matching::{Match, MatchStatus};
use super::report::{FoundItemReport, LostItemReport, ReportStatus};

/// Decimal places shown for reward totals.
pub const REWARD_DECIMALS: u32 = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    pub items_found: usize,
    pub items_lost: usize,
    /// Matches still awaiting confirmation.
    pub active_matches: usize,
    /// Rewards on confirmed found items, e.g. `"0.010"`.
    pub rewards_earned: String,
    /// Rewards on confirmed lost items, e.g. `"0.250"`.
    pub rewards_paid: String,
}

impl Default for UserStats {
    fn default() -> Self {
        Self::compute(&[], &[], &[])
    }
}

impl UserStats {
    pub fn compute(lost: &[LostItemReport], found: &[FoundItemReport], matches: &[Match]) -> Self {
        let earned = sum_amounts(
            "rewardsEarned",
            found
                .iter()
                .filter(|item| item.status == ReportStatus::Confirmed)
                .filter_map(|item| item.reward.as_deref()),
        );

        let paid = sum_amounts(
            "rewardsPaid",
            lost
                .iter()
                .filter(|item| item.status == ReportStatus::Confirmed)
                .map(|item| item.reward_amount.as_str()),
        );

        Self {
            items_found: found.len(),
            items_lost: lost.len(),
            active_matches: matches
                .iter()
                .filter(|m| m.status == MatchStatus::PendingConfirmation)
                .count(),
            rewards_earned: format_amount(earned),
            rewards_paid: format_amount(paid),
        }
    }
}

/// Parse a reward string. Blank or malformed amounts count as zero.
pub fn parse_amount(raw: &str) -> Decimal {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Decimal::ZERO;
    }
    Decimal::from_str(trimmed).unwrap_or_else(|e| {
        debug!(amount = %raw, error = %e, "Unparsable reward amount counted as zero");
        Decimal::ZERO
    })
}

/// Sum reward strings, saturating at `Decimal::MAX` on overflow.
fn sum_amounts<'a>(total: &'static str, amounts: impl Iterator<Item = &'a str>) -> Decimal {
    let mut sum = Decimal::ZERO;
    for raw in amounts {
        match sum.checked_add(parse_amount(raw)) {
            Some(next) => sum = next,
            None => {
                warn!(total, "Reward total overflowed, saturating");
                return Decimal::MAX;
            }
        }
    }
    sum
}

/// Format with exactly [`REWARD_DECIMALS`] places.
///
/// Uses the formatter's precision rather than `rescale`, which cannot
/// add places to values near `Decimal::MAX`.
pub fn format_amount(amount: Decimal) -> String {
    let rounded =
        amount.round_dp_with_strategy(REWARD_DECIMALS, RoundingStrategy::MidpointAwayFromZero);
    format!("{rounded:.prec$}", prec = REWARD_DECIMALS as usize)
}
