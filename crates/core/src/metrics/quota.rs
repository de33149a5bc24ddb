//! Daily quota and shortfall arithmetic.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::types::MetricStatus;

/// Rolling daily quota derived from the shortfall accumulated before today.
///
/// The quota is not `target / days`: it is re-derived each day from what was
/// still missing as of yesterday, spread over the remaining working days. A
/// store that oversold yesterday sees today's quota drop toward zero; one
/// that undersold sees it rise. Today's own sales never reduce today's
/// quota — they only show up in tomorrow's recomputation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyQuota {
    /// Cumulative shortfall as of yesterday, clamped at zero.
    pub shortfall_to_yesterday: Decimal,
    /// Amount to sell today to stay on pace for the period target.
    pub daily_target: Decimal,
    /// What is still missing today, clamped at zero.
    pub shortfall_today: Decimal,
    /// Classification of today's sales against the quota.
    pub status: MetricStatus,
}

impl DailyQuota {
    /// Derives the quota for one category.
    ///
    /// `remaining_days` comes from `calendar::remaining_days` and is at
    /// least 1; a smaller value is clamped rather than dividing by zero.
    #[must_use]
    pub fn derive(
        target: Decimal,
        sold_to_yesterday: Decimal,
        sold_today: Decimal,
        remaining_days: i64,
    ) -> Self {
        let shortfall_to_yesterday = (target - sold_to_yesterday).max(Decimal::ZERO);

        // Once the shortfall before today is exhausted, no further quota is
        // owed, whatever the remaining day count.
        let daily_target = if shortfall_to_yesterday > Decimal::ZERO {
            shortfall_to_yesterday / Decimal::from(remaining_days.max(1))
        } else {
            Decimal::ZERO
        };

        let shortfall_today = (daily_target - sold_today).max(Decimal::ZERO);

        Self {
            shortfall_to_yesterday,
            daily_target,
            shortfall_today,
            status: classify(daily_target, sold_today),
        }
    }
}

/// A zero quota is always `Pending`: nothing is owed today, so there is
/// nothing to reach or exceed, whatever was sold.
fn classify(daily_target: Decimal, sold_today: Decimal) -> MetricStatus {
    if daily_target > Decimal::ZERO && sold_today >= daily_target {
        if sold_today > daily_target {
            MetricStatus::Exceeded
        } else {
            MetricStatus::Reached
        }
    } else {
        MetricStatus::Pending
    }
}
