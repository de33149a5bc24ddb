//! Presentation formatting for metric results.
//!
//! The engine's contract is numeric; these types are the boundary handed to
//! a display layer, with amounts rendered the way store managers read them
//! (two decimals, comma separator, "R$" prefix).

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use super::types::{MetricResult, MetricStatus};

/// Formats a currency amount for display: `dec!(1234.5)` → `"R$ 1234,50"`.
///
/// Rounds midpoints away from zero. No thousands grouping.
#[must_use]
pub fn format_brl(amount: Decimal) -> String {
    let cents = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("R$ {cents:.2}").replace('.', ",")
}

/// Display label for a status, as shown on the dashboard.
#[must_use]
pub const fn status_label(status: MetricStatus) -> &'static str {
    match status {
        MetricStatus::Pending => "pendente",
        MetricStatus::Reached => "atingido",
        MetricStatus::Exceeded => "acima",
    }
}

/// Display-ready card for one logical category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricCard {
    /// Card title (category display name).
    pub title: String,
    /// Category presentation slug, used for color-coding.
    pub category: String,
    /// Sales today, formatted.
    pub today_sales: String,
    /// Sales in the full period, formatted.
    pub period_sales: String,
    /// Period target, formatted.
    pub target: String,
    /// Daily target, formatted.
    pub daily_target: String,
    /// What is still missing today, formatted.
    pub missing_today: String,
    /// Remaining working days in the period.
    pub remaining_days: i64,
    /// Status of today's sales against the quota.
    pub status: MetricStatus,
}

impl MetricCard {
    /// Builds the display card for one metric result.
    #[must_use]
    pub fn from_result(result: &MetricResult) -> Self {
        Self {
            title: result.category.title().to_string(),
            category: result.category.slug().to_string(),
            today_sales: format_brl(result.sold_today),
            period_sales: format_brl(result.sold_period),
            target: format_brl(result.target),
            daily_target: format_brl(result.daily_target),
            missing_today: format_brl(result.shortfall_today),
            remaining_days: result.remaining_days,
            status: result.status,
        }
    }
}
