//! Sales metric data types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use vendra_shared::types::{PeriodId, SaleId, StoreId, TargetId};

use super::category::LogicalCategory;

/// A manager-defined target tracking window (e.g., a month).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Period {
    /// Unique identifier.
    pub id: PeriodId,
    /// Period name (e.g., "Janeiro 2025").
    pub name: String,
    /// Start date of the period.
    pub start_date: NaiveDate,
    /// End date of the period (inclusive).
    pub end_date: NaiveDate,
}

impl Period {
    /// Returns true if the given date falls within this period.
    #[must_use]
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }
}

/// Store identity and regional classification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreContext {
    /// Unique identifier.
    pub id: StoreId,
    /// Free-form region tag. Stores tagged "centro" do not open on Sundays,
    /// which shrinks their remaining-days divisor. The match is exact and
    /// case-sensitive; every other value means no exclusion.
    pub region: String,
}

/// A per-category target line on a target record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryTarget {
    /// Raw category code this line is tagged with.
    pub category: String,
    /// Target amount for the category.
    pub amount: Decimal,
}

/// Sales targets for one store over one period.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetRecord {
    /// Unique identifier.
    pub id: TargetId,
    /// Store this target belongs to.
    pub store_id: StoreId,
    /// Period this target covers.
    pub period_id: PeriodId,
    /// Overall target amount for the store (non-negative).
    pub total_target: Decimal,
    /// Per-category target lines, zero or more.
    #[serde(default)]
    pub categories: Vec<CategoryTarget>,
}

/// A single sales transaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaleRecord {
    /// Unique identifier.
    pub id: SaleId,
    /// Raw category code the transaction is tagged with.
    pub category: String,
    /// Sale amount. Non-negative by provider contract; the engine does not
    /// validate the sign.
    pub amount: Decimal,
    /// Calendar date of the sale.
    pub sold_on: NaiveDate,
}

/// Snapshot of every input the engine needs for one invocation.
///
/// All four record sets are resolved by the caller before the engine runs;
/// the engine never queries anything itself. Missing or empty sets degrade
/// to zero amounts rather than raising. Amounts must deserialize as decimal
/// numbers: a non-numeric amount is rejected at this boundary, before the
/// engine ever sees it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    /// Store the metrics are derived for.
    pub store: StoreContext,
    /// Reporting period selected by the caller.
    pub period: Period,
    /// Target records for (store, period). The provider may return several;
    /// only the first is used.
    #[serde(default)]
    pub targets: Vec<TargetRecord>,
    /// Sales within the full period.
    #[serde(default)]
    pub sales_period: Vec<SaleRecord>,
    /// Sales strictly before today, within the period.
    #[serde(default)]
    pub sales_to_yesterday: Vec<SaleRecord>,
    /// Sales dated today.
    #[serde(default)]
    pub sales_today: Vec<SaleRecord>,
}

/// Classification of today's sales against the daily quota.
///
/// Recomputed fresh on every invocation, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricStatus {
    /// Daily quota not yet met, or no quota owed today.
    Pending,
    /// Sales today exactly match a positive daily quota.
    Reached,
    /// Sales today exceed a positive daily quota.
    Exceeded,
}

/// Derived metrics for one logical category.
///
/// Value objects: freshly allocated on every invocation, never mutated. The
/// engine emits exactly one per [`LogicalCategory`], in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricResult {
    /// Category these metrics describe.
    pub category: LogicalCategory,
    /// Amount sold today.
    pub sold_today: Decimal,
    /// Amount sold in the full period.
    pub sold_period: Decimal,
    /// Target amount for the period.
    pub target: Decimal,
    /// Rolling daily quota (remaining shortfall spread over remaining days).
    pub daily_target: Decimal,
    /// What is still missing today, clamped at zero.
    pub shortfall_today: Decimal,
    /// Remaining working days used as the quota divisor, at least 1.
    pub remaining_days: i64,
    /// Status of today's sales against the quota.
    pub status: MetricStatus,
}
