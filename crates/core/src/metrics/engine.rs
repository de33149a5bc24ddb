//! The metric-derivation engine.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::calendar;
use super::category::LogicalCategory;
use super::quota::DailyQuota;
use super::types::{DashboardSnapshot, MetricResult, SaleRecord, TargetRecord};

/// Stateless service deriving per-category sales metrics.
pub struct DashboardService;

impl DashboardService {
    /// Derives the fixed five-entry metric sequence for one store and period.
    ///
    /// Pure and re-entrant: every input arrives in the snapshot, `today` is
    /// an explicit calendar date in the caller's reporting time zone, and
    /// the engine never queries or raises. Missing record sets degrade to
    /// zero amounts; unrecognized raw category codes are dropped from every
    /// aggregation.
    #[must_use]
    pub fn derive_metrics(snapshot: &DashboardSnapshot, today: NaiveDate) -> Vec<MetricResult> {
        // The provider may return several target rows for one (store,
        // period); only the first is used, in provider order.
        let target_record = snapshot.targets.first();

        let remaining_days =
            calendar::remaining_days(today, snapshot.period.end_date, &snapshot.store.region);

        LogicalCategory::ALL
            .into_iter()
            .map(|category| {
                let target = Self::target_amount(target_record, category);
                let sold_period = Self::sum_for(&snapshot.sales_period, category);
                let sold_to_yesterday = Self::sum_for(&snapshot.sales_to_yesterday, category);
                let sold_today = Self::sum_for(&snapshot.sales_today, category);

                let quota =
                    DailyQuota::derive(target, sold_to_yesterday, sold_today, remaining_days);

                MetricResult {
                    category,
                    sold_today,
                    sold_period,
                    target,
                    daily_target: quota.daily_target,
                    shortfall_today: quota.shortfall_today,
                    remaining_days,
                    status: quota.status,
                }
            })
            .collect()
    }

    /// Target amount for one category.
    ///
    /// General takes the record's overall target figure; the other
    /// categories take the first target line whose raw code reconciles to
    /// them. A missing record or line degrades to zero.
    fn target_amount(record: Option<&TargetRecord>, category: LogicalCategory) -> Decimal {
        let Some(record) = record else {
            return Decimal::ZERO;
        };

        if category == LogicalCategory::General {
            return record.total_target;
        }

        record
            .categories
            .iter()
            .find(|line| category.matches(&line.category))
            .map_or(Decimal::ZERO, |line| line.amount)
    }

    /// Sums the amounts of the sales whose raw code reconciles to the category.
    fn sum_for(sales: &[SaleRecord], category: LogicalCategory) -> Decimal {
        sales
            .iter()
            .filter(|sale| category.matches(&sale.category))
            .map(|sale| sale.amount)
            .sum()
    }
}
