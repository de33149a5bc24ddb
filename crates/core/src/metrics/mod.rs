//! Sales metric derivation.
//!
//! Given a store, a reporting period, raw per-day sales, and target records,
//! derives one metric set per logical category: amounts sold, the rolling
//! daily quota, today's shortfall, and a status classification.

pub mod calendar;
pub mod category;
pub mod engine;
pub mod format;
pub mod quota;
pub mod types;


pub use calendar::{SUNDAY_EXCLUDED_REGION, remaining_days, sundays_between};
pub use category::LogicalCategory;
pub use engine::DashboardService;
pub use format::{MetricCard, format_brl, status_label};
pub use quota::DailyQuota;
pub use types::{
    CategoryTarget, DashboardSnapshot, MetricResult, MetricStatus, Period, SaleRecord,
    StoreContext, TargetRecord,
};
