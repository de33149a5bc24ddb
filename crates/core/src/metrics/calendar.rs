//! Remaining working days for quota spreading.

use chrono::{Datelike, NaiveDate, Weekday};

/// Region tag whose stores do not open on Sundays.
///
/// The match is exact and case-sensitive; every other region keeps all
/// calendar days.
pub const SUNDAY_EXCLUDED_REGION: &str = "centro";

/// Number of days the remaining shortfall is spread over, always at least 1.
///
/// Counts calendar days from `today` to `period_end` inclusive, floored at
/// 1. Stores in the Sunday-excluded region then subtract the Sundays inside
/// the same range, floored at 1 again. A `today` past `period_end` is not an
/// error: the range is empty and the floor applies.
#[must_use]
pub fn remaining_days(today: NaiveDate, period_end: NaiveDate, region: &str) -> i64 {
    let base = (period_end - today).num_days() + 1;
    let mut days = base.max(1);

    if region == SUNDAY_EXCLUDED_REGION {
        days = (days - sundays_between(today, period_end)).max(1);
    }

    days
}

/// Counts the Sundays in the inclusive range `[start, end]`.
#[must_use]
pub fn sundays_between(start: NaiveDate, end: NaiveDate) -> i64 {
    let mut count = 0;
    let mut current = start;

    while current <= end {
        if current.weekday() == Weekday::Sun {
            count += 1;
        }
        let Some(next) = current.succ_opt() else {
            break;
        };
        current = next;
    }

    count
}
