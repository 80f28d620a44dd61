//! Date-range defaulting for reporting queries
//!
//! When a route does not receive both bounds, queries fall back to the
//! trailing window: the 30 calendar days ending today.

use chrono::{Duration, Utc};

use super::model::DateRange;

/// Length of the default trailing window, in calendar days
pub const TRAILING_WINDOW_DAYS: usize = 30;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Use `[start, end]` when both are supplied, the trailing window otherwise.
/// Bounds are passed to the upstream as-is; they are not validated here.
pub fn resolve_range(start: Option<&str>, end: Option<&str>) -> DateRange {
    match (start, end) {
        (Some(start), Some(end)) => DateRange {
            start_date: start.to_string(),
            end_date: end.to_string(),
        },
        _ => default_range(),
    }
}

/// The trailing window as concrete dates
pub fn default_range() -> DateRange {
    let today = Utc::now().date_naive();
    let start = today - Duration::days(TRAILING_WINDOW_DAYS as i64 - 1);
    DateRange {
        start_date: start.format(DATE_FORMAT).to_string(),
        end_date: today.format(DATE_FORMAT).to_string(),
    }
}

/// The trailing window in the upstream's relative-date notation, for the
/// fixed-window queries that never take explicit bounds
pub fn trailing_window() -> DateRange {
    DateRange {
        start_date: "30daysAgo".to_string(),
        end_date: "today".to_string(),
    }
}

/// The last `n` calendar dates ending today, ascending
pub fn last_n_dates(n: usize) -> Vec<String> {
    let today = Utc::now().date_naive();
    (0..n)
        .map(|i| {
            (today - Duration::days((n - 1 - i) as i64))
                .format(DATE_FORMAT)
                .to_string()
        })
        .collect()
}
