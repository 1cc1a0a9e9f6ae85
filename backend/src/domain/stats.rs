//! Aggregate views over stored feedback.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::Serialize;

use crate::domain::FeedbackCategory;

/// Length of the trailing window covered by the daily histogram.
pub const DAILY_WINDOW_DAYS: i64 = 30;

/// Number of records in one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    /// Category being counted.
    pub category: FeedbackCategory,
    /// Records in the category.
    pub count: u64,
}

/// Number of records created on one UTC calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DailyCount {
    /// Day, serialised as `YYYY-MM-DD`.
    pub date: NaiveDate,
    /// Records created that day.
    pub count: u64,
}

/// Combined statistics payload.
///
/// The three parts are read independently and are not a consistent snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedbackStats {
    /// Total number of stored records.
    pub total: u64,
    /// Counts for categories that have at least one record, in name order.
    pub by_category: Vec<CategoryCount>,
    /// Counts per day inside the trailing window, newest day first.
    pub daily: Vec<DailyCount>,
}

/// Earliest creation time included in the daily histogram.
///
/// # Examples
/// ```
/// use chrono::{DateTime, Utc};
/// use feedback_backend::domain::daily_window_start;
///
/// let now = DateTime::parse_from_rfc3339("2026-10-31T08:00:00Z")
///     .expect("timestamp")
///     .with_timezone(&Utc);
/// assert_eq!(daily_window_start(now).to_rfc3339(), "2026-10-01T08:00:00+00:00");
/// ```
#[must_use]
pub fn daily_window_start(now: DateTime<Utc>) -> DateTime<Utc> {
    now - Duration::days(DAILY_WINDOW_DAYS)
}
