//! Calendar-day handling for the visitor count query.
//!
//! A "day" is the 24-hour window starting at that date's midnight, UTC.
//! A ticket counts as a visitor for the day only if both its arrival and
//! its leave fall inside the same window; a ticket opened late on day D
//! and closed on day D+1 belongs to neither day's count. This mirrors the
//! range query the service has always answered, and is deliberate.

use chrono::{Duration, NaiveDate};

use crate::error::CoreError;
use crate::types::Timestamp;

/// Parse a `day` query parameter.
///
/// Accepts `YYYY-M-D` with or without zero padding (`2001-02-20` and
/// `2001-2-20` both parse). Chrono also accepts expanded signed years
/// here (`+262142-12-31`); [`day_window`] rejects the ones whose window
/// cannot be represented.
pub fn parse_day(raw: &str) -> Result<NaiveDate, CoreError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| CoreError::Validation(format!("'{raw}' is not a valid day (expected YYYY-M-D)")))
}

/// The `[start, end]` window for a day: midnight UTC to midnight plus 24h.
///
/// The upper bound is used inclusively by the visitor query. Fails on
/// days so close to the end of chrono's calendar that midnight plus 24h
/// overflows; such a day cannot have a complete window.
pub fn day_window(day: NaiveDate) -> Result<(Timestamp, Timestamp), CoreError> {
    let start = day.and_hms_opt(0, 0, 0).expect("midnight is always valid").and_utc();
    let end = start
        .checked_add_signed(Duration::hours(24))
        .ok_or_else(|| CoreError::Validation(format!("day {day} is out of range")))?;
    Ok((start, end))
}
