//! 12-hour clock rendering of second offsets.

use chrono::NaiveTime;

use crate::entities::DAY_LENGTH;

/// Render a seconds-of-day offset as `hh:mm am|pm` (e.g. `08:20 am`).
///
/// Week-relative offsets are accepted too: only the time within the day is
/// rendered, so `610200` (Monday 01:30 of the following week) gives `01:30 am`.
/// Seconds are truncated, never rounded.
pub fn format_clock(offset: i64) -> String {
    let seconds = offset.rem_euclid(DAY_LENGTH) as u32;
    NaiveTime::from_num_seconds_from_midnight_opt(seconds, 0)
        .unwrap_or_default()
        .format("%I:%M %P")
        .to_string()
}

/// Separator between the opening and closing time of one range.
pub const OPEN_CLOSE_DELIMITER: &str = " - ";
/// Separator between several ranges on the same day.
pub const TIMES_DELIMITER: &str = ", ";

/// Render an open/close pair as `08:20 am - 10:30 am`.
pub fn format_range(open: i64, close: i64) -> String {
    format!(
        "{}{}{}",
        format_clock(open),
        OPEN_CLOSE_DELIMITER,
        format_clock(close)
    )
}
