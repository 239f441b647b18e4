//! Validation and formatting of a flat weekly interval list.
//!
//! Intervals are week-relative: offset 0 is Monday 00:00. An interval is
//! listed under the day its opening falls on, so a Sunday evening interval
//! that closes at 01:30 on Monday reads `SUNDAY: ... - 01:30 am`.

use crate::clock::{format_range, TIMES_DELIMITER};
use crate::entities::{Day, FormattedDay, Interval, WEEK_LENGTH, WEEK_PLUS_DAY};
use crate::error::{HoursError, Result};

/// Sort intervals by opening offset and check the week is consistent.
///
/// Checks, in order: consecutive intervals neither touch nor overlap; the
/// last interval's after-midnight tail does not reach the first opening of
/// the week; the first opening is not negative; the last closing stays below
/// [`WEEK_PLUS_DAY`].
///
/// # Errors
/// - `HoursError::HoursOverlap` for touching or overlapping intervals,
///   including across the week boundary.
/// - `HoursError::OutOfRangeTimestamp` for bounds outside the week.
pub fn validate_week(intervals: &[Interval]) -> Result<Vec<Interval>> {
    let mut sorted = intervals.to_vec();
    sorted.sort_by_key(|i| i.from());

    let (Some(first), Some(last)) = (sorted.first(), sorted.last()) else {
        return Ok(Vec::new());
    };

    for pair in sorted.windows(2) {
        if pair[1].from() <= pair[0].to() {
            return Err(HoursError::HoursOverlap(format!(
                "Opening hours overlap: {} and {}",
                pair[0], pair[1]
            )));
        }
    }

    // A closing so far below zero that the wraparound tail cannot be computed
    // is out of range rather than an overlap.
    let wrapped_close = last.to().checked_sub(WEEK_LENGTH).ok_or_else(|| {
        HoursError::OutOfRangeTimestamp(format!(
            "Opening hours must be positive, got {}",
            last
        ))
    })?;
    if wrapped_close >= first.from() {
        return Err(HoursError::HoursOverlap(format!(
            "Closing hours {} overlap opening hours of {}",
            last, first
        )));
    }

    if first.from() < 0 {
        return Err(HoursError::OutOfRangeTimestamp(format!(
            "Opening hours must be positive, got {}",
            first
        )));
    }
    if last.to() >= WEEK_PLUS_DAY {
        return Err(HoursError::OutOfRangeTimestamp(format!(
            "Max value for week opening hours is {}, got {}",
            WEEK_PLUS_DAY, last
        )));
    }

    Ok(sorted)
}

/// Render weekly intervals as seven formatted days, Monday first.
///
/// # Errors
/// Same as [`validate_week`].
pub fn format_weekly_hours(intervals: &[Interval]) -> Result<Vec<FormattedDay>> {
    let sorted = validate_week(intervals)?;

    let mut ranges: [Vec<String>; 7] = Default::default();
    for interval in &sorted {
        let day = Day::from_week_offset(interval.from());
        ranges[day.ordinal()].push(format_range(interval.from(), interval.to()));
    }

    Ok(Day::ALL
        .into_iter()
        .zip(ranges)
        .map(|(day, ranges)| {
            if ranges.is_empty() {
                FormattedDay::closed(day)
            } else {
                FormattedDay {
                    day,
                    text: ranges.join(TIMES_DELIMITER),
                }
            }
        })
        .collect())
}
