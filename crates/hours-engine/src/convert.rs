//! Conversion from per-day events to a flat weekly interval list.

use crate::daily::{sort_and_validate, DailyHours};
use crate::entities::{Day, Event, Interval, WEEK_LENGTH};
use crate::error::{HoursError, Result};

/// Convert per-day events into week-relative intervals.
///
/// Every event is shifted by its day's distance from Monday 00:00 and the
/// flattened list is sorted. When the earliest event of the week is a close,
/// it belongs to an opening late on Sunday: it is moved to the end of the
/// week (offset plus [`WEEK_LENGTH`]). Only that single earliest event is
/// moved. The list is then read pairwise as `(open, close)` intervals.
///
/// Open/close tags are not re-checked here; a misaligned pair shows up as an
/// interval whose close is not after its open.
///
/// # Errors
/// - `HoursError::OutOfRangeTimestamp` if a day-relative offset is out of range.
/// - `HoursError::MissingOpenCloseHoursPair` if the week holds an odd number
///   of events.
/// - `HoursError::CloseHourBeforeOrEqualOpen` if a pair does not form a
///   valid interval.
pub fn daily_to_weekly(hours: &DailyHours) -> Result<Vec<Interval>> {
    let sorted = sort_and_validate(hours)?;

    let mut flat: Vec<Event> = Day::ALL
        .into_iter()
        .flat_map(|day| {
            sorted[day.ordinal()].iter().map(move |event| Event {
                kind: event.kind,
                offset: event.offset + day.week_offset(),
            })
        })
        .collect();
    flat.sort_by_key(|e| e.offset);

    if flat.first().is_some_and(Event::is_close) {
        let late_sunday = flat.remove(0);
        flat.push(Event {
            kind: late_sunday.kind,
            offset: late_sunday.offset + WEEK_LENGTH,
        });
    }

    if flat.len() % 2 != 0 {
        let dangling = flat[flat.len() - 1];
        return Err(HoursError::MissingOpenCloseHoursPair(format!(
            "Week has an odd number of open/close events, last one at {}",
            dangling.offset
        )));
    }

    flat.chunks_exact(2)
        .map(|pair| Interval::new(pair[0].offset, pair[1].offset))
        .collect()
}
