//! Normalization of per-day open/close event lists.
//!
//! Each day's events are sorted and range-checked, then hours that run past
//! midnight are resolved: a day whose last event is an open borrows the first
//! event of the next day (Sunday borrows from Monday). The resulting lists
//! must alternate open, close, open, close, ... and are rendered pairwise.

use std::collections::BTreeMap;

use crate::clock::{format_range, TIMES_DELIMITER};
use crate::entities::{Day, Event, FormattedDay, DAY_LENGTH};
use crate::error::{HoursError, Result};

/// Opening hours keyed by day, offsets relative to that day's midnight.
///
/// Days missing from the map are closed.
pub type DailyHours = BTreeMap<Day, Vec<Event>>;

/// Event lists for all seven days, indexed by [`Day::ordinal`].
pub type WeekEvents = [Vec<Event>; 7];

/// Sort every day's events by offset and check each offset is within a day.
///
/// Sorting is stable, so events with equal offsets keep their input order.
/// No pairing or carry-over is performed.
///
/// # Errors
/// Returns `HoursError::OutOfRangeTimestamp` if any offset is negative or not
/// below [`DAY_LENGTH`].
pub fn sort_and_validate(hours: &DailyHours) -> Result<WeekEvents> {
    let mut week: WeekEvents = Default::default();
    for (day, events) in hours {
        for event in events {
            check_day_limits(*day, event.offset)?;
        }
        let mut sorted = events.clone();
        sorted.sort_by_key(|e| e.offset);
        week[day.ordinal()] = sorted;
    }
    Ok(week)
}

/// Resolve midnight carry-over and split every day into `(open, close)` pairs.
///
/// The returned array is indexed by [`Day::ordinal`]. A pair's close offset is
/// relative to the day it was borrowed from, so a late closing reads as an
/// offset smaller than its open.
///
/// # Errors
/// - `HoursError::OutOfRangeTimestamp` as for [`sort_and_validate`].
/// - `HoursError::MissingOpenCloseHoursPair` when a day ends open and the
///   next day has nothing left to lend, or when a day's events do not
///   alternate open, close.
pub fn pair_daily_hours(hours: &DailyHours) -> Result<[Vec<(Event, Event)>; 7]> {
    let sorted = sort_and_validate(hours)?;

    // Number of leading events each day has lent to the previous day.
    let mut lent = [0usize; 7];
    let mut borrowed: [Option<Event>; 7] = [None; 7];

    for day in Day::ALL {
        let d = day.ordinal();
        let own = &sorted[d][lent[d]..];
        let Some(last) = own.last() else {
            continue;
        };
        if last.is_close() {
            continue;
        }
        let next = day.next().ordinal();
        let first_of_next = sorted[next].get(lent[next]).ok_or_else(|| {
            HoursError::MissingOpenCloseHoursPair(format!(
                "Missing close time for {} {} - ?",
                day, last.offset
            ))
        })?;
        lent[next] += 1;
        borrowed[d] = Some(*first_of_next);
    }

    let mut paired: [Vec<(Event, Event)>; 7] = Default::default();
    for day in Day::ALL {
        let d = day.ordinal();
        let events: Vec<Event> = sorted[d][lent[d]..]
            .iter()
            .copied()
            .chain(borrowed[d])
            .collect();
        paired[d] = pair_alternating(day, &events)?;
    }
    Ok(paired)
}

/// Render per-day events as seven formatted days, Monday first.
///
/// # Errors
/// Same as [`pair_daily_hours`].
pub fn format_daily_hours(hours: &DailyHours) -> Result<Vec<FormattedDay>> {
    let paired = pair_daily_hours(hours)?;
    Ok(Day::ALL
        .into_iter()
        .map(|day| {
            let pairs = &paired[day.ordinal()];
            if pairs.is_empty() {
                return FormattedDay::closed(day);
            }
            let text = pairs
                .iter()
                .map(|(open, close)| format_range(open.offset, close.offset))
                .collect::<Vec<_>>()
                .join(TIMES_DELIMITER);
            FormattedDay { day, text }
        })
        .collect())
}

fn check_day_limits(day: Day, offset: i64) -> Result<()> {
    if offset < 0 {
        return Err(HoursError::OutOfRangeTimestamp(format!(
            "Day opening hours must be positive, got {} on {}",
            offset, day
        )));
    }
    if offset >= DAY_LENGTH {
        return Err(HoursError::OutOfRangeTimestamp(format!(
            "Max value for day opening hours is {}, got {} on {}",
            DAY_LENGTH, offset, day
        )));
    }
    Ok(())
}

/// Split `events` into pairs, requiring strict open, close alternation.
fn pair_alternating(day: Day, events: &[Event]) -> Result<Vec<(Event, Event)>> {
    let mut pairs = Vec::with_capacity(events.len() / 2);
    for chunk in events.chunks(2) {
        match chunk {
            [open, close] if open.is_open() && close.is_close() => pairs.push((*open, *close)),
            [first, ..] if !first.is_open() => {
                return Err(HoursError::MissingOpenCloseHoursPair(format!(
                    "Missing open time for {} ? - {}",
                    day, first.offset
                )));
            }
            [open, ..] => {
                return Err(HoursError::MissingOpenCloseHoursPair(format!(
                    "Missing close time for {} {} - ?",
                    day, open.offset
                )));
            }
            [] => unreachable!("chunks(2) never yields an empty slice"),
        }
    }
    Ok(pairs)
}
