//! Schedule value types: days, open/close events and validated intervals.
//!
//! All offsets are plain seconds. In the daily representation an offset counts
//! from midnight of its day (`0..DAY_LENGTH`); in the weekly representation it
//! counts from Monday 00:00 (`0..WEEK_LENGTH`, with closing bounds allowed to
//! reach into the following Monday up to `WEEK_PLUS_DAY`).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{HoursError, Result};

/// Seconds in one day.
pub const DAY_LENGTH: i64 = 86_400;
/// Seconds in one week.
pub const WEEK_LENGTH: i64 = 7 * DAY_LENGTH;
/// Upper bound (exclusive) for weekly offsets: one extra day for hours that
/// close after Sunday midnight.
pub const WEEK_PLUS_DAY: i64 = WEEK_LENGTH + DAY_LENGTH;

/// Day of week, Monday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
#[repr(u8)]
pub enum Day {
    Monday = 0,
    Tuesday = 1,
    Wednesday = 2,
    Thursday = 3,
    Friday = 4,
    Saturday = 5,
    Sunday = 6,
}

impl Day {
    /// All seven days in canonical Monday-first order.
    pub const ALL: [Day; 7] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
        Day::Sunday,
    ];

    /// Zero-based position in the week, Monday = 0.
    pub fn ordinal(self) -> usize {
        self as usize
    }

    /// Day at `ordinal` modulo 7.
    pub fn from_ordinal(ordinal: usize) -> Day {
        Day::ALL[ordinal % 7]
    }

    /// The following day; Sunday wraps to Monday.
    pub fn next(self) -> Day {
        Day::from_ordinal(self.ordinal() + 1)
    }

    /// Day that a week-relative offset falls on.
    ///
    /// Offsets past the end of the week (late Sunday closings) wrap around
    /// to the start of the week.
    pub fn from_week_offset(offset: i64) -> Day {
        Day::from_ordinal(offset.div_euclid(DAY_LENGTH).rem_euclid(7) as usize)
    }

    /// Uppercase English name, as used in formatted output.
    pub fn name(self) -> &'static str {
        match self {
            Day::Monday => "MONDAY",
            Day::Tuesday => "TUESDAY",
            Day::Wednesday => "WEDNESDAY",
            Day::Thursday => "THURSDAY",
            Day::Friday => "FRIDAY",
            Day::Saturday => "SATURDAY",
            Day::Sunday => "SUNDAY",
        }
    }

    /// Parse an English weekday name, ignoring case.
    ///
    /// # Errors
    /// Returns `HoursError::WrongDayOfWeek` for anything that is not one of
    /// the seven weekday names.
    pub fn from_name(name: &str) -> Result<Day> {
        Day::ALL
            .into_iter()
            .find(|day| day.name().eq_ignore_ascii_case(name.trim()))
            .ok_or_else(|| {
                let expected: Vec<&str> = Day::ALL.iter().map(|d| d.name()).collect();
                HoursError::WrongDayOfWeek(format!(
                    "No day of week named '{}'. Expected one of [{}]",
                    name,
                    expected.join(", ")
                ))
            })
    }

    /// Seconds from Monday 00:00 to the start of this day.
    pub fn week_offset(self) -> i64 {
        DAY_LENGTH * self.ordinal() as i64
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Day {
    type Err = HoursError;

    fn from_str(s: &str) -> Result<Self> {
        Day::from_name(s)
    }
}

impl TryFrom<String> for Day {
    type Error = HoursError;

    fn try_from(value: String) -> Result<Self> {
        Day::from_name(&value)
    }
}

impl From<Day> for String {
    fn from(day: Day) -> Self {
        day.name().to_string()
    }
}

/// Whether an event opens or closes the venue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Open,
    Close,
}

/// A single open or close timestamp.
///
/// Carries no ordering invariant of its own; the normalizers sort events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Event {
    #[serde(rename = "type")]
    pub kind: EventKind,
    #[serde(rename = "value")]
    pub offset: i64,
}

impl Event {
    pub fn open(offset: i64) -> Self {
        Self {
            kind: EventKind::Open,
            offset,
        }
    }

    pub fn close(offset: i64) -> Self {
        Self {
            kind: EventKind::Close,
            offset,
        }
    }

    pub fn is_open(&self) -> bool {
        self.kind == EventKind::Open
    }

    pub fn is_close(&self) -> bool {
        self.kind == EventKind::Close
    }
}

#[derive(Deserialize)]
struct RawInterval {
    from: i64,
    to: i64,
}

/// One continuous open period with `from < to`.
///
/// The only way to obtain an `Interval`, including through serde, is the
/// validating constructor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Interval {
    from: i64,
    to: i64,
}

impl Interval {
    /// # Errors
    /// Returns `HoursError::CloseHourBeforeOrEqualOpen` when `to <= from`.
    pub fn new(from: i64, to: i64) -> Result<Self> {
        if from >= to {
            return Err(HoursError::CloseHourBeforeOrEqualOpen(format!(
                "Closing time {} is before or same as opening time {}",
                to, from
            )));
        }
        Ok(Self { from, to })
    }

    pub fn from(&self) -> i64 {
        self.from
    }

    pub fn to(&self) -> i64 {
        self.to
    }
}

impl<'de> Deserialize<'de> for Interval {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = RawInterval::deserialize(deserializer)?;
        Interval::new(raw.from, raw.to).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.from, self.to)
    }
}

/// Rendered opening hours of one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormattedDay {
    pub day: Day,
    pub text: String,
}

impl FormattedDay {
    pub const CLOSED: &'static str = "Closed";

    pub fn closed(day: Day) -> Self {
        Self {
            day,
            text: Self::CLOSED.to_string(),
        }
    }

    pub fn is_closed(&self) -> bool {
        self.text == Self::CLOSED
    }
}

impl fmt::Display for FormattedDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.day, self.text)
    }
}
