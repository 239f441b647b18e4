//! Presentation-only reordering of a Monday-first week.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::entities::Day;
use crate::error::{HoursError, Result};

/// The day rendered at the top of a formatted week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum FirstDayOfWeek {
    #[default]
    Monday,
    Sunday,
}

impl FirstDayOfWeek {
    pub fn day(self) -> Day {
        match self {
            FirstDayOfWeek::Monday => Day::Monday,
            FirstDayOfWeek::Sunday => Day::Sunday,
        }
    }
}

impl TryFrom<Day> for FirstDayOfWeek {
    type Error = HoursError;

    fn try_from(day: Day) -> Result<Self> {
        match day {
            Day::Monday => Ok(FirstDayOfWeek::Monday),
            Day::Sunday => Ok(FirstDayOfWeek::Sunday),
            other => Err(HoursError::InvalidSettings(format!(
                "Illegal first day of week {}, expected MONDAY or SUNDAY",
                other
            ))),
        }
    }
}

impl TryFrom<String> for FirstDayOfWeek {
    type Error = HoursError;

    fn try_from(value: String) -> Result<Self> {
        let day = Day::from_name(&value)
            .map_err(|_| HoursError::InvalidSettings(format!("Illegal first day of week '{}'", value)))?;
        FirstDayOfWeek::try_from(day)
    }
}

impl From<FirstDayOfWeek> for String {
    fn from(first: FirstDayOfWeek) -> Self {
        first.day().name().to_string()
    }
}

impl fmt::Display for FirstDayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.day().name())
    }
}

/// Reorder a Monday-first week to start on `first`.
///
/// For [`FirstDayOfWeek::Sunday`] the last element moves to the front and the
/// rest keep their order. Sequences that are not exactly one week long are
/// returned unchanged.
pub fn rotate_week<T>(mut days: Vec<T>, first: FirstDayOfWeek) -> Vec<T> {
    if first == FirstDayOfWeek::Sunday && days.len() == 7 {
        days.rotate_right(1);
    }
    days
}
