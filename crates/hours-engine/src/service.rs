//! Entry points consumed by a request-handling layer.
//!
//! [`HoursService`] binds the formatting pipelines to the configured first
//! day of week and produces the final text output. Wire-level day names are
//! mapped to [`Day`] by [`parse_daily_hours`].

use tracing::{debug, info};

use crate::convert::daily_to_weekly;
use crate::daily::{format_daily_hours, DailyHours};
use crate::entities::{Day, Event, FormattedDay, Interval};
use crate::error::Result;
use crate::rotate::rotate_week;
use crate::settings::EngineSettings;
use crate::weekly::format_weekly_hours;

/// Separator between the per-day lines of a formatted week.
pub const DAYS_DELIMITER: &str = "\n";

/// Map wire day names to [`Day`], ignoring case.
///
/// Names that differ only in case are merged, keeping encounter order.
///
/// # Errors
/// Returns `HoursError::WrongDayOfWeek` for an unknown day name.
pub fn parse_daily_hours<I, S>(raw: I) -> Result<DailyHours>
where
    I: IntoIterator<Item = (S, Vec<Event>)>,
    S: AsRef<str>,
{
    let mut hours = DailyHours::new();
    for (name, events) in raw {
        let day = Day::from_name(name.as_ref())?;
        hours.entry(day).or_default().extend(events);
    }
    Ok(hours)
}

/// Formatting and conversion with fixed, read-only settings.
#[derive(Debug, Clone, Copy, Default)]
pub struct HoursService {
    settings: EngineSettings,
}

impl HoursService {
    pub fn new(settings: EngineSettings) -> Self {
        info!(
            first_day_of_week = %settings.first_day_of_week,
            "hours service instantiated"
        );
        Self { settings }
    }

    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    /// Formatted days from per-day events, rotated to the configured first day.
    pub fn formatted_daily_days(&self, hours: &DailyHours) -> Result<Vec<FormattedDay>> {
        debug!(hours = %to_json(hours), "formatting daily hours");
        let days = format_daily_hours(hours)?;
        Ok(rotate_week(days, self.settings.first_day_of_week))
    }

    /// One `DAY: text` line per day from per-day events.
    pub fn formatted_daily_lines(&self, hours: &DailyHours) -> Result<Vec<String>> {
        Ok(to_lines(self.formatted_daily_days(hours)?))
    }

    /// Per-day events rendered as newline-separated text.
    pub fn format_from_daily_events(&self, hours: &DailyHours) -> Result<String> {
        Ok(self.formatted_daily_lines(hours)?.join(DAYS_DELIMITER))
    }

    /// Per-day events as a weekly interval list. Not rotated.
    pub fn convert_daily_to_weekly(&self, hours: &DailyHours) -> Result<Vec<Interval>> {
        debug!(hours = %to_json(hours), "converting daily hours to weekly intervals");
        daily_to_weekly(hours)
    }

    /// Formatted days from weekly intervals, rotated to the configured first day.
    pub fn formatted_weekly_days(&self, intervals: &[Interval]) -> Result<Vec<FormattedDay>> {
        debug!(intervals = %to_json(intervals), "formatting weekly hours");
        let days = format_weekly_hours(intervals)?;
        Ok(rotate_week(days, self.settings.first_day_of_week))
    }

    /// One `DAY: text` line per day from weekly intervals.
    pub fn formatted_weekly_lines(&self, intervals: &[Interval]) -> Result<Vec<String>> {
        Ok(to_lines(self.formatted_weekly_days(intervals)?))
    }

    /// Weekly intervals rendered as newline-separated text.
    pub fn format_from_weekly_intervals(&self, intervals: &[Interval]) -> Result<String> {
        Ok(self.formatted_weekly_lines(intervals)?.join(DAYS_DELIMITER))
    }
}

fn to_lines(days: Vec<FormattedDay>) -> Vec<String> {
    days.iter().map(ToString::to_string).collect()
}

fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|e| format!("<unserializable: {}>", e))
}
