//! # hours-engine
//!
//! Normalization, validation and human-readable formatting of weekly opening
//! hours.
//!
//! Opening hours come in two shapes: per-day lists of open/close events with
//! offsets relative to each day's midnight, and a flat list of week-relative
//! intervals. Both shapes format to the same seven lines, and per-day events
//! convert losslessly to the weekly shape.
//!
//! ## Modules
//!
//! - [`entities`] — days, events, validated intervals and formatted days
//! - [`clock`] — 12-hour clock rendering
//! - [`daily`] — per-day event sorting, midnight carry-over and pairing
//! - [`weekly`] — weekly interval validation (including week wraparound)
//! - [`convert`] — per-day events → weekly intervals
//! - [`rotate`] — first-day-of-week reordering
//! - [`settings`] — startup configuration
//! - [`service`] — request-level entry points
//! - [`error`] — Error types

pub mod clock;
pub mod convert;
pub mod daily;
pub mod entities;
pub mod error;
pub mod rotate;
pub mod service;
pub mod settings;
pub mod weekly;

pub use clock::format_clock;
pub use convert::daily_to_weekly;
pub use daily::{format_daily_hours, DailyHours};
pub use entities::{Day, Event, EventKind, FormattedDay, Interval};
pub use error::HoursError;
pub use rotate::{rotate_week, FirstDayOfWeek};
pub use service::{parse_daily_hours, HoursService};
pub use settings::EngineSettings;
pub use weekly::format_weekly_hours;
