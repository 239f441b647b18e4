//! Tests for 12-hour clock rendering.

use hours_engine::clock::{format_clock, format_range};

#[test]
fn midnight_renders_as_twelve_am() {
    assert_eq!(format_clock(0), "12:00 am");
}

#[test]
fn last_second_of_day_renders_as_eleven_fifty_nine_pm() {
    assert_eq!(format_clock(86_399), "11:59 pm");
}

#[test]
fn noon_renders_as_twelve_pm() {
    assert_eq!(format_clock(43_200), "12:00 pm");
}

#[test]
fn hours_and_minutes_are_zero_padded() {
    assert_eq!(format_clock(30_000), "08:20 am");
    assert_eq!(format_clock(64_800), "06:00 pm");
    assert_eq!(format_clock(1_800), "12:30 am");
}

#[test]
fn seconds_are_truncated() {
    assert_eq!(format_clock(59), "12:00 am");
    assert_eq!(format_clock(37_859), "10:30 am");
}

#[test]
fn week_offsets_render_time_within_day() {
    // Sunday 12:30 pm and the following Monday 01:30 am.
    assert_eq!(format_clock(563_400), "12:30 pm");
    assert_eq!(format_clock(610_200), "01:30 am");
}

#[test]
fn range_joins_open_and_close() {
    assert_eq!(format_range(37_800, 64_800), "10:30 am - 06:00 pm");
}
