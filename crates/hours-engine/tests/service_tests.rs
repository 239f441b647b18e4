//! Tests for the request-level entry points.

use hours_engine::daily::DailyHours;
use hours_engine::{
    parse_daily_hours, Day, EngineSettings, Event, FirstDayOfWeek, HoursError, HoursService,
    Interval,
};

fn service(first: FirstDayOfWeek) -> HoursService {
    HoursService::new(EngineSettings::new(first))
}

fn full_day() -> Vec<Event> {
    vec![Event::open(0), Event::close(86_399)]
}

/// Helper: Monday has two openings, every other day is open all day.
fn split_monday_week() -> DailyHours {
    let mut hours: DailyHours = Day::ALL.into_iter().map(|d| (d, full_day())).collect();
    hours.insert(
        Day::Monday,
        vec![
            Event::close(1_800),
            Event::close(64_800),
            Event::open(37_800),
            Event::open(0),
        ],
    );
    hours
}

// ---------------------------------------------------------------------------
// First day of week
// ---------------------------------------------------------------------------

#[test]
fn daily_output_starts_on_configured_day() {
    let hours = split_monday_week();

    let sunday_first = service(FirstDayOfWeek::Sunday)
        .formatted_daily_lines(&hours)
        .unwrap();
    assert_eq!(
        sunday_first,
        vec![
            "SUNDAY: 12:00 am - 11:59 pm",
            "MONDAY: 12:00 am - 12:30 am, 10:30 am - 06:00 pm",
            "TUESDAY: 12:00 am - 11:59 pm",
            "WEDNESDAY: 12:00 am - 11:59 pm",
            "THURSDAY: 12:00 am - 11:59 pm",
            "FRIDAY: 12:00 am - 11:59 pm",
            "SATURDAY: 12:00 am - 11:59 pm",
        ]
    );

    let monday_first = service(FirstDayOfWeek::Monday)
        .formatted_daily_lines(&hours)
        .unwrap();
    assert_eq!(monday_first[0], "MONDAY: 12:00 am - 12:30 am, 10:30 am - 06:00 pm");
    assert_eq!(monday_first[6], "SUNDAY: 12:00 am - 11:59 pm");
}

#[test]
fn weekly_output_starts_on_configured_day() {
    let hours: Vec<Interval> = (0..7)
        .map(|d| Interval::new(d * 86_400, d * 86_400 + 86_399).unwrap())
        .collect();

    let lines = service(FirstDayOfWeek::Sunday)
        .formatted_weekly_lines(&hours)
        .unwrap();

    assert_eq!(lines[0], "SUNDAY: 12:00 am - 11:59 pm");
    assert_eq!(lines[1], "MONDAY: 12:00 am - 11:59 pm");
    assert_eq!(lines[6], "SATURDAY: 12:00 am - 11:59 pm");
}

#[test]
fn default_service_starts_on_monday() {
    let lines = HoursService::default()
        .formatted_weekly_lines(&[])
        .unwrap();
    assert_eq!(lines[0], "MONDAY: Closed");
}

// ---------------------------------------------------------------------------
// Call shapes
// ---------------------------------------------------------------------------

#[test]
fn formatted_text_is_joined_with_new_lines() {
    let text = service(FirstDayOfWeek::Monday)
        .format_from_daily_events(&DailyHours::new())
        .unwrap();
    assert_eq!(
        text,
        "MONDAY: Closed\nTUESDAY: Closed\nWEDNESDAY: Closed\nTHURSDAY: Closed\n\
         FRIDAY: Closed\nSATURDAY: Closed\nSUNDAY: Closed"
    );
}

#[test]
fn both_representations_format_identically() {
    let svc = service(FirstDayOfWeek::Sunday);
    let hours = split_monday_week();

    let weekly = svc.convert_daily_to_weekly(&hours).unwrap();

    assert_eq!(
        svc.format_from_daily_events(&hours).unwrap(),
        svc.format_from_weekly_intervals(&weekly).unwrap()
    );
}

#[test]
fn conversion_is_not_rotated() {
    let mut hours = DailyHours::new();
    hours.insert(Day::Sunday, vec![Event::open(3_600), Event::close(7_200)]);
    hours.insert(Day::Monday, vec![Event::open(3_600), Event::close(7_200)]);

    let weekly = service(FirstDayOfWeek::Sunday)
        .convert_daily_to_weekly(&hours)
        .unwrap();

    assert_eq!(weekly[0], Interval::new(3_600, 7_200).unwrap());
    assert_eq!(weekly[1], Interval::new(522_000, 525_600).unwrap());
}

#[test]
fn validation_errors_are_client_errors() {
    let err = service(FirstDayOfWeek::Monday)
        .format_from_weekly_intervals(&[
            Interval::new(0, 3_600).unwrap(),
            Interval::new(3_600, 7_200).unwrap(),
        ])
        .unwrap_err();
    assert!(matches!(err, HoursError::HoursOverlap(_)));
    assert!(err.is_client_error());
}

// ---------------------------------------------------------------------------
// Day names
// ---------------------------------------------------------------------------

#[test]
fn day_names_are_parsed_case_insensitively() {
    let raw = vec![
        ("sunday", full_day()),
        ("MONDAY", full_day()),
        ("TuesdaY", full_day()),
        ("Wednesday", full_day()),
    ];

    let hours = parse_daily_hours(raw).unwrap();

    assert_eq!(
        hours.keys().copied().collect::<Vec<_>>(),
        vec![Day::Monday, Day::Tuesday, Day::Wednesday, Day::Sunday]
    );
}

#[test]
fn unknown_day_name_is_rejected() {
    let raw = vec![("sunday", full_day()), ("MONDAY1", full_day())];

    let err = parse_daily_hours(raw).unwrap_err();

    assert!(matches!(err, HoursError::WrongDayOfWeek(_)), "got {:?}", err);
    assert!(err.to_string().contains("MONDAY1"));
    assert!(err.to_string().contains("SUNDAY"));
}

#[test]
fn names_differing_in_case_are_merged() {
    let raw = vec![
        ("friday".to_string(), vec![Event::open(100)]),
        ("FRIDAY".to_string(), vec![Event::close(200)]),
    ];

    let hours = parse_daily_hours(raw).unwrap();

    assert_eq!(hours[&Day::Friday], vec![Event::open(100), Event::close(200)]);
}
