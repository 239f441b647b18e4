//! Tests for first-day-of-week rotation.

use hours_engine::{rotate_week, Day, FirstDayOfWeek, HoursError};

#[test]
fn monday_first_is_identity() {
    let week: Vec<u8> = (0..7).collect();
    assert_eq!(rotate_week(week.clone(), FirstDayOfWeek::Monday), week);
}

#[test]
fn sunday_first_moves_last_day_to_front() {
    let week: Vec<u8> = (0..7).collect();
    assert_eq!(
        rotate_week(week, FirstDayOfWeek::Sunday),
        vec![6, 0, 1, 2, 3, 4, 5]
    );
}

#[test]
fn rotation_works_on_days() {
    let rotated = rotate_week(Day::ALL.to_vec(), FirstDayOfWeek::Sunday);
    assert_eq!(rotated[0], Day::Sunday);
    assert_eq!(rotated[1], Day::Monday);
    assert_eq!(rotated[6], Day::Saturday);
}

#[test]
fn only_monday_and_sunday_can_start_the_week() {
    assert_eq!(FirstDayOfWeek::try_from(Day::Sunday).unwrap(), FirstDayOfWeek::Sunday);
    assert!(matches!(
        FirstDayOfWeek::try_from(Day::Wednesday),
        Err(HoursError::InvalidSettings(_))
    ));
}
