//! Tests for 12-hour display formatting.

use slot_engine::{format_time_slot_to_12_hour, format_time_to_12_hour, TimeOfDay, TimeSlot};

fn fmt(s: &str) -> String {
    format_time_to_12_hour(s.parse::<TimeOfDay>().unwrap())
}

#[test]
fn midnight_hour_is_twelve_am() {
    assert_eq!(fmt("00:00"), "12:00 AM");
    assert_eq!(fmt("00:30"), "12:30 AM");
}

#[test]
fn morning_hours_keep_their_number() {
    assert_eq!(fmt("01:05"), "1:05 AM");
    assert_eq!(fmt("11:59"), "11:59 AM");
}

#[test]
fn noon_is_twelve_pm() {
    assert_eq!(fmt("12:00"), "12:00 PM");
}

#[test]
fn afternoon_hours_subtract_twelve() {
    assert_eq!(fmt("13:00"), "1:00 PM");
    assert_eq!(fmt("23:45"), "11:45 PM");
}

#[test]
fn minutes_are_zero_padded() {
    assert_eq!(fmt("9:5"), "9:05 AM");
}

#[test]
fn past_midnight_shows_next_day_clock() {
    assert_eq!(fmt("24:30"), "12:30 AM");
}

#[test]
fn slot_formats_both_halves() {
    let slot: TimeSlot = "11:30-13:00".parse().unwrap();
    assert_eq!(format_time_slot_to_12_hour(&slot), "11:30 AM-1:00 PM");
}
