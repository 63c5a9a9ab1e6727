//! Tests for availability containment, booking overlap, and role filtering.

use slot_engine::{
    all_slots_for_teacher, classify_slot, classify_start, filter_available_time_slots,
    filter_by_availability, is_slot_available_for_duration, is_slot_overlapping_with_bookings,
    is_start_available_for_duration, is_start_overlapping_with_bookings, is_time_slot_booked,
    is_time_slot_in_any_range, parse_booked_slots, AvailabilityRange, Role, SlotStatus, SlotView,
    TimeOfDay, TimeSlot,
};

// ── Helpers ─────────────────────────────────────────────────────────────────

fn slot(s: &str) -> TimeSlot {
    s.parse().unwrap()
}

fn range(start: &str, end: &str) -> AvailabilityRange {
    AvailabilityRange::parse(start, end).unwrap()
}

fn booked(entries: &[&str]) -> Vec<TimeSlot> {
    entries.iter().map(|s| slot(s)).collect()
}

/// Morning and afternoon availability used by the booking UI scenarios.
fn split_day() -> Vec<AvailabilityRange> {
    vec![range("09:00", "12:00"), range("14:00", "18:00")]
}

// ── Containment ─────────────────────────────────────────────────────────────

#[test]
fn slot_inside_range_is_available() {
    assert!(is_slot_available_for_duration(&slot("09:00-10:00"), &split_day(), 60));
}

#[test]
fn slot_ending_past_range_is_not_available() {
    assert!(!is_slot_available_for_duration(&slot("11:30-12:30"), &split_day(), 60));
}

#[test]
fn slot_exactly_filling_range_is_contained() {
    assert!(is_time_slot_in_any_range(&slot("09:00-12:00"), &split_day()));
}

#[test]
fn slot_spanning_gap_between_ranges_is_not_contained() {
    // Covered piecewise by two ranges but wholly by neither.
    assert!(!is_time_slot_in_any_range(&slot("11:00-15:00"), &split_day()));
}

#[test]
fn no_ranges_means_nothing_available() {
    assert!(!is_time_slot_in_any_range(&slot("09:00-10:00"), &[]));
    assert!(!is_slot_available_for_duration(&slot("09:00-10:00"), &[], 60));
}

#[test]
fn availability_uses_requested_duration_not_slot_end() {
    // The slot string claims 30 minutes, but a 90-minute class runs to 12:30.
    let s = slot("11:00-11:30");
    assert!(is_time_slot_in_any_range(&s, &split_day()));
    assert!(!is_slot_available_for_duration(&s, &split_day(), 90));

    // And the reverse: a nominal 3h slot is fine for a 40-minute class.
    assert!(is_slot_available_for_duration(&slot("17:00-20:00"), &split_day(), 40));
}

// ── Overlap ─────────────────────────────────────────────────────────────────

#[test]
fn touching_booking_does_not_overlap() {
    assert!(!is_slot_overlapping_with_bookings(
        &slot("10:00-11:00"),
        &booked(&["09:00-10:00"]),
        60
    ));
}

#[test]
fn partial_overlap_is_detected() {
    assert!(is_slot_overlapping_with_bookings(
        &slot("09:30-10:30"),
        &booked(&["09:00-10:00"]),
        60
    ));
}

#[test]
fn contained_booking_overlaps() {
    assert!(is_time_slot_booked(
        &slot("09:00-12:00"),
        &booked(&["10:00-10:15"])
    ));
}

#[test]
fn overlap_uses_requested_duration_not_slot_end() {
    // Nominal end 10:00 touches the booking, but a 90-minute class reaches 10:30.
    let s = slot("09:00-10:00");
    let b = booked(&["10:00-11:00"]);
    assert!(!is_time_slot_booked(&s, &b));
    assert!(is_slot_overlapping_with_bookings(&s, &b, 90));
}

#[test]
fn start_only_checks_cover_late_evening() {
    let late = vec![range("22:00", "24:00")];
    let start: TimeOfDay = "23:00".parse().unwrap();
    assert!(is_start_available_for_duration(start, &late, 30));
    assert!(is_start_available_for_duration(start, &late, 60));
    assert!(!is_start_available_for_duration(start, &late, 61));

    let b = booked(&["23:15-23:45"]);
    assert!(is_start_overlapping_with_bookings(start, &b, 30));
    assert!(!is_start_overlapping_with_bookings(start, &b, 15));
    assert_eq!(classify_start(start, &late, &b, 30), SlotStatus::Booked);
    assert_eq!(classify_start(start, &late, &[], 30), SlotStatus::Available);
}

#[test]
fn no_bookings_means_nothing_booked() {
    assert!(!is_time_slot_booked(&slot("09:00-10:00"), &[]));
    assert!(!is_slot_overlapping_with_bookings(&slot("09:00-10:00"), &[], 60));
}

// ── Booked-slot parsing ─────────────────────────────────────────────────────

#[test]
fn malformed_booked_entries_are_dropped() {
    let raw = vec![
        None,
        Some(""),
        Some("0900"),
        Some("09:00"),
        Some("nonsense-entry"),
        Some("13:00-14:00"),
    ];
    let parsed = parse_booked_slots(raw);
    assert_eq!(parsed, vec![slot("13:00-14:00")]);
}

#[test]
fn malformed_entries_never_block_a_slot() {
    let parsed = parse_booked_slots(vec![None, Some(String::new()), Some("junk".to_string())]);
    assert!(!is_slot_overlapping_with_bookings(&slot("09:00-10:00"), &parsed, 60));
}

// ── Role filtering ──────────────────────────────────────────────────────────

fn candidates() -> Vec<TimeSlot> {
    booked(&["08:00-09:00", "09:00-10:00", "10:00-11:00", "14:00-15:00"])
}

#[test]
fn student_with_no_ranges_sees_nothing() {
    let out = filter_available_time_slots(&candidates(), &[], Role::Student.slot_view());
    assert!(out.is_empty());
}

#[test]
fn teacher_sees_unfiltered_grid() {
    let out = filter_available_time_slots(&candidates(), &[], Role::Teacher.slot_view());
    assert_eq!(out, candidates());
}

#[test]
fn admin_is_filtered_like_student() {
    assert_eq!(Role::Admin.slot_view(), SlotView::Availability);
}

#[test]
fn availability_view_keeps_contained_slots_in_order() {
    let out = filter_by_availability(&candidates(), &split_day());
    assert_eq!(out, booked(&["09:00-10:00", "10:00-11:00", "14:00-15:00"]));
}

#[test]
fn teacher_helper_returns_all() {
    assert_eq!(all_slots_for_teacher(&candidates()), candidates());
}

#[test]
fn role_deserializes_lowercase() {
    let role: Role = serde_json::from_str(r#""teacher""#).unwrap();
    assert_eq!(role, Role::Teacher);
}

#[test]
fn unknown_role_falls_back_to_availability() {
    let role: Role = serde_json::from_str(r#""guest""#).unwrap();
    assert_eq!(role, Role::Other);
    assert_eq!(Role::from("guest").slot_view(), SlotView::Availability);
    assert_eq!(Role::from("").slot_view(), SlotView::Availability);

    let out = filter_available_time_slots(&candidates(), &[], Role::from("guest").slot_view());
    assert!(out.is_empty());
}

#[test]
fn role_names_match_case_insensitively() {
    assert_eq!(Role::from("TEACHER"), Role::Teacher);
    assert_eq!(Role::from(" Teacher "), Role::Teacher);
    assert_eq!(Role::from("Student"), Role::Student);
    assert_eq!(Role::from("ADMIN"), Role::Admin);
}

// ── Grid classification ─────────────────────────────────────────────────────

#[test]
fn booked_wins_over_available() {
    let b = booked(&["09:30-10:00"]);
    assert_eq!(
        classify_slot(&slot("09:00-10:00"), &split_day(), &b, 60),
        SlotStatus::Booked
    );
    assert_eq!(
        classify_slot(&slot("10:00-11:00"), &split_day(), &b, 60),
        SlotStatus::Available
    );
    assert_eq!(
        classify_slot(&slot("12:00-13:00"), &split_day(), &b, 60),
        SlotStatus::Unavailable
    );
}
