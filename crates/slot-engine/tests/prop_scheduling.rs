//! Property-based tests for slot and range invariants using proptest.
//!
//! These hold for any well-formed input, not just the hand-picked cases in the
//! other test files.

use proptest::prelude::*;
use slot_engine::{
    convert_slots_to_ranges, is_slot_overlapping_with_bookings, is_time_slot_in_any_range,
    merge_overlapping_ranges, minutes_to_time, time_to_minutes, AvailabilityRange, TimeOfDay,
    TimeSlot,
};

const DAY: u32 = 24 * 60;

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

/// A non-empty `[start, end)` interval inside one day.
fn arb_interval() -> impl Strategy<Value = (u32, u32)> {
    (0u32..DAY - 1).prop_flat_map(|start| (Just(start), start + 1..=DAY))
}

fn arb_slot() -> impl Strategy<Value = TimeSlot> {
    arb_interval().prop_map(|(s, e)| slot(s, e))
}

fn arb_range() -> impl Strategy<Value = AvailabilityRange> {
    arb_interval().prop_map(|(s, e)| range(s, e))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn slot(start: u32, end: u32) -> TimeSlot {
    TimeSlot::new(TimeOfDay::from_minutes(start), TimeOfDay::from_minutes(end)).unwrap()
}

fn range(start: u32, end: u32) -> AvailabilityRange {
    AvailabilityRange::new(TimeOfDay::from_minutes(start), TimeOfDay::from_minutes(end)).unwrap()
}

/// Minute-by-minute coverage of a set of intervals.
fn coverage(intervals: impl IntoIterator<Item = (u32, u32)>) -> Vec<bool> {
    let mut covered = vec![false; DAY as usize];
    for (start, end) in intervals {
        for m in start..end {
            covered[m as usize] = true;
        }
    }
    covered
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn time_string_round_trips(hour in 0u32..24, minute in 0u32..60) {
        let text = format!("{:02}:{:02}", hour, minute);
        let minutes = time_to_minutes(&text).unwrap();
        prop_assert_eq!(minutes, hour * 60 + minute);
        prop_assert_eq!(minutes_to_time(minutes), text);
    }

    #[test]
    fn slot_inside_range_is_contained(
        (range_start, range_end) in arb_interval(),
        a in 0.0f64..1.0,
        b in 0.0f64..1.0,
    ) {
        // Pick a non-empty sub-interval of the range.
        let span = (range_end - range_start) as f64;
        let mut lo = range_start + (a * span) as u32;
        let mut hi = range_start + (b * span) as u32;
        if lo > hi {
            std::mem::swap(&mut lo, &mut hi);
        }
        if lo == hi {
            if hi < range_end { hi += 1 } else { lo -= 1 }
        }
        prop_assert!(is_time_slot_in_any_range(&slot(lo, hi), &[range(range_start, range_end)]));
    }

    #[test]
    fn slot_sticking_out_of_range_is_not_contained(r in arb_range(), s in arb_slot()) {
        let (rs, re) = r.as_minutes();
        let (ss, se) = s.as_minutes();
        prop_assume!(ss < rs || se > re);
        prop_assert!(!is_time_slot_in_any_range(&s, &[r]));
    }

    #[test]
    fn overlap_matches_positive_intersection(a in arb_slot(), b in arb_slot()) {
        let (s1, e1) = a.as_minutes();
        let (s2, e2) = b.as_minutes();
        let intersection = e1.min(e2) as i64 - s1.max(s2) as i64;

        let overlapping = is_slot_overlapping_with_bookings(&a, &[b], a.duration_minutes());
        prop_assert_eq!(overlapping, intersection > 0);
        prop_assert_eq!(overlapping, a.overlaps(&b));
        prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
    }

    #[test]
    fn touching_slots_never_overlap((start, mid) in arb_interval(), len in 1u32..120) {
        let first = slot(start, mid);
        let second = slot(mid, mid + len);
        prop_assert!(!is_slot_overlapping_with_bookings(&second, &[first], len));
        prop_assert!(!is_slot_overlapping_with_bookings(&first, &[second], first.duration_minutes()));
    }

    #[test]
    fn merge_is_idempotent(ranges in prop::collection::vec(arb_range(), 0..12)) {
        let once = merge_overlapping_ranges(&ranges);
        let twice = merge_overlapping_ranges(&once);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn merge_preserves_coverage_and_leaves_gaps(ranges in prop::collection::vec(arb_range(), 0..12)) {
        let merged = merge_overlapping_ranges(&ranges);
        prop_assert_eq!(
            coverage(merged.iter().map(AvailabilityRange::as_minutes)),
            coverage(ranges.iter().map(AvailabilityRange::as_minutes))
        );
        for pair in merged.windows(2) {
            prop_assert!(pair[0].end_time() < pair[1].start_time());
        }
    }

    #[test]
    fn slot_conversion_preserves_coverage(
        starts in prop::collection::btree_set(0u32..DAY / 30, 0..20),
    ) {
        // Non-overlapping half-hour slots in arbitrary order.
        let mut slots: Vec<TimeSlot> = starts.iter().map(|&i| slot(i * 30, i * 30 + 30)).collect();
        slots.reverse();

        let ranges = convert_slots_to_ranges(&slots);
        prop_assert_eq!(
            coverage(ranges.iter().map(AvailabilityRange::as_minutes)),
            coverage(slots.iter().map(TimeSlot::as_minutes))
        );
        for pair in ranges.windows(2) {
            prop_assert!(pair[0].end_time() < pair[1].start_time());
        }
    }
}
