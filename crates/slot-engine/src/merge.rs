//! Range normalization: coalesce slots into ranges, merge overlapping ranges,
//! and subtract bookings from availability.
//!
//! Inputs are borrowed and never reordered; each function sorts its own
//! working copy.

use crate::range::AvailabilityRange;
use crate::time::{TimeOfDay, TimeSlot};

/// Stable-sort `(start, end)` minute pairs by start and fold them into
/// maximal runs. Pairs sharing a start keep their input order.
///
/// `joins(next_start, current_end)` decides whether the next interval extends
/// the current run.
fn coalesce(mut intervals: Vec<(u32, u32)>, joins: impl Fn(u32, u32) -> bool) -> Vec<(u32, u32)> {
    intervals.sort_by_key(|&(start, _)| start);

    let mut merged: Vec<(u32, u32)> = Vec::with_capacity(intervals.len());
    for (start, end) in intervals {
        if let Some(last) = merged.last_mut() {
            if joins(start, last.1) {
                last.1 = last.1.max(end);
                continue;
            }
        }
        merged.push((start, end));
    }
    merged
}

fn to_range((start, end): (u32, u32)) -> AvailabilityRange {
    AvailabilityRange::from(TimeSlot::from_ordered(
        TimeOfDay::from_minutes(start),
        TimeOfDay::from_minutes(end),
    ))
}

/// Collapse slots into the minimal list of contiguous ranges.
///
/// Slots are sorted by start; a slot extends the current range only when it
/// starts exactly where the range ends. Any gap starts a new range.
pub fn convert_slots_to_ranges(slots: &[TimeSlot]) -> Vec<AvailabilityRange> {
    let intervals = slots.iter().map(TimeSlot::as_minutes).collect();
    let ranges: Vec<AvailabilityRange> = coalesce(intervals, |next_start, current_end| {
        next_start == current_end
    })
    .into_iter()
    .map(to_range)
    .collect();

    tracing::debug!(slots = slots.len(), ranges = ranges.len(), "converted slots to ranges");
    ranges
}

/// Merge overlapping or touching ranges into a sorted, disjoint list.
///
/// A range whose start is at or before the current end is absorbed, and the
/// end becomes the later of the two.
pub fn merge_overlapping_ranges(ranges: &[AvailabilityRange]) -> Vec<AvailabilityRange> {
    if ranges.len() <= 1 {
        return ranges.to_vec();
    }

    let intervals = ranges.iter().map(AvailabilityRange::as_minutes).collect();
    let merged: Vec<AvailabilityRange> = coalesce(intervals, |next_start, current_end| {
        next_start <= current_end
    })
    .into_iter()
    .map(to_range)
    .collect();

    tracing::debug!(input = ranges.len(), merged = merged.len(), "merged availability ranges");
    merged
}

/// The parts of `ranges` not covered by any booked slot, merged and sorted.
pub fn free_ranges(ranges: &[AvailabilityRange], booked: &[TimeSlot]) -> Vec<AvailabilityRange> {
    let busy = coalesce(booked.iter().map(TimeSlot::as_minutes).collect(), |s, e| s <= e);

    let mut free = Vec::new();
    for range in merge_overlapping_ranges(ranges) {
        let (range_start, range_end) = range.as_minutes();
        let mut cursor = range_start;

        for &(busy_start, busy_end) in &busy {
            if busy_end <= cursor || busy_start >= range_end {
                continue;
            }
            if cursor < busy_start {
                free.push((cursor, busy_start));
            }
            cursor = cursor.max(busy_end);
        }

        if cursor < range_end {
            free.push((cursor, range_end));
        }
    }

    free.into_iter().map(to_range).collect()
}
