//! Availability and booking predicates for candidate class slots.
//!
//! Two checks decide whether a slot can be offered: *containment* (the slot
//! lies wholly inside one availability range) and *overlap* (the slot shares
//! time with an already-booked class). Both have a duration-authoritative
//! form that ignores the slot's own end and re-derives it from the class
//! duration actually requested.

use serde::{Deserialize, Serialize};

use crate::range::AvailabilityRange;
use crate::time::{TimeOfDay, TimeSlot};

/// `[start, start + duration)` in minutes.
fn span_for_duration(start: TimeOfDay, duration_minutes: u32) -> (u32, u32) {
    let start = start.minutes();
    (start, start.saturating_add(duration_minutes))
}

fn contained_in_any(start: u32, end: u32, ranges: &[AvailabilityRange]) -> bool {
    ranges.iter().any(|range| range.contains_minutes(start, end))
}

/// Two half-open intervals overlap iff `s1 < e2 && e1 > s2`. Touching
/// endpoints do not count.
fn overlaps_any(start: u32, end: u32, booked: &[TimeSlot]) -> bool {
    booked.iter().any(|b| {
        let (booked_start, booked_end) = b.as_minutes();
        start < booked_end && end > booked_start
    })
}

/// True iff the slot lies wholly inside at least one range. No ranges means
/// nothing is available.
pub fn is_time_slot_in_any_range(slot: &TimeSlot, ranges: &[AvailabilityRange]) -> bool {
    let (start, end) = slot.as_minutes();
    contained_in_any(start, end, ranges)
}

/// Like [`is_time_slot_in_any_range`], but the end is `slot.start +
/// duration_minutes` regardless of the end the slot carries.
pub fn is_slot_available_for_duration(
    slot: &TimeSlot,
    ranges: &[AvailabilityRange],
    duration_minutes: u32,
) -> bool {
    is_start_available_for_duration(slot.start(), ranges, duration_minutes)
}

/// Containment of `[start, start + duration_minutes)`, for callers that only
/// have a start time.
pub fn is_start_available_for_duration(
    start: TimeOfDay,
    ranges: &[AvailabilityRange],
    duration_minutes: u32,
) -> bool {
    let (start, end) = span_for_duration(start, duration_minutes);
    contained_in_any(start, end, ranges)
}

/// True iff the slot, as written, overlaps any booked slot.
pub fn is_time_slot_booked(slot: &TimeSlot, booked: &[TimeSlot]) -> bool {
    let (start, end) = slot.as_minutes();
    overlaps_any(start, end, booked)
}

/// True iff `[slot.start, slot.start + duration_minutes)` overlaps any booked
/// slot.
pub fn is_slot_overlapping_with_bookings(
    slot: &TimeSlot,
    booked: &[TimeSlot],
    duration_minutes: u32,
) -> bool {
    is_start_overlapping_with_bookings(slot.start(), booked, duration_minutes)
}

/// Overlap of `[start, start + duration_minutes)` with any booked slot.
pub fn is_start_overlapping_with_bookings(
    start: TimeOfDay,
    booked: &[TimeSlot],
    duration_minutes: u32,
) -> bool {
    let (start, end) = span_for_duration(start, duration_minutes);
    overlaps_any(start, end, booked)
}

/// Turn raw booked-slot entries from the data layer into slots.
///
/// Missing, empty, and unparseable entries are dropped: a booking that cannot
/// be read never blocks a slot.
pub fn parse_booked_slots<I, S>(entries: I) -> Vec<TimeSlot>
where
    I: IntoIterator<Item = Option<S>>,
    S: AsRef<str>,
{
    entries
        .into_iter()
        .filter_map(|entry| {
            let entry = entry?;
            let raw = entry.as_ref();
            match raw.parse::<TimeSlot>() {
                Ok(slot) => Some(slot),
                Err(e) => {
                    tracing::debug!(entry = raw, error = %e, "ignoring unreadable booked slot");
                    None
                }
            }
        })
        .collect()
}

/// A platform role, as supplied by the authentication layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Teacher,
    Student,
    /// Any role this engine has no name for.
    #[serde(other)]
    Other,
}

impl From<&str> for Role {
    /// Case-insensitive; unrecognised names map to `Role::Other`.
    fn from(name: &str) -> Self {
        let name = name.trim();
        if name.eq_ignore_ascii_case("teacher") {
            Role::Teacher
        } else if name.eq_ignore_ascii_case("student") {
            Role::Student
        } else if name.eq_ignore_ascii_case("admin") {
            Role::Admin
        } else {
            Role::Other
        }
    }
}

impl Role {
    /// Teachers see their own unfiltered grid; everyone else sees only slots
    /// inside the teacher's availability.
    pub const fn slot_view(self) -> SlotView {
        match self {
            Role::Teacher => SlotView::OwnGrid,
            Role::Admin | Role::Student | Role::Other => SlotView::Availability,
        }
    }
}

/// How a list of candidate slots is narrowed before display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotView {
    /// Every candidate slot, unfiltered.
    OwnGrid,
    /// Only slots contained in an availability range.
    #[default]
    Availability,
}

/// The teacher's own grid: every candidate, unchanged.
pub fn all_slots_for_teacher(all_slots: &[TimeSlot]) -> Vec<TimeSlot> {
    all_slots.to_vec()
}

/// Candidates contained in at least one range. Empty ranges give an empty
/// result.
pub fn filter_by_availability(all_slots: &[TimeSlot], ranges: &[AvailabilityRange]) -> Vec<TimeSlot> {
    all_slots
        .iter()
        .filter(|slot| is_time_slot_in_any_range(slot, ranges))
        .copied()
        .collect()
}

/// Narrow `all_slots` according to `view`.
pub fn filter_available_time_slots(
    all_slots: &[TimeSlot],
    ranges: &[AvailabilityRange],
    view: SlotView,
) -> Vec<TimeSlot> {
    match view {
        SlotView::OwnGrid => all_slots_for_teacher(all_slots),
        SlotView::Availability => filter_by_availability(all_slots, ranges),
    }
}

/// Render state of one booking-grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotStatus {
    Available,
    Booked,
    Unavailable,
}

impl SlotStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            SlotStatus::Available => "available",
            SlotStatus::Booked => "booked",
            SlotStatus::Unavailable => "unavailable",
        }
    }
}

/// Classify a candidate slot for a class of `duration_minutes`.
///
/// A conflicting booking wins over availability; a slot neither booked nor
/// contained in a range is unavailable.
pub fn classify_slot(
    slot: &TimeSlot,
    ranges: &[AvailabilityRange],
    booked: &[TimeSlot],
    duration_minutes: u32,
) -> SlotStatus {
    classify_start(slot.start(), ranges, booked, duration_minutes)
}

/// [`classify_slot`] for a class starting at `start`.
pub fn classify_start(
    start: TimeOfDay,
    ranges: &[AvailabilityRange],
    booked: &[TimeSlot],
    duration_minutes: u32,
) -> SlotStatus {
    if is_start_overlapping_with_bookings(start, booked, duration_minutes) {
        SlotStatus::Booked
    } else if is_start_available_for_duration(start, ranges, duration_minutes) {
        SlotStatus::Available
    } else {
        SlotStatus::Unavailable
    }
}
