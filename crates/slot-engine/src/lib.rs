//! # slot-engine
//!
//! Teacher availability and class-slot scheduling for lesson booking.
//!
//! Every function here is pure: plain values in, plain values out, no I/O and
//! no shared state. Times are wall-clock `"HH:MM"` strings at the edges and
//! minutes since midnight inside.
//!
//! ## Modules
//!
//! - [`time`] — `TimeOfDay` / `TimeSlot` parsing and minute conversion
//! - [`generate`] — candidate slots for the booking grid
//! - [`range`] — `AvailabilityRange`
//! - [`booking`] — containment and overlap predicates, role-based filtering
//! - [`merge`] — slots → ranges, range merging, free windows
//! - [`format`] — 12-hour display strings
//! - [`weekly`] — per-weekday availability and the classified day grid
//! - [`error`] — Error types

pub mod booking;
pub mod error;
pub mod format;
pub mod generate;
pub mod merge;
pub mod range;
pub mod time;
pub mod weekly;

pub use booking::{
    all_slots_for_teacher, classify_slot, classify_start, filter_available_time_slots,
    filter_by_availability, is_slot_available_for_duration, is_slot_overlapping_with_bookings,
    is_start_available_for_duration, is_start_overlapping_with_bookings, is_time_slot_booked,
    is_time_slot_in_any_range, parse_booked_slots, Role, SlotStatus, SlotView,
};
pub use error::ScheduleError;
pub use format::{format_time_slot_to_12_hour, format_time_to_12_hour};
pub use generate::{generate_time_slots, SlotWindow};
pub use merge::{convert_slots_to_ranges, free_ranges, merge_overlapping_ranges};
pub use range::AvailabilityRange;
pub use time::{
    generate_time_slot_with_duration, minutes_to_time, parse_slot_start, split_time_slot,
    time_slot_to_minutes, time_to_minutes, TimeOfDay, TimeSlot,
};
pub use weekly::{day_grid, GridCell, WeeklyAvailability};
