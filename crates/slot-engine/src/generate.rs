//! Candidate slot generation for the booking grid.
//!
//! The grid uses a fixed-duration model: at most one candidate per whole hour,
//! each starting on the hour.

use serde::{Deserialize, Serialize};

use crate::time::{TimeOfDay, TimeSlot, MINUTES_PER_HOUR};

/// The part of the day the booking grid covers. Defaults to 08:00-16:30.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotWindow {
    pub start: TimeOfDay,
    pub end: TimeOfDay,
}

impl SlotWindow {
    pub const fn new(start: TimeOfDay, end: TimeOfDay) -> Self {
        SlotWindow { start, end }
    }

    /// First whole hour at or after `start`.
    fn first_hour(&self) -> u32 {
        self.start.minutes().div_ceil(MINUTES_PER_HOUR)
    }

    /// Whole hour at or after `end`; exclusive bound on slot start hours.
    fn last_hour(&self) -> u32 {
        self.end.minutes().div_ceil(MINUTES_PER_HOUR)
    }
}

impl Default for SlotWindow {
    fn default() -> Self {
        SlotWindow {
            start: TimeOfDay::from_minutes(8 * MINUTES_PER_HOUR),
            end: TimeOfDay::from_minutes(16 * MINUTES_PER_HOUR + 30),
        }
    }
}

/// Enumerate one `slot_duration`-minute slot per whole hour of the window.
///
/// Hours run over `[ceil(start), ceil(end))`; each slot starts at minute 0 of
/// its hour and is kept only if it ends no later than `window.end`. Output is
/// ascending by start. A zero duration yields no slots.
pub fn generate_time_slots(slot_duration: u32, window: SlotWindow) -> Vec<TimeSlot> {
    if slot_duration == 0 {
        return Vec::new();
    }

    let window_end = window.end.minutes();
    (window.first_hour()..window.last_hour())
        .filter_map(|hour| {
            let start = hour * MINUTES_PER_HOUR;
            let end = start.checked_add(slot_duration)?;
            (end <= window_end).then(|| {
                TimeSlot::from_ordered(TimeOfDay::from_minutes(start), TimeOfDay::from_minutes(end))
            })
        })
        .collect()
}
