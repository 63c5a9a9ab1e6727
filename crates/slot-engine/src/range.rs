//! Availability ranges: contiguous windows in which a teacher is bookable.

use std::fmt;

use serde::{de, Deserialize, Deserializer, Serialize};

use crate::error::{Result, ScheduleError};
use crate::time::{TimeOfDay, TimeSlot};

/// A single bookable window, serialized as `{"startTime": "HH:MM", "endTime": "HH:MM"}`.
///
/// Construction enforces `start_time < end_time`; a window crossing midnight
/// must use day-relative minutes (`23:00`-`25:00`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityRange {
    start_time: TimeOfDay,
    end_time: TimeOfDay,
}

impl AvailabilityRange {
    /// # Errors
    /// Returns `ScheduleError::EmptyInterval` unless `start_time < end_time`.
    pub fn new(start_time: TimeOfDay, end_time: TimeOfDay) -> Result<Self> {
        if start_time >= end_time {
            return Err(ScheduleError::EmptyInterval {
                start: start_time.to_string(),
                end: end_time.to_string(),
            });
        }
        Ok(AvailabilityRange {
            start_time,
            end_time,
        })
    }

    /// Parse both bounds from `"HH:MM"` text.
    pub fn parse(start_time: &str, end_time: &str) -> Result<Self> {
        AvailabilityRange::new(start_time.parse()?, end_time.parse()?)
    }

    pub const fn start_time(&self) -> TimeOfDay {
        self.start_time
    }

    pub const fn end_time(&self) -> TimeOfDay {
        self.end_time
    }

    /// `(start, end)` in minutes since midnight.
    pub const fn as_minutes(&self) -> (u32, u32) {
        (self.start_time.minutes(), self.end_time.minutes())
    }

    /// True when `[start, end)` minutes lie entirely inside this range.
    pub fn contains_minutes(&self, start: u32, end: u32) -> bool {
        let (range_start, range_end) = self.as_minutes();
        start >= range_start && end <= range_end
    }

    pub fn contains(&self, slot: &TimeSlot) -> bool {
        let (start, end) = slot.as_minutes();
        self.contains_minutes(start, end)
    }
}

impl From<TimeSlot> for AvailabilityRange {
    fn from(slot: TimeSlot) -> Self {
        AvailabilityRange {
            start_time: slot.start(),
            end_time: slot.end(),
        }
    }
}

impl From<AvailabilityRange> for TimeSlot {
    fn from(range: AvailabilityRange) -> Self {
        TimeSlot::from_ordered(range.start_time, range.end_time)
    }
}

impl fmt::Display for AvailabilityRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start_time, self.end_time)
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawRange {
    start_time: TimeOfDay,
    end_time: TimeOfDay,
}

impl<'de> Deserialize<'de> for AvailabilityRange {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = RawRange::deserialize(deserializer)?;
        AvailabilityRange::new(raw.start_time, raw.end_time).map_err(de::Error::custom)
    }
}
