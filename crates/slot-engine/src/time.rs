//! Time-of-day and time-slot value types.
//!
//! Wall-clock times are parsed once at the boundary into [`TimeOfDay`]
//! (minutes since midnight) and [`TimeSlot`] (a half-open `[start, end)`
//! pair), so the scheduling algorithms work on integers only.
//!
//! Minutes are day-relative: 24:00 and later are legal values and render
//! literally (`"25:10"`). That is how a slot running past midnight is
//! expressed; a slot or range whose end is not after its start is rejected.

use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Result, ScheduleError};

/// Minutes in one hour.
pub const MINUTES_PER_HOUR: u32 = 60;

/// A wall-clock time, stored as minutes since midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct TimeOfDay(u32);

impl TimeOfDay {
    pub const MIDNIGHT: TimeOfDay = TimeOfDay(0);

    /// Build a time from hour and minute. The minute must be below 60.
    pub fn new(hour: u32, minute: u32) -> Result<Self> {
        if minute >= MINUTES_PER_HOUR {
            return Err(ScheduleError::InvalidTime(format!("{hour}:{minute}")));
        }
        hour.checked_mul(MINUTES_PER_HOUR)
            .and_then(|m| m.checked_add(minute))
            .map(TimeOfDay)
            .ok_or_else(|| ScheduleError::InvalidTime(format!("{hour}:{minute}")))
    }

    pub const fn from_minutes(minutes: u32) -> Self {
        TimeOfDay(minutes)
    }

    /// Minutes since midnight.
    pub const fn minutes(self) -> u32 {
        self.0
    }

    pub const fn hour(self) -> u32 {
        self.0 / MINUTES_PER_HOUR
    }

    pub const fn minute(self) -> u32 {
        self.0 % MINUTES_PER_HOUR
    }

    pub fn checked_add_minutes(self, minutes: u32) -> Option<Self> {
        self.0.checked_add(minutes).map(TimeOfDay)
    }
}

/// Parse one `H`/`HH`/`M`/`MM` component: one or two ASCII digits.
fn parse_component(part: &str) -> Option<u32> {
    let part = part.trim();
    if part.is_empty() || part.len() > 2 || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

impl FromStr for TimeOfDay {
    type Err = ScheduleError;

    /// Accepts zero-padded or unpadded components: `"09:05"` and `"9:5"` are
    /// both 545 minutes.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || ScheduleError::InvalidTime(s.to_string());
        let (hour, minute) = s.split_once(':').ok_or_else(invalid)?;
        let hour = parse_component(hour).ok_or_else(invalid)?;
        let minute = parse_component(minute).ok_or_else(invalid)?;
        TimeOfDay::new(hour, minute).map_err(|_| invalid())
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

/// A half-open `[start, end)` interval of wall-clock time, written
/// `"HH:MM-HH:MM"`.
///
/// A class from 09:00 lasting 60 minutes occupies `09:00-10:00` and does not
/// conflict with one starting at 10:00.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeSlot {
    start: TimeOfDay,
    end: TimeOfDay,
}

impl TimeSlot {
    /// # Errors
    /// Returns `ScheduleError::EmptyInterval` unless `start < end`.
    pub fn new(start: TimeOfDay, end: TimeOfDay) -> Result<Self> {
        if start >= end {
            return Err(ScheduleError::EmptyInterval {
                start: start.to_string(),
                end: end.to_string(),
            });
        }
        Ok(TimeSlot { start, end })
    }

    /// Caller guarantees `start < end`.
    pub(crate) const fn from_ordered(start: TimeOfDay, end: TimeOfDay) -> Self {
        TimeSlot { start, end }
    }

    /// The slot beginning at `start` and lasting `duration_minutes`.
    ///
    /// # Errors
    /// Returns `ScheduleError::InvalidDuration` for a zero duration.
    pub fn starting_at(start: TimeOfDay, duration_minutes: u32) -> Result<Self> {
        if duration_minutes == 0 {
            return Err(ScheduleError::InvalidDuration(duration_minutes));
        }
        let end = start
            .checked_add_minutes(duration_minutes)
            .ok_or(ScheduleError::InvalidDuration(duration_minutes))?;
        TimeSlot::new(start, end)
    }

    pub const fn start(&self) -> TimeOfDay {
        self.start
    }

    pub const fn end(&self) -> TimeOfDay {
        self.end
    }

    pub const fn duration_minutes(&self) -> u32 {
        self.end.0 - self.start.0
    }

    /// `(start, end)` in minutes since midnight.
    pub const fn as_minutes(&self) -> (u32, u32) {
        (self.start.0, self.end.0)
    }

    /// True when the two slots share a strictly positive stretch of time.
    /// Touching slots (`a.end == b.start`) do not overlap.
    pub fn overlaps(&self, other: &TimeSlot) -> bool {
        self.start < other.end && self.end > other.start
    }
}

impl FromStr for TimeSlot {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || ScheduleError::InvalidSlot(s.to_string());
        let (start, end) = s.split_once('-').ok_or_else(invalid)?;
        let start: TimeOfDay = start.parse().map_err(|_| invalid())?;
        let end: TimeOfDay = end.parse().map_err(|_| invalid())?;
        TimeSlot::new(start, end)
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

impl Serialize for TimeSlot {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeSlot {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

/// Convert `"HH:MM"` (padding optional) into minutes since midnight.
pub fn time_to_minutes(time: &str) -> Result<u32> {
    time.parse::<TimeOfDay>().map(TimeOfDay::minutes)
}

/// Render minutes since midnight as zero-padded `"HH:MM"`. Inverse of
/// [`time_to_minutes`].
pub fn minutes_to_time(minutes: u32) -> String {
    TimeOfDay::from_minutes(minutes).to_string()
}

/// Split a slot string once on `-`. The end half is `None` when there is no
/// separator; nothing else is validated.
pub fn split_time_slot(slot: &str) -> (&str, Option<&str>) {
    match slot.split_once('-') {
        Some((start, end)) => (start, Some(end)),
        None => (slot, None),
    }
}

/// Parse only the start half of a slot string.
///
/// Duration-authoritative checks ignore the slot's nominal end, so an end that
/// is missing or not after the start does not matter here.
pub fn parse_slot_start(slot: &str) -> Result<TimeOfDay> {
    split_time_slot(slot)
        .0
        .parse()
        .map_err(|_| ScheduleError::InvalidSlot(slot.to_string()))
}

/// Convert a slot string into `(start, end)` minutes.
///
/// Each half is parsed independently; the pair is not required to be ordered.
pub fn time_slot_to_minutes(slot: &str) -> Result<(u32, u32)> {
    match split_time_slot(slot) {
        (start, Some(end)) => Ok((time_to_minutes(start)?, time_to_minutes(end)?)),
        (_, None) => Err(ScheduleError::InvalidSlot(slot.to_string())),
    }
}

/// The canonical slot a class starting at `start` occupies for
/// `duration_minutes`, e.g. `14:30` + 40 → `14:30-15:10`.
///
/// Ends past midnight are not wrapped: `23:30` + 60 → `23:30-24:30`.
pub fn generate_time_slot_with_duration(start: TimeOfDay, duration_minutes: u32) -> Result<TimeSlot> {
    TimeSlot::starting_at(start, duration_minutes)
}
