//! A teacher's weekly availability and the per-day booking grid built from it.
//!
//! The data layer stores availability keyed by lowercase English weekday
//! (`"monday"` ... `"sunday"`); all times share one caller-chosen frame of
//! reference.

use std::collections::BTreeMap;

use chrono::Weekday;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::booking::{classify_slot, SlotStatus};
use crate::error::{Result, ScheduleError};
use crate::generate::{generate_time_slots, SlotWindow};
use crate::merge::merge_overlapping_ranges;
use crate::range::AvailabilityRange;
use crate::time::TimeSlot;

const DAY_KEYS: [(&str, Weekday); 7] = [
    ("monday", Weekday::Mon),
    ("tuesday", Weekday::Tue),
    ("wednesday", Weekday::Wed),
    ("thursday", Weekday::Thu),
    ("friday", Weekday::Fri),
    ("saturday", Weekday::Sat),
    ("sunday", Weekday::Sun),
];

/// Parse a day key. Only the lowercase full English name is accepted.
pub fn parse_day_key(key: &str) -> Result<Weekday> {
    DAY_KEYS
        .iter()
        .find(|(name, _)| *name == key)
        .map(|&(_, day)| day)
        .ok_or_else(|| ScheduleError::UnknownDay(key.to_string()))
}

/// The storage key for `day`.
pub fn day_key(day: Weekday) -> &'static str {
    DAY_KEYS[day.num_days_from_monday() as usize].0
}

/// Availability ranges for each day of the week.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeeklyAvailability {
    days: [Vec<AvailabilityRange>; 7],
}

impl WeeklyAvailability {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `{"monday": [{"startTime": "09:00", "endTime": "12:00"}], ...}`.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Ranges for `day`; empty when the teacher has none.
    pub fn ranges_for(&self, day: Weekday) -> &[AvailabilityRange] {
        &self.days[day.num_days_from_monday() as usize]
    }

    pub fn set(&mut self, day: Weekday, ranges: Vec<AvailabilityRange>) {
        self.days[day.num_days_from_monday() as usize] = ranges;
    }

    pub fn push(&mut self, day: Weekday, range: AvailabilityRange) {
        self.days[day.num_days_from_monday() as usize].push(range);
    }

    pub fn is_empty(&self) -> bool {
        self.days.iter().all(Vec::is_empty)
    }

    /// A copy with every day's ranges merged.
    pub fn normalized(&self) -> Self {
        WeeklyAvailability {
            days: std::array::from_fn(|i| merge_overlapping_ranges(&self.days[i])),
        }
    }

    /// Classified booking grid for `day`.
    pub fn grid_for(
        &self,
        day: Weekday,
        window: SlotWindow,
        duration_minutes: u32,
        booked: &[TimeSlot],
    ) -> Vec<GridCell> {
        day_grid(window, duration_minutes, self.ranges_for(day), booked)
    }
}

impl Serialize for WeeklyAvailability {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_map(
            DAY_KEYS
                .iter()
                .map(|&(key, day)| (key, self.ranges_for(day)))
                .filter(|(_, ranges)| !ranges.is_empty()),
        )
    }
}

impl<'de> Deserialize<'de> for WeeklyAvailability {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = BTreeMap::<String, Vec<AvailabilityRange>>::deserialize(deserializer)?;
        let mut weekly = WeeklyAvailability::new();
        for (key, ranges) in raw {
            let day = parse_day_key(&key).map_err(de::Error::custom)?;
            weekly.set(day, ranges);
        }
        Ok(weekly)
    }
}

/// One cell of the booking grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GridCell {
    pub slot: TimeSlot,
    pub status: SlotStatus,
}

/// Generate the day's candidate slots and classify each against availability
/// and existing bookings.
pub fn day_grid(
    window: SlotWindow,
    duration_minutes: u32,
    ranges: &[AvailabilityRange],
    booked: &[TimeSlot],
) -> Vec<GridCell> {
    generate_time_slots(duration_minutes, window)
        .into_iter()
        .map(|slot| GridCell {
            slot,
            status: classify_slot(&slot, ranges, booked, duration_minutes),
        })
        .collect()
}
