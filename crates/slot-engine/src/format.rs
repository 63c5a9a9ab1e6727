//! 12-hour display strings. Display only; nothing parses these back.

use chrono::NaiveTime;

use crate::time::{TimeOfDay, TimeSlot};

const MINUTES_PER_DAY: u32 = 24 * 60;

/// `"14:05"` → `"2:05 PM"`, `"00:30"` → `"12:30 AM"`, `"12:00"` → `"12:00 PM"`.
///
/// Day-relative times past midnight display as the next day's wall clock
/// (`25:10` → `"1:10 AM"`).
pub fn format_time_to_12_hour(time: TimeOfDay) -> String {
    let seconds = (time.minutes() % MINUTES_PER_DAY) * 60;
    match NaiveTime::from_num_seconds_from_midnight_opt(seconds, 0) {
        Some(t) => t.format("%-I:%M %p").to_string(),
        None => time.to_string(),
    }
}

/// Format both halves of a slot: `"09:00-10:30"` → `"9:00 AM-10:30 AM"`.
pub fn format_time_slot_to_12_hour(slot: &TimeSlot) -> String {
    format!(
        "{}-{}",
        format_time_to_12_hour(slot.start()),
        format_time_to_12_hour(slot.end())
    )
}
