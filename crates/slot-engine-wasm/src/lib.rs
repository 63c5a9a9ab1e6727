//! WASM bindings for slot-engine.
//!
//! Exposes slot conversion, availability and booking checks, and range
//! normalization to the booking UI via `wasm-bindgen`. Scalars cross the
//! boundary as-is; lists and ranges are passed as JSON strings.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p slot-engine-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir pkg/ \
//!   target/wasm32-unknown-unknown/release/slot_engine_wasm.wasm
//! ```

use serde::Serialize;
use serde_json::Value;
use slot_engine::{AvailabilityRange, Role, SlotWindow, TimeOfDay, TimeSlot};
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Helpers: parse inputs coming from JavaScript
// ---------------------------------------------------------------------------

fn js_err(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn parse_time(s: &str) -> Result<TimeOfDay, JsValue> {
    s.parse().map_err(js_err)
}

fn parse_slot(s: &str) -> Result<TimeSlot, JsValue> {
    s.parse().map_err(js_err)
}

/// Start half only; duration-authoritative checks never look at the end.
fn parse_start(slot: &str) -> Result<TimeOfDay, JsValue> {
    slot_engine::parse_slot_start(slot).map_err(js_err)
}

fn parse_ranges(json: &str) -> Result<Vec<AvailabilityRange>, JsValue> {
    serde_json::from_str(json).map_err(|e| JsValue::from_str(&format!("Invalid ranges JSON: {}", e)))
}

fn parse_slots(json: &str) -> Result<Vec<TimeSlot>, JsValue> {
    serde_json::from_str(json).map_err(|e| JsValue::from_str(&format!("Invalid slots JSON: {}", e)))
}

/// Booked slots straight from the data layer. Entries that are `null`,
/// non-strings, empty, or malformed are skipped; only the outer array must be
/// valid JSON.
fn parse_booked(json: &str) -> Result<Vec<TimeSlot>, JsValue> {
    let raw: Vec<Value> = serde_json::from_str(json)
        .map_err(|e| JsValue::from_str(&format!("Invalid booked slots JSON: {}", e)))?;
    Ok(slot_engine::parse_booked_slots(raw.iter().map(Value::as_str)))
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

#[derive(Serialize)]
struct MinuteSpanDto {
    start: u32,
    end: u32,
}

// ---------------------------------------------------------------------------
// Time conversion
// ---------------------------------------------------------------------------

#[wasm_bindgen(js_name = "timeToMinutes")]
pub fn time_to_minutes(time: &str) -> Result<u32, JsValue> {
    slot_engine::time_to_minutes(time).map_err(js_err)
}

#[wasm_bindgen(js_name = "minutesToTime")]
pub fn minutes_to_time(minutes: u32) -> String {
    slot_engine::minutes_to_time(minutes)
}

/// Returns `{"start": <minutes>, "end": <minutes>}` as JSON.
#[wasm_bindgen(js_name = "timeSlotToMinutes")]
pub fn time_slot_to_minutes(slot: &str) -> Result<String, JsValue> {
    let (start, end) = slot_engine::time_slot_to_minutes(slot).map_err(js_err)?;
    to_json(&MinuteSpanDto { start, end })
}

#[wasm_bindgen(js_name = "generateTimeSlotWithDuration")]
pub fn generate_time_slot_with_duration(start_time: &str, duration_minutes: u32) -> Result<String, JsValue> {
    let start = parse_time(start_time)?;
    slot_engine::generate_time_slot_with_duration(start, duration_minutes)
        .map(|slot| slot.to_string())
        .map_err(js_err)
}

// ---------------------------------------------------------------------------
// Slot generation
// ---------------------------------------------------------------------------

/// Candidate slots as a JSON array of strings. `start`/`end` default to
/// 08:00 and 16:30.
#[wasm_bindgen(js_name = "generateTimeSlots")]
pub fn generate_time_slots(
    slot_duration: u32,
    start: Option<String>,
    end: Option<String>,
) -> Result<String, JsValue> {
    let default = SlotWindow::default();
    let window = SlotWindow::new(
        start.as_deref().map(parse_time).transpose()?.unwrap_or(default.start),
        end.as_deref().map(parse_time).transpose()?.unwrap_or(default.end),
    );
    to_json(&slot_engine::generate_time_slots(slot_duration, window))
}

// ---------------------------------------------------------------------------
// Availability and booking predicates
// ---------------------------------------------------------------------------

#[wasm_bindgen(js_name = "isTimeSlotInAnyRange")]
pub fn is_time_slot_in_any_range(slot: &str, ranges_json: &str) -> Result<bool, JsValue> {
    Ok(slot_engine::is_time_slot_in_any_range(
        &parse_slot(slot)?,
        &parse_ranges(ranges_json)?,
    ))
}

#[wasm_bindgen(js_name = "isSlotAvailableForDuration")]
pub fn is_slot_available_for_duration(
    slot: &str,
    ranges_json: &str,
    duration_minutes: u32,
) -> Result<bool, JsValue> {
    Ok(slot_engine::is_start_available_for_duration(
        parse_start(slot)?,
        &parse_ranges(ranges_json)?,
        duration_minutes,
    ))
}

#[wasm_bindgen(js_name = "isTimeSlotBooked")]
pub fn is_time_slot_booked(slot: &str, booked_json: &str) -> Result<bool, JsValue> {
    Ok(slot_engine::is_time_slot_booked(
        &parse_slot(slot)?,
        &parse_booked(booked_json)?,
    ))
}

#[wasm_bindgen(js_name = "isSlotOverlappingWithBookings")]
pub fn is_slot_overlapping_with_bookings(
    slot: &str,
    booked_json: &str,
    duration_minutes: u32,
) -> Result<bool, JsValue> {
    Ok(slot_engine::is_start_overlapping_with_bookings(
        parse_start(slot)?,
        &parse_booked(booked_json)?,
        duration_minutes,
    ))
}

/// Filter candidate slots for `role`. The teacher role (any case) gets every
/// slot back; every other role string gets only slots inside a range.
#[wasm_bindgen(js_name = "filterAvailableTimeSlots")]
pub fn filter_available_time_slots(
    slots_json: &str,
    ranges_json: &str,
    role: &str,
) -> Result<String, JsValue> {
    let role = Role::from(role);
    let filtered = slot_engine::filter_available_time_slots(
        &parse_slots(slots_json)?,
        &parse_ranges(ranges_json)?,
        role.slot_view(),
    );
    to_json(&filtered)
}

// ---------------------------------------------------------------------------
// Range normalization
// ---------------------------------------------------------------------------

#[wasm_bindgen(js_name = "convertSlotsToRanges")]
pub fn convert_slots_to_ranges(slots_json: &str) -> Result<String, JsValue> {
    to_json(&slot_engine::convert_slots_to_ranges(&parse_slots(slots_json)?))
}

#[wasm_bindgen(js_name = "mergeOverlappingRanges")]
pub fn merge_overlapping_ranges(ranges_json: &str) -> Result<String, JsValue> {
    to_json(&slot_engine::merge_overlapping_ranges(&parse_ranges(ranges_json)?))
}

// ---------------------------------------------------------------------------
// Display formatting
// ---------------------------------------------------------------------------

#[wasm_bindgen(js_name = "formatTimeTo12Hour")]
pub fn format_time_to_12_hour(time: &str) -> Result<String, JsValue> {
    Ok(slot_engine::format_time_to_12_hour(parse_time(time)?))
}

#[wasm_bindgen(js_name = "formatTimeSlotTo12Hour")]
pub fn format_time_slot_to_12_hour(slot: &str) -> Result<String, JsValue> {
    Ok(slot_engine::format_time_slot_to_12_hour(&parse_slot(slot)?))
}
