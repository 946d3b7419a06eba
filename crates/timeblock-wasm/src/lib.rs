//! WASM bindings for timeblock-engine.
//!
//! Exposes slot-grid generation, collapsing, conflict checks and placement to
//! the web front-end via `wasm-bindgen`. Bookings and slots cross the boundary
//! as JSON strings; wall-clock values are `"HH:MM"` strings.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p timeblock-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir web/wasm/ \
//!   target/wasm32-unknown-unknown/release/timeblock_wasm.wasm
//! ```
//!
//! Each export is a thin wrapper over a `*_json` function returning
//! `Result<String, String>`, so the marshalling is testable off-wasm.

use serde::{Deserialize, Serialize};
use timeblock_engine::{Booking, TimeSlot, WallClock};
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Serde-friendly DTOs for crossing the WASM boundary as JSON
// ---------------------------------------------------------------------------

/// A slot as the timeline renderer consumes it.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SlotDto {
    start: String,
    end: String,
    available: bool,
    #[serde(default, skip_deserializing)]
    duration_minutes: i64,
}

impl From<&TimeSlot> for SlotDto {
    fn from(s: &TimeSlot) -> Self {
        Self {
            start: s.start.to_string(),
            end: s.end.to_string(),
            available: s.available,
            duration_minutes: s.duration_minutes(),
        }
    }
}

impl TryFrom<SlotDto> for TimeSlot {
    type Error = String;

    fn try_from(dto: SlotDto) -> Result<Self, String> {
        Ok(TimeSlot {
            start: parse_time(&dto.start)?,
            end: parse_time(&dto.end)?,
            available: dto.available,
        })
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn parse_time(s: &str) -> Result<WallClock, String> {
    s.parse().map_err(|e: timeblock_engine::TimeblockError| e.to_string())
}

fn parse_bookings_json(json: &str) -> Result<Vec<Booking>, String> {
    if json.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str(json).map_err(|e| format!("Invalid bookings JSON: {}", e))
}

fn parse_slots_json(json: &str) -> Result<Vec<TimeSlot>, String> {
    let dtos: Vec<SlotDto> =
        serde_json::from_str(json).map_err(|e| format!("Invalid slots JSON: {}", e))?;
    dtos.into_iter().map(TimeSlot::try_from).collect()
}

fn slots_to_json(slots: &[TimeSlot]) -> Result<String, String> {
    let dtos: Vec<SlotDto> = slots.iter().map(SlotDto::from).collect();
    serde_json::to_string(&dtos).map_err(|e| format!("Serialization error: {}", e))
}

// ---------------------------------------------------------------------------
// JSON-level implementations
// ---------------------------------------------------------------------------

fn generate_slots_json(
    start_hour: u32,
    end_hour: u32,
    bookings_json: &str,
) -> Result<String, String> {
    let bookings = parse_bookings_json(bookings_json)?;
    let slots = timeblock_engine::generate_slots(start_hour, end_hour, &bookings)
        .map_err(|e| e.to_string())?;
    slots_to_json(&slots)
}

fn collapse_slots_json(slots_json: &str, min_empty_group: usize) -> Result<String, String> {
    let slots = parse_slots_json(slots_json)?;
    slots_to_json(&timeblock_engine::collapse(&slots, min_empty_group))
}

fn check_conflicts_json(
    start: &str,
    end: &str,
    bookings_json: &str,
    exclude_id: Option<&str>,
) -> Result<String, String> {
    let start = parse_time(start)?;
    let end = parse_time(end)?;
    let bookings = parse_bookings_json(bookings_json)?;
    let result = timeblock_engine::check_conflicts(start, end, &bookings, exclude_id);
    serde_json::to_string(&result).map_err(|e| format!("Serialization error: {}", e))
}

fn find_slot_json(
    slots_json: &str,
    duration_minutes: u32,
    preferred_start: Option<&str>,
) -> Result<String, String> {
    let slots = parse_slots_json(slots_json)?;
    let preferred = preferred_start.map(parse_time).transpose()?;
    let found = timeblock_engine::find_slot(&slots, duration_minutes, preferred);
    serde_json::to_string(&found.as_ref().map(SlotDto::from))
        .map_err(|e| format!("Serialization error: {}", e))
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Generate the 15-minute grid for `startHour..=endHour`.
///
/// `bookingsJson` is a JSON array of `{id, start_time, end_time, items}`;
/// an empty string means no bookings. Returns a JSON array of
/// `{start, end, available, durationMinutes}`.
#[wasm_bindgen(js_name = "generateSlots")]
pub fn generate_slots(
    start_hour: u32,
    end_hour: u32,
    bookings_json: &str,
) -> Result<String, JsValue> {
    generate_slots_json(start_hour, end_hour, bookings_json).map_err(|e| JsValue::from_str(&e))
}

/// Merge runs of at least `minEmptyGroup` free slots for display.
#[wasm_bindgen(js_name = "collapseSlots")]
pub fn collapse_slots(slots_json: &str, min_empty_group: usize) -> Result<String, JsValue> {
    collapse_slots_json(slots_json, min_empty_group).map_err(|e| JsValue::from_str(&e))
}

/// Check a candidate `[start, end)` against existing bookings.
///
/// Returns `{hasConflict, conflictingItems}` as JSON.
#[wasm_bindgen(js_name = "checkConflicts")]
pub fn check_conflicts(
    start: &str,
    end: &str,
    bookings_json: &str,
    exclude_id: Option<String>,
) -> Result<String, JsValue> {
    check_conflicts_json(start, end, bookings_json, exclude_id.as_deref())
        .map_err(|e| JsValue::from_str(&e))
}

/// Find the earliest free window for `durationMinutes` in a raw (uncollapsed)
/// grid. Returns the slot as JSON, or `"null"` when nothing fits.
#[wasm_bindgen(js_name = "findSlot")]
pub fn find_slot(
    slots_json: &str,
    duration_minutes: u32,
    preferred_start: Option<String>,
) -> Result<String, JsValue> {
    find_slot_json(slots_json, duration_minutes, preferred_start.as_deref())
        .map_err(|e| JsValue::from_str(&e))
}

#[wasm_bindgen(js_name = "timeToMinutes")]
pub fn time_to_minutes(time: &str) -> Result<u32, JsValue> {
    timeblock_engine::time::time_to_minutes(time).map_err(|e| JsValue::from_str(&e.to_string()))
}

#[wasm_bindgen(js_name = "minutesToTime")]
pub fn minutes_to_time(minutes: i32) -> String {
    timeblock_engine::time::minutes_to_time(i64::from(minutes))
}

#[wasm_bindgen(js_name = "roundToSlot")]
pub fn round_to_slot(time: &str, round_up: bool) -> Result<String, JsValue> {
    timeblock_engine::time::round_to_slot(time, round_up)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
