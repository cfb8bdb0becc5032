//! WASM bindings for slot-finder.
//!
//! Exposes meeting slot search to JavaScript via `wasm-bindgen`. All complex
//! types are passed as JSON strings.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p slot-finder-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target nodejs --out-dir packages/slot-finder-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/slot_finder_wasm.wasm
//! ```

use std::collections::HashSet;

use serde::Deserialize;
use slot_finder::input::EventInput;
use slot_finder::{Event, SlotReport, SlotView};
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Plain-Rust implementations (testable off-wasm), errors as strings
// ---------------------------------------------------------------------------

fn serialize<T: serde::Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string(value).map_err(|e| format!("Serialization error: {}", e))
}

fn find_meeting_slots_impl(input_json: &str) -> Result<String, String> {
    let (events, request) = slot_finder::parse_input(input_json).map_err(|e| e.to_string())?;
    let result = slot_finder::query_detailed(&events, &request);
    serialize(&SlotReport::from(&result))
}

fn find_first_slot_impl(input_json: &str) -> Result<String, String> {
    let (events, request) = slot_finder::parse_input(input_json).map_err(|e| e.to_string())?;
    let first = slot_finder::find_first_slot(&events, &request);
    serialize(&first.as_ref().map(SlotView::from))
}

#[derive(Deserialize)]
struct FreeSlotsInput {
    events: Vec<EventInput>,
    attendees: Vec<String>,
    duration: u32,
}

fn free_slots_impl(input_json: &str) -> Result<String, String> {
    let input: FreeSlotsInput =
        serde_json::from_str(input_json).map_err(|e| format!("Invalid input JSON: {}", e))?;
    let events = input
        .events
        .into_iter()
        .map(Event::try_from)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| e.to_string())?;
    let people: HashSet<&str> = input.attendees.iter().map(String::as_str).collect();

    let slots = slot_finder::free_slots(&events, &people, input.duration);
    let views: Vec<SlotView> = slots.iter().map(SlotView::from).collect();
    serialize(&views)
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Find every slot for a meeting request.
///
/// `input_json` is a scheduling document (`{"events": [...], "request": {...}}`).
/// Returns a JSON string `{"honored": "everyone"|"required_only", "slots": [...]}`.
#[wasm_bindgen(js_name = "findMeetingSlots")]
pub fn find_meeting_slots(input_json: &str) -> Result<String, JsValue> {
    find_meeting_slots_impl(input_json).map_err(|e| JsValue::from_str(&e))
}

/// Find the earliest slot for a meeting request, or `null` if none fits.
#[wasm_bindgen(js_name = "findFirstSlot")]
pub fn find_first_slot(input_json: &str) -> Result<String, JsValue> {
    find_first_slot_impl(input_json).map_err(|e| JsValue::from_str(&e))
}

/// Free slots for a fixed set of people, without the optional-attendee policy.
///
/// `input_json` is `{"events": [...], "attendees": [...], "duration": N}`.
#[wasm_bindgen(js_name = "freeSlots")]
pub fn free_slots(input_json: &str) -> Result<String, JsValue> {
    free_slots_impl(input_json).map_err(|e| JsValue::from_str(&e))
}
