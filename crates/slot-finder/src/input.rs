//! Parse and validate scheduling input from JSON.
//!
//! The slot finder assumes well-formed events and requests. This module is
//! where untrusted input gets checked before it is turned into those values.
//!
//! ```json
//! {
//!   "events": [
//!     {"title": "Standup", "start": "09:00", "end": "09:30", "attendees": ["A", "B"]}
//!   ],
//!   "request": {"attendees": ["A"], "optional_attendees": ["C"], "duration": 30}
//! }
//! ```
//!
//! Times are either minutes from midnight or `HH:MM` strings; `"24:00"` names
//! the end of the day.

use chrono::{NaiveTime, Timelike};
use serde::Deserialize;

use crate::error::{Result, SlotError};
use crate::event::Event;
use crate::request::MeetingRequest;
use crate::time_range::{TimeRange, END_OF_DAY};

/// A time of day as written in input: raw minutes or a clock string.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ClockTime {
    Minutes(u32),
    Clock(String),
}

impl ClockTime {
    /// Minutes from midnight, rejecting anything past the end of the day.
    pub fn to_minutes(&self) -> Result<u32> {
        let minute = match self {
            ClockTime::Minutes(m) => *m,
            ClockTime::Clock(s) => parse_clock(s)?,
        };
        if minute > END_OF_DAY {
            return Err(SlotError::OutOfDay { minute });
        }
        Ok(minute)
    }
}

/// Parse `HH:MM` into minutes from midnight.
pub fn parse_clock(s: &str) -> Result<u32> {
    let trimmed = s.trim();
    if trimmed == "24:00" {
        return Ok(END_OF_DAY);
    }
    let time = NaiveTime::parse_from_str(trimmed, "%H:%M")
        .map_err(|_| SlotError::InvalidClock(s.to_string()))?;
    Ok(TimeRange::minutes_of(time.hour(), time.minute()))
}

/// Check that `[start, end)` is a non-empty range inside the day.
pub fn validate_range(start: u32, end: u32) -> Result<TimeRange> {
    for minute in [start, end] {
        if minute > END_OF_DAY {
            return Err(SlotError::OutOfDay { minute });
        }
    }
    if start >= end {
        return Err(SlotError::InvalidRange { start, end });
    }
    Ok(TimeRange::from_start_end(start, end, false))
}

#[derive(Debug, Clone, Deserialize)]
pub struct EventInput {
    #[serde(default)]
    pub title: Option<String>,
    pub start: ClockTime,
    pub end: ClockTime,
    #[serde(default)]
    pub attendees: Vec<String>,
}

impl TryFrom<EventInput> for Event {
    type Error = SlotError;

    fn try_from(input: EventInput) -> Result<Self> {
        let when = validate_range(input.start.to_minutes()?, input.end.to_minutes()?)?;
        let event = Event::new(when, input.attendees);
        Ok(match input.title {
            Some(title) => event.with_title(title),
            None => event,
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RequestInput {
    #[serde(default, alias = "required_attendees")]
    pub attendees: Vec<String>,
    #[serde(default)]
    pub optional_attendees: Vec<String>,
    /// Minutes. Unsigned, so a negative duration fails to deserialize.
    pub duration: u32,
}

impl From<RequestInput> for MeetingRequest {
    fn from(input: RequestInput) -> Self {
        MeetingRequest::new(input.attendees, input.duration)
            .with_optional_attendees(input.optional_attendees)
    }
}

/// The full input document.
#[derive(Debug, Clone, Deserialize)]
pub struct SchedulingInput {
    #[serde(default)]
    pub events: Vec<EventInput>,
    pub request: RequestInput,
}

impl SchedulingInput {
    /// Validate every event and build the request.
    pub fn into_parts(self) -> Result<(Vec<Event>, MeetingRequest)> {
        let events = self
            .events
            .into_iter()
            .map(Event::try_from)
            .collect::<Result<Vec<_>>>()?;
        Ok((events, self.request.into()))
    }
}

/// Parse a JSON scheduling document into validated events and a request.
///
/// # Errors
/// Returns `SlotError::Json` for malformed JSON or a missing/negative
/// `duration`, `SlotError::InvalidClock` for unparseable times, and
/// `SlotError::InvalidRange` / `SlotError::OutOfDay` for impossible ranges.
pub fn parse_input(json: &str) -> Result<(Vec<Event>, MeetingRequest)> {
    let input: SchedulingInput = serde_json::from_str(json)?;
    input.into_parts()
}
