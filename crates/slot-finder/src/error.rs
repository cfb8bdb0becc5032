//! Error types for validating scheduling input.
//!
//! Slot finding itself never fails. These errors belong to the layer that
//! turns untrusted input into [`Event`](crate::Event) and
//! [`MeetingRequest`](crate::MeetingRequest) values.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SlotError {
    /// The range does not start strictly before it ends.
    #[error("Invalid time range: start {start} must be before end {end}")]
    InvalidRange { start: u32, end: u32 },

    /// A minute value past the end of the day.
    #[error("Minute {minute} is outside the day (0..=1440)")]
    OutOfDay { minute: u32 },

    /// A clock string that is not `HH:MM`.
    #[error("Invalid clock time '{0}': expected HH:MM")]
    InvalidClock(String),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias used throughout slot-finder.
pub type Result<T> = std::result::Result<T, SlotError>;
