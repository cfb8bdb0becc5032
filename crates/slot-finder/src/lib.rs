//! # slot-finder
//!
//! Find every time-of-day interval in which a meeting fits around the
//! attendees' existing commitments.
//!
//! The engine is a pure function over three value types: a list of [`Event`]s
//! (interval + attendees) and a [`MeetingRequest`] (required attendees,
//! optional attendees, duration) go in, an ascending list of free
//! [`TimeRange`]s comes out. Optional attendees are honored only when doing so
//! leaves at least one slot; otherwise they are dropped as a group.
//!
//! ## Quick start
//!
//! ```rust
//! use slot_finder::{query, Event, MeetingRequest, TimeRange};
//!
//! let events = vec![
//!     Event::new(TimeRange::from_start_end(0, 600, false), ["alice"]),
//!     Event::new(TimeRange::from_start_end(600, 900, false), ["alice"]),
//! ];
//! let request = MeetingRequest::new(["alice"], 60);
//!
//! let slots = query(&events, &request);
//! assert_eq!(slots, vec![TimeRange::from_start_end(900, 1440, true)]);
//! ```
//!
//! ## Modules
//!
//! - [`time_range`] — `TimeRange` and the day-boundary constants
//! - [`event`] — committed events with their attendees
//! - [`request`] — meeting requests (required/optional attendees, duration)
//! - [`sweep`] — the interval sweep that turns busy points into free gaps
//! - [`query`] — attendee filtering and the optional-attendee fallback
//! - [`input`] — JSON input parsing and validation for collaborators
//! - [`report`] — serializable view of a query result
//! - [`error`] — Error types for input validation

pub mod error;
pub mod event;
pub mod input;
pub mod query;
pub mod report;
pub mod request;
pub mod sweep;
pub mod time_range;

pub use error::SlotError;
pub use event::Event;
pub use input::parse_input;
pub use query::{find_first_slot, free_slots, query, query_detailed, Honored, SlotQuery};
pub use report::{SlotReport, SlotView};
pub use request::MeetingRequest;
pub use sweep::{sweep, PointKind, SweepPoint};
pub use time_range::{TimeRange, END_OF_DAY, START_OF_DAY};
