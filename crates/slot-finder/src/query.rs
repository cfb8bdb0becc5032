//! Meeting slot queries.
//!
//! [`free_slots`] filters events down to the ones that involve a given set of
//! people and sweeps them over the whole day. [`query`] layers the
//! optional-attendee policy on top: try with everyone, and if that leaves no
//! slot at all, try again with the required attendees only.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::event::Event;
use crate::request::MeetingRequest;
use crate::sweep::{sweep, SweepPoint};
use crate::time_range::{TimeRange, END_OF_DAY, START_OF_DAY};

/// Which attendees the returned slots accommodate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Honored {
    /// Required and optional attendees are all free.
    Everyone,
    /// Optional attendees were dropped because no slot fit them.
    RequiredOnly,
}

/// Slots found for a request, plus which attendee set they honor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotQuery {
    pub slots: Vec<TimeRange>,
    pub honored: Honored,
}

/// Free ranges of at least `duration` minutes during which nobody in
/// `attendees` has an event.
///
/// Events that share no attendee with `attendees` are ignored.
pub fn free_slots(events: &[Event], attendees: &HashSet<&str>, duration: u32) -> Vec<TimeRange> {
    let points: Vec<SweepPoint> = events
        .iter()
        .filter(|event| event.involves_any(attendees))
        .flat_map(|event| SweepPoint::bounds(event.when()))
        .collect();

    trace!(
        total = events.len(),
        relevant = points.len() / 2,
        duration,
        "sweeping events"
    );

    sweep(points, START_OF_DAY, END_OF_DAY, duration)
}

/// Find slots for `request`, reporting whether optional attendees were kept.
///
/// Optional attendees are all-or-nothing: either every slot suits all of
/// them, or they are all ignored.
pub fn query_detailed(events: &[Event], request: &MeetingRequest) -> SlotQuery {
    let everyone = request.all_attendees();
    let slots = free_slots(events, &everyone, request.duration());

    if !slots.is_empty() || request.optional_attendees().is_empty() {
        return SlotQuery {
            slots,
            honored: Honored::Everyone,
        };
    }

    debug!(
        optional = request.optional_attendees().len(),
        "no slot fits optional attendees, retrying with required only"
    );

    SlotQuery {
        slots: free_slots(events, &request.required_set(), request.duration()),
        honored: Honored::RequiredOnly,
    }
}

/// Every time-of-day range in which the requested meeting fits, ascending by
/// start.
pub fn query(events: &[Event], request: &MeetingRequest) -> Vec<TimeRange> {
    query_detailed(events, request).slots
}

/// The earliest slot for `request`, if any.
pub fn find_first_slot(events: &[Event], request: &MeetingRequest) -> Option<TimeRange> {
    query(events, request).into_iter().next()
}
