//! Committed calendar events.

use std::collections::{BTreeSet, HashSet};

use crate::time_range::TimeRange;

/// An already-scheduled interval and the people committed to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    title: Option<String>,
    when: TimeRange,
    attendees: BTreeSet<String>,
}

impl Event {
    pub fn new<I, S>(when: TimeRange, attendees: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            title: None,
            when,
            attendees: attendees.into_iter().map(Into::into).collect(),
        }
    }

    /// Attach a display title. The slot finder never looks at it.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn when(&self) -> TimeRange {
        self.when
    }

    pub fn attendees(&self) -> &BTreeSet<String> {
        &self.attendees
    }

    /// Whether anyone in `people` is committed to this event.
    ///
    /// Walks the event's own (usually short) attendee list and stops at the
    /// first match.
    pub fn involves_any(&self, people: &HashSet<&str>) -> bool {
        self.attendees.iter().any(|a| people.contains(a.as_str()))
    }
}
