//! Meeting requests: who must attend, who may attend, and for how long.

use std::collections::{BTreeSet, HashSet};

/// A request to find room for a new meeting.
///
/// `duration` is in minutes and may exceed a whole day; such a request is
/// valid and simply has no slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeetingRequest {
    required: BTreeSet<String>,
    optional: BTreeSet<String>,
    duration: u32,
}

impl MeetingRequest {
    pub fn new<I, S>(required: I, duration: u32) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            required: required.into_iter().map(Into::into).collect(),
            optional: BTreeSet::new(),
            duration,
        }
    }

    pub fn with_optional_attendees<I, S>(mut self, optional: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.optional.extend(optional.into_iter().map(Into::into));
        self
    }

    pub fn add_optional_attendee(&mut self, attendee: impl Into<String>) {
        self.optional.insert(attendee.into());
    }

    pub fn required_attendees(&self) -> &BTreeSet<String> {
        &self.required
    }

    pub fn optional_attendees(&self) -> &BTreeSet<String> {
        &self.optional
    }

    pub fn duration(&self) -> u32 {
        self.duration
    }

    /// Required attendees as a lookup set.
    pub fn required_set(&self) -> HashSet<&str> {
        self.required.iter().map(String::as_str).collect()
    }

    /// Required and optional attendees together.
    pub fn all_attendees(&self) -> HashSet<&str> {
        self.required
            .iter()
            .chain(&self.optional)
            .map(String::as_str)
            .collect()
    }
}
