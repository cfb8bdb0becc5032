//! Intervals on a 24-hour clock, measured in minutes from midnight.
//!
//! Ranges are half-open: they contain `start` but not `end`. The one
//! exception is a range built with `inclusive_end = true`, which the sweep
//! produces for the gap that runs up to the day boundary. The flag is carried
//! explicitly instead of being inferred from `end == END_OF_DAY`.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// First minute of the day.
pub const START_OF_DAY: u32 = 0;

/// Minutes in a day. A range may end here but never start past it.
pub const END_OF_DAY: u32 = 24 * 60;

/// An interval of minutes within a single day.
///
/// Equality, hashing and ordering only look at `(start, end)`; two ranges that
/// differ only in `inclusive_end` compare equal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TimeRange {
    start: u32,
    end: u32,
    #[serde(default)]
    inclusive_end: bool,
}

impl TimeRange {
    /// The whole day, `[0, 1440)`.
    pub const WHOLE_DAY: TimeRange = TimeRange {
        start: START_OF_DAY,
        end: END_OF_DAY,
        inclusive_end: false,
    };

    /// Build a range from its bounds.
    ///
    /// No validation happens here; callers that accept untrusted input go
    /// through [`crate::input`] first.
    pub const fn from_start_end(start: u32, end: u32, inclusive_end: bool) -> Self {
        Self {
            start,
            end,
            inclusive_end,
        }
    }

    /// Build a half-open range of `duration` minutes starting at `start`.
    pub const fn from_start_duration(start: u32, duration: u32) -> Self {
        Self {
            start,
            end: start.saturating_add(duration),
            inclusive_end: false,
        }
    }

    /// Minutes from midnight for a wall-clock time, e.g. `minutes_of(9, 30) == 570`.
    pub const fn minutes_of(hours: u32, minutes: u32) -> u32 {
        hours * 60 + minutes
    }

    pub const fn start(&self) -> u32 {
        self.start
    }

    pub const fn end(&self) -> u32 {
        self.end
    }

    /// Whether the range closes on (and includes) its `end` minute.
    pub const fn is_end_inclusive(&self) -> bool {
        self.inclusive_end
    }

    /// Length in minutes.
    pub const fn duration(&self) -> u32 {
        self.end.saturating_sub(self.start)
    }

    /// Whether `minute` falls inside the range.
    pub const fn contains(&self, minute: u32) -> bool {
        self.start <= minute && (minute < self.end || (self.inclusive_end && minute == self.end))
    }

    /// Whether `other` lies entirely within this range.
    pub const fn contains_range(&self, other: &TimeRange) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Whether the two ranges share at least one minute.
    ///
    /// Ranges that only touch (`a.end == b.start`) do not overlap.
    pub const fn overlaps(&self, other: &TimeRange) -> bool {
        self.start < other.end && other.start < self.end
    }
}

impl PartialEq for TimeRange {
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start && self.end == other.end
    }
}

impl Eq for TimeRange {}

impl Hash for TimeRange {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.start.hash(state);
        self.end.hash(state);
    }
}

impl Ord for TimeRange {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.start, self.end).cmp(&(other.start, other.end))
    }
}

impl PartialOrd for TimeRange {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Format a minute offset as `HH:MM`. The day boundary renders as `24:00`.
pub fn format_clock(minute: u32) -> String {
    format!("{:02}:{:02}", minute / 60, minute % 60)
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", format_clock(self.start), format_clock(self.end))
    }
}
