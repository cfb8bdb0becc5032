//! Serializable view of a query result for presentation layers.

use serde::Serialize;

use crate::query::{Honored, SlotQuery};
use crate::time_range::{format_clock, TimeRange};

/// One free slot, with both clock and minute forms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlotView {
    pub start: String,
    pub end: String,
    pub start_minute: u32,
    pub end_minute: u32,
    pub duration_minutes: u32,
    pub end_inclusive: bool,
}

impl From<&TimeRange> for SlotView {
    fn from(range: &TimeRange) -> Self {
        Self {
            start: format_clock(range.start()),
            end: format_clock(range.end()),
            start_minute: range.start(),
            end_minute: range.end(),
            duration_minutes: range.duration(),
            end_inclusive: range.is_end_inclusive(),
        }
    }
}

/// A query result ready to be written out as JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlotReport {
    pub honored: Honored,
    pub slots: Vec<SlotView>,
}

impl From<&SlotQuery> for SlotReport {
    fn from(result: &SlotQuery) -> Self {
        Self {
            honored: result.honored,
            slots: result.slots.iter().map(SlotView::from).collect(),
        }
    }
}
