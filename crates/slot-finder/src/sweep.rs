//! Sweep busy intervals to find the free gaps between them.
//!
//! Every busy interval contributes a START point and an END point. Points are
//! sorted by time and walked once while counting how many intervals are open.
//! A gap exists wherever the count is zero; it is reported when the next
//! START arrives (or at the end bound) if it is at least `min_length` long.
//!
//! At equal times a START sorts before an END. When one meeting ends exactly
//! as another begins, the count never drops to zero at that instant, so
//! back-to-back meetings leave no gap between them, not even a zero-width one.

use crate::time_range::TimeRange;

/// Which side of a busy interval a point marks.
///
/// Declaration order is the tie-break: `Start < End`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PointKind {
    Start,
    End,
}

/// A START or END marker on the timeline.
///
/// The derived ordering compares `time` first, then `kind`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SweepPoint {
    pub time: u32,
    pub kind: PointKind,
}

impl SweepPoint {
    pub const fn start(time: u32) -> Self {
        Self {
            time,
            kind: PointKind::Start,
        }
    }

    pub const fn end(time: u32) -> Self {
        Self {
            time,
            kind: PointKind::End,
        }
    }

    /// The START and END points of a busy range.
    pub const fn bounds(range: TimeRange) -> [SweepPoint; 2] {
        [Self::start(range.start()), Self::end(range.end())]
    }
}

/// Signed distance so a point lying before `from` never reads as a long gap.
fn gap(from: u32, to: u32) -> i64 {
    i64::from(to) - i64::from(from)
}

/// Return the gaps in `[first_point, last_point]` not covered by any interval
/// described by `points`, keeping only those at least `min_length` long.
///
/// `points` may arrive in any order. The result is sorted by start. The
/// trailing gap, if any, is the only range ending at `last_point` and is
/// marked end-inclusive.
///
/// # Examples
///
/// ```
/// use slot_finder::{sweep, SweepPoint, TimeRange};
///
/// let points = vec![
///     SweepPoint::start(30),
///     SweepPoint::end(60),
///     SweepPoint::start(60),
///     SweepPoint::end(90),
/// ];
/// let gaps = sweep(points, 0, 120, 10);
/// assert_eq!(
///     gaps,
///     vec![
///         TimeRange::from_start_end(0, 30, false),
///         TimeRange::from_start_end(90, 120, true),
///     ]
/// );
/// ```
pub fn sweep(
    mut points: Vec<SweepPoint>,
    first_point: u32,
    last_point: u32,
    min_length: u32,
) -> Vec<TimeRange> {
    points.sort_unstable();

    let min_length = i64::from(min_length);
    let mut open: usize = 0;
    let mut last_time = first_point;
    let mut gaps = Vec::new();

    for point in &points {
        match point.kind {
            PointKind::Start => {
                if open == 0 && gap(last_time, point.time) >= min_length {
                    gaps.push(TimeRange::from_start_end(last_time, point.time, false));
                }
                open += 1;
            }
            PointKind::End => {
                // Only an END without a matching START can hit zero here.
                open = open.saturating_sub(1);
            }
        }
        last_time = point.time;
    }

    if gap(last_time, last_point) >= min_length {
        gaps.push(TimeRange::from_start_end(last_time, last_point, true));
    }

    gaps
}
