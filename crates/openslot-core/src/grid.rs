//! Interval primitives and 15-minute grid alignment.
//!
//! All interval math runs on UTC instants; the scheduling (reference) timezone
//! only enters when work windows are built and when events are normalized.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Grid step for slot alignment, in minutes.
pub const GRID_MINUTES: i64 = 15;

const GRID_SECONDS: i64 = GRID_MINUTES * 60;

/// A half-open span of time `[start, end)` on the scheduling timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TimeInterval {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeInterval {
    /// `start` must not be after `end`.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        debug_assert!(start <= end, "interval start must not be after end");
        Self { start, end }
    }

    /// Zero-length intervals are degenerate; they are never emitted as free
    /// intervals or candidate slots.
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }

    /// Two half-open intervals overlap iff each starts before the other ends.
    /// Adjacent intervals do not overlap.
    pub fn overlaps(&self, other: &TimeInterval) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// Round `dt` down to the previous 15-minute boundary, zeroing seconds and
/// sub-second precision. A timestamp already on the grid is unchanged.
pub fn prev_grid_boundary(dt: DateTime<Utc>) -> DateTime<Utc> {
    let rem = dt.timestamp().rem_euclid(GRID_SECONDS);
    dt - Duration::seconds(rem) - Duration::nanoseconds(i64::from(dt.timestamp_subsec_nanos()))
}

/// Round `dt` up to the next 15-minute boundary.
///
/// A timestamp already on the grid (minute a multiple of 15, no seconds or
/// sub-seconds) is unchanged; otherwise the result advances to the next
/// multiple of 15 minutes, carrying into the hour where needed (10:50 rounds
/// to 11:00).
pub fn next_grid_boundary(dt: DateTime<Utc>) -> DateTime<Utc> {
    let down = prev_grid_boundary(dt);
    if down == dt {
        dt
    } else {
        down + Duration::seconds(GRID_SECONDS)
    }
}
