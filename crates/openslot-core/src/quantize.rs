//! Expand free intervals into fixed-duration candidate meeting slots.
//!
//! Slot starts snap up to the 15-minute grid and then slide in 15-minute
//! steps. The loop bounds against the true interval end rather than a
//! grid-rounded end: a slot may use the full remaining width of the interval
//! as long as it starts on a boundary, which keeps the proposal set dense.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::grid::{next_grid_boundary, TimeInterval, GRID_MINUTES};

/// A proposed meeting slot: grid-aligned start, exactly the requested
/// duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CandidateSlot {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl CandidateSlot {
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }
}

/// Generate every candidate slot of `duration_minutes` that fits in
/// `interval`.
///
/// Emitted slots lie entirely within the interval and are chronologically
/// ordered. Consecutive slots overlap (a sliding 15-minute window) so a long
/// free interval yields every viable start time.
pub fn candidate_slots(interval: &TimeInterval, duration_minutes: i64) -> Vec<CandidateSlot> {
    let duration = Duration::minutes(duration_minutes);
    let step = Duration::minutes(GRID_MINUTES);

    let mut slots = Vec::new();
    let mut t = next_grid_boundary(interval.start);
    while t + duration <= interval.end {
        slots.push(CandidateSlot {
            start: t,
            end: t + duration,
        });
        t += step;
    }
    slots
}
