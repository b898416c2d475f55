//! Open-slot extraction: a day's busy events → the free intervals left inside
//! the working window.
//!
//! Events on the ignore list do not block time. Busy events are clipped to the
//! window, swept in start order with a cursor, and the gaps are emitted as
//! free intervals. The union of the free intervals and the clipped,
//! non-ignored busy time reconstructs the window exactly.

use crate::event::BusyEvent;
use crate::grid::TimeInterval;
use crate::week::WorkWindow;

/// Event labels that never count as busy time.
pub const IGNORED_LABELS: &[&str] = &["Office", "Home"];

fn is_ignored(event: &BusyEvent) -> bool {
    IGNORED_LABELS.contains(&event.label.as_str())
}

/// Compute the free intervals within `window` left open by `events`.
///
/// Returned intervals are sorted, pairwise non-overlapping, and
/// non-degenerate. Fully overlapped or out-of-window events cannot drag the
/// sweep cursor backwards: the cursor only advances, to the furthest busy end
/// seen so far.
pub fn free_intervals(events: &[BusyEvent], window: &WorkWindow) -> Vec<TimeInterval> {
    let open = window.open;

    // Drop ignored labels and events entirely outside the window; clip the
    // rest to the window bounds.
    let mut busy: Vec<TimeInterval> = events
        .iter()
        .filter(|e| !is_ignored(e))
        .filter(|e| e.interval.start < open.end && e.interval.end > open.start)
        .map(|e| {
            TimeInterval::new(
                e.interval.start.max(open.start),
                e.interval.end.min(open.end),
            )
        })
        .collect();

    // Stable sort: events sharing a start keep their original list order, so
    // output is reproducible for tied inputs.
    busy.sort_by_key(|b| b.start);

    let mut free = Vec::new();
    let mut cursor = open.start;
    for b in &busy {
        if b.start > cursor {
            free.push(TimeInterval::new(cursor, b.start));
        }
        cursor = cursor.max(b.end);
    }
    if cursor < open.end {
        free.push(TimeInterval::new(cursor, open.end));
    }
    free
}
