//! Pairwise intersection of two people's free-interval sequences.
//!
//! Classic merge-join over two sorted, non-overlapping interval lists:
//! compare the intervals under each cursor, emit the non-degenerate overlap,
//! advance whichever interval ends first.

use crate::grid::TimeInterval;

/// Intersect two sorted, non-overlapping free-interval sequences.
///
/// The result is sorted, non-overlapping, and equals the set intersection of
/// the two inputs. Runs in `O(|a| + |b|)` and terminates as soon as either
/// side is exhausted.
pub fn intersect_intervals(a: &[TimeInterval], b: &[TimeInterval]) -> Vec<TimeInterval> {
    let mut common = Vec::new();
    let (mut i, mut j) = (0, 0);

    while i < a.len() && j < b.len() {
        let start = a[i].start.max(b[j].start);
        let end = a[i].end.min(b[j].end);
        if start < end {
            common.push(TimeInterval::new(start, end));
        }
        // Advance the side that ends first. On a tie either choice works:
        // both intervals are spent at the same instant.
        if a[i].end < b[j].end {
            i += 1;
        } else {
            j += 1;
        }
    }

    common
}
