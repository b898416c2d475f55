//! Bound the presented result set by sampling from the full candidate list.
//!
//! Sampling is uniform without replacement over the whole week's candidates,
//! so proposals are not biased toward early-week slots; the chosen subset is
//! restored to chronological order. The caller supplies the random source,
//! which keeps selection reproducible under a seeded rng.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::quantize::CandidateSlot;

/// Maximum number of slots presented per query.
pub const MAX_PROPOSALS: usize = 5;

/// Reduce `candidates` to at most `cap` slots, chosen uniformly without
/// replacement, returned in chronological order. When the candidate count is
/// within the cap, all candidates are returned.
pub fn sample_slots<R: Rng + ?Sized>(
    candidates: Vec<CandidateSlot>,
    cap: usize,
    rng: &mut R,
) -> Vec<CandidateSlot> {
    let mut picked = if candidates.len() > cap {
        candidates.choose_multiple(rng, cap).copied().collect()
    } else {
        candidates
    };
    picked.sort();
    picked
}
