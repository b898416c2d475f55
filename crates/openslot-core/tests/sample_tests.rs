//! Tests for the presentation sampler.

use chrono::{DateTime, Duration, TimeZone, Utc};
use openslot_core::quantize::CandidateSlot;
use openslot_core::sample::{sample_slots, MAX_PROPOSALS};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn at(h: u32, m: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 8, 10, h, m, 0).unwrap()
}

/// `n` half-hour slots starting at 11:00, 15 minutes apart.
fn slots(n: usize) -> Vec<CandidateSlot> {
    (0..n)
        .map(|i| {
            let start = at(11, 0) + Duration::minutes(15 * i as i64);
            CandidateSlot {
                start,
                end: start + Duration::minutes(30),
            }
        })
        .collect()
}

#[test]
fn under_cap_returns_everything_in_order() {
    let mut rng = StdRng::seed_from_u64(1);
    let input = slots(3);
    let out = sample_slots(input.clone(), MAX_PROPOSALS, &mut rng);
    assert_eq!(out, input);
}

#[test]
fn exactly_at_cap_returns_everything() {
    let mut rng = StdRng::seed_from_u64(1);
    let input = slots(5);
    let out = sample_slots(input.clone(), 5, &mut rng);
    assert_eq!(out, input);
}

#[test]
fn over_cap_returns_exactly_cap_many() {
    // Twelve candidates, cap five: exactly five come back.
    let mut rng = StdRng::seed_from_u64(2);
    let out = sample_slots(slots(12), 5, &mut rng);
    assert_eq!(out.len(), 5);
}

#[test]
fn sampled_subset_is_chronological_and_unique() {
    let mut rng = StdRng::seed_from_u64(3);
    let input = slots(20);
    let out = sample_slots(input.clone(), 5, &mut rng);

    for pair in out.windows(2) {
        assert!(pair[0].start < pair[1].start, "must be strictly increasing");
    }
    for slot in &out {
        assert!(input.contains(slot), "sampled slot must come from the input");
    }
}

#[test]
fn fixed_seed_is_deterministic() {
    let a = sample_slots(slots(30), 5, &mut StdRng::seed_from_u64(42));
    let b = sample_slots(slots(30), 5, &mut StdRng::seed_from_u64(42));
    assert_eq!(a, b);
}

#[test]
fn empty_input_stays_empty() {
    let mut rng = StdRng::seed_from_u64(4);
    assert!(sample_slots(Vec::new(), 5, &mut rng).is_empty());
}

#[test]
fn zero_cap_returns_nothing() {
    let mut rng = StdRng::seed_from_u64(5);
    assert!(sample_slots(slots(4), 0, &mut rng).is_empty());
}
