//! Week-level availability queries.
//!
//! Composes the per-day primitives — normalize, extract, intersect, quantize —
//! then samples once over the aggregated week and renders the proposal text.
//! A query is a pure function of its inputs plus the injected random source;
//! nothing here holds state across invocations.

use chrono_tz::Tz;
use rand::Rng;
use serde::Serialize;

use crate::error::{Result, SlotError};
use crate::event::{normalize_events, RawEvent, SkippedEvent};
use crate::extract::free_intervals;
use crate::grid::GRID_MINUTES;
use crate::intersect::intersect_intervals;
use crate::quantize::{candidate_slots, CandidateSlot};
use crate::render::{render_proposals, Greeting};
use crate::sample::{sample_slots, MAX_PROPOSALS};
use crate::week::WorkWindow;
use crate::zones::{ZoneResolver, REFERENCE_ZONE};

/// Parameters of one availability query. Immutable per invocation.
#[derive(Debug, Clone)]
pub struct AvailabilityQuery {
    /// 0 = this week, 1 = next week.
    pub week_offset: i64,
    /// Meeting length; must be a positive multiple of 15.
    pub duration_minutes: i64,
    /// Display-zone name, resolved through a [`ZoneResolver`] when rendering.
    pub display_zone: String,
    /// Intersect two people's open slots instead of using one calendar.
    pub merge: bool,
    /// Presentation cap on the number of proposed slots.
    pub max_proposals: usize,
    /// The scheduling zone that windows and all-day events are anchored to.
    pub reference_zone: Tz,
}

impl Default for AvailabilityQuery {
    fn default() -> Self {
        Self {
            week_offset: 0,
            duration_minutes: 30,
            display_zone: "Atlantic Standard Time".to_string(),
            merge: false,
            max_proposals: MAX_PROPOSALS,
            reference_zone: REFERENCE_ZONE,
        }
    }
}

impl AvailabilityQuery {
    fn validate(&self) -> Result<()> {
        if self.duration_minutes <= 0 || self.duration_minutes % GRID_MINUTES != 0 {
            return Err(SlotError::InvalidDuration(self.duration_minutes));
        }
        Ok(())
    }
}

/// One day's inputs from the calendar collaborator: the working window plus
/// the raw event lists for each person.
#[derive(Debug, Clone)]
pub struct DaySchedule {
    pub window: WorkWindow,
    pub primary: Vec<RawEvent>,
    /// Second person's events; required on every day of a merged query.
    pub secondary: Option<Vec<RawEvent>>,
}

/// Sampled slots in chronological order, plus diagnostics for events that
/// could not be placed on the timeline. An empty `slots` list is a valid
/// result, not an error.
#[derive(Debug, Clone, Serialize)]
pub struct AvailabilityResult {
    pub slots: Vec<CandidateSlot>,
    pub skipped: Vec<SkippedEvent>,
}

/// A rendered proposal together with the raw result it presents.
#[derive(Debug, Clone)]
pub struct Proposal {
    pub text: String,
    pub result: AvailabilityResult,
}

/// Compute the week's availability.
///
/// For each day: normalize the raw events, extract open slots within the
/// window (intersecting both people's slots on merged queries), and expand
/// every open interval into duration-aligned candidates. Sampling runs once
/// over the aggregated week, so the cap cannot bias toward any single day.
///
/// # Errors
/// Returns `InvalidDuration` when the meeting length is not a positive
/// multiple of 15, and `MissingSecondCalendar` when `merge` is set but a day
/// lacks the second person's events — surfaced before any computation starts.
pub fn compute_availability<R: Rng + ?Sized>(
    query: &AvailabilityQuery,
    days: &[DaySchedule],
    rng: &mut R,
) -> Result<AvailabilityResult> {
    query.validate()?;
    if query.merge && days.iter().any(|d| d.secondary.is_none()) {
        return Err(SlotError::MissingSecondCalendar);
    }

    let mut skipped = Vec::new();
    let mut candidates = Vec::new();

    for day in days {
        let normalized = normalize_events(&day.primary, query.reference_zone);
        skipped.extend(normalized.skipped);
        let mut free = free_intervals(&normalized.events, &day.window);

        if query.merge {
            if let Some(raw) = &day.secondary {
                let other = normalize_events(raw, query.reference_zone);
                skipped.extend(other.skipped);
                let other_free = free_intervals(&other.events, &day.window);
                free = intersect_intervals(&free, &other_free);
            }
        }

        for interval in &free {
            candidates.extend(candidate_slots(interval, query.duration_minutes));
        }
    }

    let slots = sample_slots(candidates, query.max_proposals, rng);
    Ok(AvailabilityResult { slots, skipped })
}

/// Compute availability and render it as the proposal text block.
///
/// # Errors
/// Everything [`compute_availability`] returns, plus `InvalidTimezone` when
/// the query's display zone is unknown to `zones`.
pub fn propose<R: Rng + ?Sized>(
    query: &AvailabilityQuery,
    days: &[DaySchedule],
    recipient: &str,
    owner: Option<&str>,
    zones: &dyn ZoneResolver,
    rng: &mut R,
) -> Result<Proposal> {
    let display = zones
        .resolve(&query.display_zone)
        .ok_or_else(|| SlotError::InvalidTimezone(query.display_zone.clone()))?;
    let result = compute_availability(query, days, rng)?;
    let greeting = Greeting {
        recipient,
        owner,
        merged: query.merge,
        week_offset: query.week_offset,
    };
    let text = render_proposals(&result.slots, display, &query.display_zone, &greeting);
    Ok(Proposal { text, result })
}
