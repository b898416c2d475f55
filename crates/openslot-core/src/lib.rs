//! # openslot-core
//!
//! Free-time availability windows from calendar event data, for one or two
//! people, aligned to a 15-minute grid and rendered as a proposal list.
//!
//! The pipeline, leaf to root: a day's busy events are normalized and swept
//! into the free intervals left inside a working window ([`extract`]); for a
//! two-person query both people's free intervals are intersected with a
//! merge-join ([`intersect`]); every free interval expands into fixed-duration,
//! grid-aligned candidate slots ([`quantize`]); the week's candidates are
//! sampled down to a presentation cap and re-sorted ([`sample`]); the survivors
//! render as timezone-converted text ([`render`]).
//!
//! Event fetching and credential handling live with the caller. The core
//! consumes per-day event lists plus a handful of parameters and is a pure
//! function of them and the injected random source.
//!
//! ## Modules
//!
//! - [`grid`] — `TimeInterval` and 15-minute boundary rounding
//! - [`event`] — collaborator event shape, normalization, skip diagnostics
//! - [`extract`] — busy events → free intervals within a work window
//! - [`intersect`] — merge-join intersection of two free-interval lists
//! - [`quantize`] — free interval → duration-aligned candidate slots
//! - [`sample`] — cap the candidate set by uniform sampling, restore order
//! - [`render`] — greeting + per-slot paragraphs in the display zone
//! - [`week`] — Monday-anchored work windows for a requested week
//! - [`zones`] — display-name → timezone lookup
//! - [`availability`] — query orchestration over all of the above
//! - [`error`] — error types

pub mod availability;
pub mod error;
pub mod event;
pub mod extract;
pub mod grid;
pub mod intersect;
pub mod quantize;
pub mod render;
pub mod sample;
pub mod week;
pub mod zones;

pub use availability::{
    compute_availability, propose, AvailabilityQuery, AvailabilityResult, DaySchedule, Proposal,
};
pub use error::SlotError;
pub use event::{normalize_events, BusyEvent, EventTime, NormalizedEvents, RawEvent, SkippedEvent};
pub use extract::{free_intervals, IGNORED_LABELS};
pub use grid::{next_grid_boundary, prev_grid_boundary, TimeInterval, GRID_MINUTES};
pub use intersect::intersect_intervals;
pub use quantize::{candidate_slots, CandidateSlot};
pub use render::{greeting_line, render_proposals, render_slot, Greeting};
pub use sample::{sample_slots, MAX_PROPOSALS};
pub use week::{week_windows, WorkWindow, WorkingHours};
pub use zones::{NamedZones, ZoneResolver, REFERENCE_ZONE};
