//! Calendar event normalization.
//!
//! The calendar collaborator hands the core raw events in the provider shape:
//! an optional `summary` plus `start`/`end` fields that are either a
//! timezone-aware `dateTime` or an all-day `date`. Date-only boundaries
//! resolve to midnight in the reference zone. Events with no usable time are
//! skipped and reported as diagnostics rather than failing the whole query.

use chrono::{DateTime, FixedOffset, NaiveDate, TimeZone, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::grid::TimeInterval;

/// A raw event as delivered by the calendar data source. Unknown provider
/// fields are ignored on deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawEvent {
    pub summary: Option<String>,
    #[serde(default)]
    pub start: EventTime,
    #[serde(default)]
    pub end: EventTime,
}

/// Either a timezone-aware timestamp or an all-day date.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct EventTime {
    #[serde(rename = "dateTime")]
    pub date_time: Option<DateTime<FixedOffset>>,
    pub date: Option<NaiveDate>,
}

impl EventTime {
    /// Resolve to a UTC instant. All-day dates become midnight in `reference`.
    fn resolve(&self, reference: Tz) -> Option<DateTime<Utc>> {
        if let Some(dt) = self.date_time {
            return Some(dt.with_timezone(&Utc));
        }
        let midnight = self.date?.and_hms_opt(0, 0, 0)?;
        reference
            .from_local_datetime(&midnight)
            .earliest()
            .map(|dt| dt.with_timezone(&Utc))
    }
}

/// A busy event after normalization onto the scheduling timeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusyEvent {
    /// The event summary; empty when the provider sent none.
    pub label: String,
    pub interval: TimeInterval,
}

/// Diagnostic for an event that could not be placed on the timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedEvent {
    pub summary: Option<String>,
    pub reason: String,
}

/// Outcome of normalizing a day's raw events: the events that resolved, plus
/// diagnostics for those that did not.
#[derive(Debug, Clone, Default)]
pub struct NormalizedEvents {
    pub events: Vec<BusyEvent>,
    pub skipped: Vec<SkippedEvent>,
}

/// Normalize a day's raw events into busy intervals.
///
/// An event whose start or end carries neither a `dateTime` nor a `date`, or
/// that ends before it starts, is skipped with a warning; the rest of the
/// list still normalizes.
pub fn normalize_events(raw: &[RawEvent], reference: Tz) -> NormalizedEvents {
    let mut out = NormalizedEvents::default();
    for event in raw {
        let (Some(start), Some(end)) =
            (event.start.resolve(reference), event.end.resolve(reference))
        else {
            warn!(summary = ?event.summary, "skipping event without a usable start/end time");
            out.skipped.push(SkippedEvent {
                summary: event.summary.clone(),
                reason: "event has neither a dateTime nor a date boundary".to_string(),
            });
            continue;
        };
        if end < start {
            warn!(summary = ?event.summary, "skipping event that ends before it starts");
            out.skipped.push(SkippedEvent {
                summary: event.summary.clone(),
                reason: "event ends before it starts".to_string(),
            });
            continue;
        }
        out.events.push(BusyEvent {
            label: event.summary.clone().unwrap_or_default(),
            interval: TimeInterval::new(start, end),
        });
    }
    out
}
