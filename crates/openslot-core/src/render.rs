//! Render sampled slots into the human-readable proposal text.
//!
//! Pure string assembly: a greeting line whose wording branches on merged vs
//! single-person results, then one paragraph per slot with the day and the
//! start-end range converted to the display zone, joined by blank lines.

use chrono_tz::Tz;

use crate::quantize::CandidateSlot;

/// Wording inputs for the greeting line.
#[derive(Debug, Clone, Copy)]
pub struct Greeting<'a> {
    pub recipient: &'a str,
    /// Owner's name for single-person results; `None` reads as
    /// "my availability".
    pub owner: Option<&'a str>,
    pub merged: bool,
    pub week_offset: i64,
}

/// The greeting line, without the trailing blank separator.
pub fn greeting_line(greeting: &Greeting<'_>) -> String {
    let period = if greeting.week_offset == 0 {
        "this week"
    } else {
        "next week"
    };
    if greeting.merged {
        format!(
            "Hi {}, here is our availability for {}:",
            greeting.recipient, period
        )
    } else {
        match greeting.owner {
            Some(owner) => format!(
                "Hi {}, here is {}'s availability for {}:",
                greeting.recipient, owner, period
            ),
            None => format!(
                "Hi {}, here is my availability for {}:",
                greeting.recipient, period
            ),
        }
    }
}

/// One slot as a day line plus a time range in the display zone.
pub fn render_slot(slot: &CandidateSlot, display: Tz, zone_label: &str) -> String {
    let start = slot.start.with_timezone(&display);
    let end = slot.end.with_timezone(&display);
    format!(
        "{}:\n{} - {} {}",
        start.format("%A, %B %d, %Y"),
        start.format("%I:%M %p"),
        end.format("%I:%M %p"),
        zone_label,
    )
}

/// The full proposal block: greeting, then slot paragraphs separated by blank
/// lines. An empty slot list renders the greeting alone — no proposals is a
/// valid outcome, not an error.
pub fn render_proposals(
    slots: &[CandidateSlot],
    display: Tz,
    zone_label: &str,
    greeting: &Greeting<'_>,
) -> String {
    let header = greeting_line(greeting);
    if slots.is_empty() {
        return header;
    }
    let body: Vec<String> = slots
        .iter()
        .map(|s| render_slot(s, display, zone_label))
        .collect();
    format!("{}\n\n{}", header, body.join("\n\n"))
}
