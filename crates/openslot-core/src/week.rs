//! Work windows: the bounded working hours per weekday of a requested week.

use chrono::{DateTime, Datelike, Duration, NaiveDate, TimeZone, Utc};
use chrono_tz::Tz;
use serde::Serialize;

use crate::grid::TimeInterval;

/// Daily working hours in the reference zone, as whole hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WorkingHours {
    pub start_hour: u32,
    pub end_hour: u32,
}

impl Default for WorkingHours {
    fn default() -> Self {
        Self {
            start_hour: 11,
            end_hour: 17,
        }
    }
}

/// One weekday's open window on the scheduling timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WorkWindow {
    pub day: NaiveDate,
    pub open: TimeInterval,
}

impl WorkWindow {
    /// Build the window for one day, converting reference-local hours to UTC.
    ///
    /// Returns `None` when a boundary does not exist in the reference zone
    /// (a DST gap swallowing the hour) or the hours are inverted or out of
    /// range.
    pub fn for_day(day: NaiveDate, hours: WorkingHours, reference: Tz) -> Option<WorkWindow> {
        let start = local_instant(day, hours.start_hour, reference)?;
        let end = local_instant(day, hours.end_hour, reference)?;
        if start >= end {
            return None;
        }
        Some(WorkWindow {
            day,
            open: TimeInterval::new(start, end),
        })
    }
}

fn local_instant(day: NaiveDate, hour: u32, reference: Tz) -> Option<DateTime<Utc>> {
    let naive = day.and_hms_opt(hour, 0, 0)?;
    reference
        .from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Monday-to-Friday windows for the week `week_offset` weeks from the week
/// containing `today` (0 = this week, 1 = next week).
pub fn week_windows(
    today: NaiveDate,
    week_offset: i64,
    hours: WorkingHours,
    reference: Tz,
) -> Vec<WorkWindow> {
    let monday = today - Duration::days(i64::from(today.weekday().num_days_from_monday()))
        + Duration::weeks(week_offset);
    (0..5)
        .filter_map(|d| WorkWindow::for_day(monday + Duration::days(d), hours, reference))
        .collect()
}
