//! Tests for work-window construction over a requested week.

use chrono::{Datelike, NaiveDate, TimeZone, Utc, Weekday};
use chrono_tz::Tz;
use openslot_core::week::{week_windows, WorkWindow, WorkingHours};
use openslot_core::zones::REFERENCE_ZONE;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn five_weekday_windows_anchored_to_monday() {
    // 2026-08-06 is a Thursday; its week's Monday is 2026-08-03.
    let windows = week_windows(date(2026, 8, 6), 0, WorkingHours::default(), REFERENCE_ZONE);
    assert_eq!(windows.len(), 5);
    assert_eq!(windows[0].day, date(2026, 8, 3));
    assert_eq!(windows[4].day, date(2026, 8, 7));
    assert!(windows.iter().all(|w| w.day.weekday() != Weekday::Sat));
}

#[test]
fn next_week_offset_advances_one_monday() {
    let windows = week_windows(date(2026, 8, 6), 1, WorkingHours::default(), REFERENCE_ZONE);
    assert_eq!(windows[0].day, date(2026, 8, 10));
    assert_eq!(windows[4].day, date(2026, 8, 14));
}

#[test]
fn monday_anchors_to_itself() {
    let windows = week_windows(date(2026, 8, 10), 0, WorkingHours::default(), REFERENCE_ZONE);
    assert_eq!(windows[0].day, date(2026, 8, 10));
}

#[test]
fn summer_window_converts_to_utc_with_daylight_offset() {
    // Halifax in August is UTC-3: 11:00-17:00 local is 14:00-20:00Z.
    let w = WorkWindow::for_day(date(2026, 8, 10), WorkingHours::default(), REFERENCE_ZONE)
        .unwrap();
    assert_eq!(w.open.start, Utc.with_ymd_and_hms(2026, 8, 10, 14, 0, 0).unwrap());
    assert_eq!(w.open.end, Utc.with_ymd_and_hms(2026, 8, 10, 20, 0, 0).unwrap());
}

#[test]
fn winter_window_converts_with_standard_offset() {
    // Halifax in January is UTC-4.
    let w = WorkWindow::for_day(date(2026, 1, 5), WorkingHours::default(), REFERENCE_ZONE)
        .unwrap();
    assert_eq!(w.open.start, Utc.with_ymd_and_hms(2026, 1, 5, 15, 0, 0).unwrap());
    assert_eq!(w.open.end, Utc.with_ymd_and_hms(2026, 1, 5, 21, 0, 0).unwrap());
}

#[test]
fn custom_hours_are_respected() {
    let hours = WorkingHours {
        start_hour: 9,
        end_hour: 12,
    };
    let w = WorkWindow::for_day(date(2026, 8, 10), hours, Tz::UTC).unwrap();
    assert_eq!(w.open.duration_minutes(), 180);
    assert_eq!(w.open.start, Utc.with_ymd_and_hms(2026, 8, 10, 9, 0, 0).unwrap());
}

#[test]
fn inverted_hours_produce_no_window() {
    let hours = WorkingHours {
        start_hour: 17,
        end_hour: 11,
    };
    assert!(WorkWindow::for_day(date(2026, 8, 10), hours, Tz::UTC).is_none());
}

#[test]
fn out_of_range_hours_produce_no_window() {
    let hours = WorkingHours {
        start_hour: 11,
        end_hour: 24,
    };
    assert!(WorkWindow::for_day(date(2026, 8, 10), hours, Tz::UTC).is_none());
}
