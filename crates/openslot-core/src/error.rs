//! Error types for availability queries.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SlotError {
    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    #[error("Invalid meeting duration: {0} minutes (must be a positive multiple of 15)")]
    InvalidDuration(i64),

    #[error("Merged availability requires a second calendar's events for every day")]
    MissingSecondCalendar,
}

pub type Result<T> = std::result::Result<T, SlotError>;
