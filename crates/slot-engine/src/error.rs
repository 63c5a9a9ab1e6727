//! Error types for slot-engine operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScheduleError {
    /// Text that is not an `H:M` / `HH:MM` time of day.
    #[error("Invalid time: {0:?}")]
    InvalidTime(String),

    /// Text that is not a `HH:MM-HH:MM` slot.
    #[error("Invalid time slot: {0:?}")]
    InvalidSlot(String),

    /// An interval whose end is not strictly after its start.
    #[error("Empty or reversed interval: {start}-{end}")]
    EmptyInterval { start: String, end: String },

    #[error("Invalid duration: {0} minutes")]
    InvalidDuration(u32),

    /// A weekly-availability key that is not a lowercase English weekday.
    #[error("Unknown day key: {0:?}")]
    UnknownDay(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ScheduleError>;
