use cadence_core::types::Frequency;
use chrono::{NaiveDate, NaiveDateTime};
use thiserror::Error;

/// Errors raised at the rule-editing boundary.
///
/// Missing input is never an error; it is reported as an incomplete assembly.
#[derive(Error, Debug)]
pub enum RuleError {
    #[error("Interval must be within 1..=30, got {0}")]
    IntervalOutOfRange(u8),

    #[error("Occurrence count must be within 1..=30, got {0}")]
    OccurrenceCountOutOfRange(u8),

    #[error("Week index must be within 1..=4, got {0}")]
    WeekIndexOutOfRange(u8),

    #[error("Invalid month number: {0}")]
    InvalidMonth(u8),

    #[error("Invalid weekday: {0}")]
    InvalidWeekday(String),

    #[error("Weekly recurrence needs at least one weekday")]
    EmptyWeekdays,

    #[error("Until date {until} is earlier than the anchor date {anchor}")]
    UntilBeforeAnchor { until: NaiveDate, anchor: NaiveDate },

    #[error("`{field}` does not apply to {frequency} recurrence")]
    NotApplicable {
        field: &'static str,
        frequency: Frequency,
    },

    #[error("`{field}` requires a frequency to be selected first")]
    NoFrequency { field: &'static str },

    #[error("Until boundary {exclusive_end} is not the day after {date}")]
    InconsistentUntil {
        date: NaiveDate,
        exclusive_end: NaiveDateTime,
    },

    #[error("Draft is closed")]
    DraftClosed,

    #[error(transparent)]
    CoreError(#[from] cadence_core::error::CoreError),
}

pub type RuleResult<T> = std::result::Result<T, RuleError>;
