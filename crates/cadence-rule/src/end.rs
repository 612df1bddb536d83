//! Termination of a recurring series.
//!
//! ## Summary
//! The user picks one of "never", "after N occurrences" or "until a date". Until-dates
//! are inclusive of the whole selected day; the resolver emits them as an exclusive
//! boundary at the start of the following day, for every frequency.

use std::fmt;

use cadence_core::constants::{OCCURRENCE_COUNT_MAX, OCCURRENCE_COUNT_MIN};
use chrono::{Days, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::{RuleError, RuleResult};

/// "After N occurrences", 1..=30.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct OccurrenceCount(u8);

impl OccurrenceCount {
    /// ## Summary
    /// Creates an occurrence count.
    ///
    /// ## Errors
    /// Returns `RuleError::OccurrenceCountOutOfRange` outside `1..=30`.
    pub fn new(value: u8) -> RuleResult<Self> {
        if (OCCURRENCE_COUNT_MIN..=OCCURRENCE_COUNT_MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(RuleError::OccurrenceCountOutOfRange(value))
        }
    }

    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for OccurrenceCount {
    type Error = RuleError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<OccurrenceCount> for u8 {
    fn from(value: OccurrenceCount) -> Self {
        value.0
    }
}

impl fmt::Display for OccurrenceCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The end-condition selection as made by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EndChoice {
    Never,
    AfterOccurrences(OccurrenceCount),
    /// Last day (inclusive) on which an occurrence may fall.
    UntilDate(NaiveDate),
}

/// An until-date with whole-day inclusive semantics.
///
/// Carries both the selected day and the normalized exclusive instant, so a consumer
/// comparing at date-time resolution never has to re-derive the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "UntilRecord")]
pub struct UntilBoundary {
    date: NaiveDate,
    exclusive_end: NaiveDateTime,
}

#[derive(Deserialize)]
struct UntilRecord {
    date: NaiveDate,
    exclusive_end: NaiveDateTime,
}

impl TryFrom<UntilRecord> for UntilBoundary {
    type Error = RuleError;

    fn try_from(record: UntilRecord) -> Result<Self, Self::Error> {
        let boundary = Self::from_inclusive_date(record.date);
        if boundary.exclusive_end == record.exclusive_end {
            Ok(boundary)
        } else {
            Err(RuleError::InconsistentUntil {
                date: record.date,
                exclusive_end: record.exclusive_end,
            })
        }
    }
}

impl UntilBoundary {
    /// ## Summary
    /// Normalizes a selected last day to the start of the following day.
    #[must_use]
    pub fn from_inclusive_date(date: NaiveDate) -> Self {
        let exclusive_end = date
            .checked_add_days(Days::new(1))
            .map_or(NaiveDateTime::MAX, |next| next.and_time(NaiveTime::MIN));
        Self {
            date,
            exclusive_end,
        }
    }

    /// The selected, inclusive last day.
    #[must_use]
    pub const fn inclusive_date(self) -> NaiveDate {
        self.date
    }

    /// Start of the day after the selected date. Occurrences must fall strictly before it.
    #[must_use]
    pub const fn exclusive_end(self) -> NaiveDateTime {
        self.exclusive_end
    }

    /// Whether an occurrence at `instant` falls on or before the selected day.
    #[must_use]
    pub fn admits(self, instant: NaiveDateTime) -> bool {
        instant < self.exclusive_end
    }
}

/// How an emitted rule terminates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EndCondition {
    Never,
    AfterOccurrences(OccurrenceCount),
    Until(UntilBoundary),
}

impl From<EndChoice> for EndCondition {
    fn from(choice: EndChoice) -> Self {
        match choice {
            EndChoice::Never => Self::Never,
            EndChoice::AfterOccurrences(count) => Self::AfterOccurrences(count),
            EndChoice::UntilDate(date) => Self::Until(UntilBoundary::from_inclusive_date(date)),
        }
    }
}

/// Holds the active end choice, if one has been made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EndConditionResolver {
    choice: Option<EndChoice>,
}

impl EndConditionResolver {
    /// ## Summary
    /// Makes `choice` the active end condition.
    ///
    /// ## Errors
    /// Returns `RuleError::UntilBeforeAnchor` if an until-date precedes `anchor`;
    /// the previous choice is kept.
    pub fn select(&mut self, choice: EndChoice, anchor: NaiveDate) -> RuleResult<()> {
        if let EndChoice::UntilDate(until) = choice {
            if until < anchor {
                return Err(RuleError::UntilBeforeAnchor { until, anchor });
            }
        }
        self.choice = Some(choice);
        Ok(())
    }

    pub fn clear(&mut self) {
        self.choice = None;
    }

    #[must_use]
    pub const fn choice(&self) -> Option<EndChoice> {
        self.choice
    }

    #[must_use]
    pub const fn is_chosen(&self) -> bool {
        self.choice.is_some()
    }

    /// Returns `None` until a choice has been made.
    #[must_use]
    pub fn resolve(&self) -> Option<EndCondition> {
        self.choice.map(EndCondition::from)
    }
}
