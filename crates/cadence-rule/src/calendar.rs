//! Calendar arithmetic over anchor dates.
//!
//! ## Summary
//! Total functions deriving the weekday, week-of-month position, day and month of a
//! calendar date. Every recurrence pattern the editor offers is computed from these.

use std::fmt;
use std::str::FromStr;

use cadence_core::constants::{WEEK_INDEX_MAX, WEEK_INDEX_MIN};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{RuleError, RuleResult};

/// Day of the week, ordered Monday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub const ALL: [Self; 7] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];

    /// Zero-based position, Monday = 0.
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Returns the RFC 5545 two-letter code (`MO`, `TU`, ...).
    #[must_use]
    pub const fn rfc_code(self) -> &'static str {
        match self {
            Self::Monday => "MO",
            Self::Tuesday => "TU",
            Self::Wednesday => "WE",
            Self::Thursday => "TH",
            Self::Friday => "FR",
            Self::Saturday => "SA",
            Self::Sunday => "SU",
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
            Self::Sunday => "Sunday",
        }
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(value: chrono::Weekday) -> Self {
        match value {
            chrono::Weekday::Mon => Self::Monday,
            chrono::Weekday::Tue => Self::Tuesday,
            chrono::Weekday::Wed => Self::Wednesday,
            chrono::Weekday::Thu => Self::Thursday,
            chrono::Weekday::Fri => Self::Friday,
            chrono::Weekday::Sat => Self::Saturday,
            chrono::Weekday::Sun => Self::Sunday,
        }
    }
}

impl From<Weekday> for chrono::Weekday {
    fn from(value: Weekday) -> Self {
        match value {
            Weekday::Monday => Self::Mon,
            Weekday::Tuesday => Self::Tue,
            Weekday::Wednesday => Self::Wed,
            Weekday::Thursday => Self::Thu,
            Weekday::Friday => Self::Fri,
            Weekday::Saturday => Self::Sat,
            Weekday::Sunday => Self::Sun,
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Weekday {
    type Err = RuleError;

    /// Accepts RFC codes (`TU`) and full names (`tuesday`), case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|day| {
                s.eq_ignore_ascii_case(day.rfc_code()) || s.eq_ignore_ascii_case(day.name())
            })
            .ok_or_else(|| RuleError::InvalidWeekday(s.to_string()))
    }
}

/// Calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    pub const ALL: [Self; 12] = [
        Self::January,
        Self::February,
        Self::March,
        Self::April,
        Self::May,
        Self::June,
        Self::July,
        Self::August,
        Self::September,
        Self::October,
        Self::November,
        Self::December,
    ];

    /// One-based month number, January = 1.
    #[must_use]
    pub const fn number(self) -> u8 {
        self as u8 + 1
    }
}

impl TryFrom<u8> for Month {
    type Error = RuleError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        value
            .checked_sub(1)
            .and_then(|index| Self::ALL.get(usize::from(index)).copied())
            .ok_or(RuleError::InvalidMonth(value))
    }
}

impl From<Month> for chrono::Month {
    fn from(value: Month) -> Self {
        match value {
            Month::January => Self::January,
            Month::February => Self::February,
            Month::March => Self::March,
            Month::April => Self::April,
            Month::May => Self::May,
            Month::June => Self::June,
            Month::July => Self::July,
            Month::August => Self::August,
            Month::September => Self::September,
            Month::October => Self::October,
            Month::November => Self::November,
            Month::December => Self::December,
        }
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(chrono::Month::from(*self).name())
    }
}

/// Position of a weekday within its month, 1..=4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct WeekIndex(u8);

impl WeekIndex {
    pub const FIRST: Self = Self(WEEK_INDEX_MIN);
    pub const LAST: Self = Self(WEEK_INDEX_MAX);

    /// ## Summary
    /// Creates a week index.
    ///
    /// ## Errors
    /// Returns `RuleError::WeekIndexOutOfRange` outside `1..=4`.
    pub fn new(value: u8) -> RuleResult<Self> {
        if (WEEK_INDEX_MIN..=WEEK_INDEX_MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(RuleError::WeekIndexOutOfRange(value))
        }
    }

    /// Clamps an occurrence ordinal into `1..=4`.
    #[must_use]
    pub fn clamped(value: u8) -> Self {
        Self(value.clamp(WEEK_INDEX_MIN, WEEK_INDEX_MAX))
    }

    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for WeekIndex {
    type Error = RuleError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<WeekIndex> for u8 {
    fn from(value: WeekIndex) -> Self {
        value.0
    }
}

/// Narrows a chrono date component known to be below 32.
fn small(value: u32) -> u8 {
    u8::try_from(value).unwrap_or(u8::MAX)
}

#[must_use]
pub fn weekday_of(date: NaiveDate) -> Weekday {
    date.weekday().into()
}

/// ## Summary
/// Counts how many times `date`'s weekday has occurred in its month up to and
/// including `date` (1-based, unclamped: 1..=5).
#[must_use]
pub fn occurrence_within_month(date: NaiveDate) -> u8 {
    small(date.day0() / 7 + 1)
}

/// ## Summary
/// Week-of-month position of `date`'s weekday, clamped to 4.
///
/// The fifth occurrence of a weekday (e.g. the last Sunday of a month with five
/// Sundays) is reported as the fourth.
#[must_use]
pub fn week_index_within_month(date: NaiveDate) -> WeekIndex {
    WeekIndex::clamped(occurrence_within_month(date))
}

#[must_use]
pub fn day_of_month(date: NaiveDate) -> u8 {
    small(date.day())
}

#[must_use]
pub fn month_of(date: NaiveDate) -> Month {
    Month::ALL[usize::from(small(date.month0()))]
}
