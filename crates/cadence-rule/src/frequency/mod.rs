//! Per-frequency parameter models.
//!
//! ## Summary
//! Each frequency keeps only the parameters relevant to it and resolves them,
//! relative to the anchor date, into a [`Schedule`]: the frequency half of a rule.

mod daily;
mod monthly;
mod weekly;
mod yearly;

pub use daily::DailyParams;
pub use monthly::{MonthlyParams, MonthlyPattern};
pub use weekly::WeeklyParams;
pub use yearly::YearlyParams;

use std::fmt;

use cadence_core::constants::{INTERVAL_MAX, INTERVAL_MIN};
use cadence_core::types::Frequency;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calendar::Month;
use crate::error::{RuleError, RuleResult};
use crate::pattern::{NthWeekday, WeekdaySet};

/// "Every N periods", 1..=30.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Interval(u8);

impl Interval {
    pub const ONE: Self = Self(INTERVAL_MIN);

    /// ## Summary
    /// Creates an interval.
    ///
    /// ## Errors
    /// Returns `RuleError::IntervalOutOfRange` outside `1..=30`.
    pub fn new(value: u8) -> RuleResult<Self> {
        if (INTERVAL_MIN..=INTERVAL_MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(RuleError::IntervalOutOfRange(value))
        }
    }

    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Interval {
    type Error = RuleError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Interval> for u8 {
    fn from(value: Interval) -> Self {
        value.0
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The frequency half of a recurrence rule.
///
/// One variant per frequency so that a pattern can only appear alongside the
/// frequency it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "frequency", rename_all = "lowercase")]
pub enum Schedule {
    Daily {
        interval: Interval,
    },
    Weekly {
        interval: Interval,
        weekdays: WeekdaySet,
    },
    Monthly {
        interval: Interval,
        pattern: MonthlyPattern,
    },
    Yearly {
        month: Month,
    },
}

/// The within-period selector of a schedule, flattened across frequencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pattern {
    Weekdays(WeekdaySet),
    NthWeekday(NthWeekday),
    DayOfMonth(u8),
    Month(Month),
}

impl Schedule {
    #[must_use]
    pub const fn frequency(&self) -> Frequency {
        match self {
            Self::Daily { .. } => Frequency::Daily,
            Self::Weekly { .. } => Frequency::Weekly,
            Self::Monthly { .. } => Frequency::Monthly,
            Self::Yearly { .. } => Frequency::Yearly,
        }
    }

    /// Returns `None` for yearly schedules, which are implicitly "every year".
    #[must_use]
    pub const fn interval(&self) -> Option<Interval> {
        match self {
            Self::Daily { interval }
            | Self::Weekly { interval, .. }
            | Self::Monthly { interval, .. } => Some(*interval),
            Self::Yearly { .. } => None,
        }
    }

    /// Returns `None` for daily schedules, which have no within-period selector.
    #[must_use]
    pub const fn pattern(&self) -> Option<Pattern> {
        match self {
            Self::Daily { .. } => None,
            Self::Weekly { weekdays, .. } => Some(Pattern::Weekdays(*weekdays)),
            Self::Monthly {
                pattern: MonthlyPattern::NthWeekday(nth),
                ..
            } => Some(Pattern::NthWeekday(*nth)),
            Self::Monthly {
                pattern: MonthlyPattern::DayOfMonth(day),
                ..
            } => Some(Pattern::DayOfMonth(*day)),
            Self::Yearly { month } => Some(Pattern::Month(*month)),
        }
    }
}

/// A frequency's parameter set, resolvable against an anchor date.
pub trait FrequencyModel {
    fn frequency(&self) -> Frequency;

    /// ## Summary
    /// Resolves the parameters into a schedule.
    ///
    /// Returns `None` while a required selection is missing.
    fn resolve(&self, anchor: NaiveDate) -> Option<Schedule>;
}

/// Parameters of whichever frequency is active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrequencyParams {
    Daily(DailyParams),
    Weekly(WeeklyParams),
    Monthly(MonthlyParams),
    Yearly(YearlyParams),
}

impl FrequencyParams {
    /// ## Summary
    /// Initializes `frequency`'s parameters with defaults derived from `anchor`.
    #[must_use]
    pub fn for_anchor(frequency: Frequency, anchor: NaiveDate, interval: Interval) -> Self {
        match frequency {
            Frequency::Daily => Self::Daily(DailyParams::new(interval)),
            Frequency::Weekly => Self::Weekly(WeeklyParams::for_anchor(anchor, interval)),
            Frequency::Monthly => Self::Monthly(MonthlyParams::for_anchor(anchor, interval)),
            Frequency::Yearly => Self::Yearly(YearlyParams::for_anchor(anchor)),
        }
    }

    fn model(&self) -> &dyn FrequencyModel {
        match self {
            Self::Daily(params) => params,
            Self::Weekly(params) => params,
            Self::Monthly(params) => params,
            Self::Yearly(params) => params,
        }
    }

    #[must_use]
    pub fn interval(&self) -> Option<Interval> {
        match self {
            Self::Daily(params) => Some(params.interval),
            Self::Weekly(params) => Some(params.interval),
            Self::Monthly(params) => Some(params.interval),
            Self::Yearly(_) => None,
        }
    }

    /// Sets the interval, returning `false` for yearly parameters.
    pub fn set_interval(&mut self, interval: Interval) -> bool {
        match self {
            Self::Daily(params) => params.interval = interval,
            Self::Weekly(params) => params.interval = interval,
            Self::Monthly(params) => params.interval = interval,
            Self::Yearly(_) => return false,
        }
        true
    }
}

impl FrequencyModel for FrequencyParams {
    fn frequency(&self) -> Frequency {
        self.model().frequency()
    }

    fn resolve(&self, anchor: NaiveDate) -> Option<Schedule> {
        self.model().resolve(anchor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::{WeekIndex, Weekday};

    fn anchor() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 19).unwrap()
    }

    #[test]
    fn interval_bounds() {
        assert!(Interval::new(0).is_err());
        assert!(Interval::new(31).is_err());
        assert_eq!(Interval::new(30).unwrap().get(), 30);
        assert!(serde_json::from_str::<Interval>("31").is_err());
    }

    #[test]
    fn defaults_are_derived_from_anchor() {
        let interval = Interval::new(2).unwrap();

        for frequency in Frequency::ALL {
            let params = FrequencyParams::for_anchor(frequency, anchor(), interval);
            assert_eq!(params.frequency(), frequency);
            let schedule = params.resolve(anchor()).unwrap();
            assert_eq!(schedule.frequency(), frequency);
            assert_eq!(
                schedule.interval(),
                (frequency != Frequency::Yearly).then_some(interval)
            );
        }
    }

    #[test]
    fn schedule_patterns() {
        let params = FrequencyParams::for_anchor(Frequency::Monthly, anchor(), Interval::ONE);
        assert_eq!(
            params.resolve(anchor()).unwrap().pattern(),
            Some(Pattern::NthWeekday(NthWeekday::new(
                Weekday::Tuesday,
                WeekIndex::new(3).unwrap()
            )))
        );

        let params = FrequencyParams::for_anchor(Frequency::Daily, anchor(), Interval::ONE);
        assert_eq!(params.resolve(anchor()).unwrap().pattern(), None);
    }

    #[test]
    fn yearly_rejects_interval() {
        let mut params = FrequencyParams::for_anchor(Frequency::Yearly, anchor(), Interval::ONE);
        assert!(!params.set_interval(Interval::new(3).unwrap()));
        assert_eq!(params.interval(), None);

        let mut params = FrequencyParams::for_anchor(Frequency::Daily, anchor(), Interval::ONE);
        assert!(params.set_interval(Interval::new(3).unwrap()));
        assert_eq!(params.interval(), Interval::new(3).ok());
    }

    #[test]
    fn schedule_serializes_with_frequency_tag() {
        let schedule = Schedule::Daily {
            interval: Interval::new(4).unwrap(),
        };
        assert_eq!(
            serde_json::to_value(schedule).unwrap(),
            serde_json::json!({ "frequency": "daily", "interval": 4 })
        );
    }
}
