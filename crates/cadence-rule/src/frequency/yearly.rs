use cadence_core::types::Frequency;
use chrono::NaiveDate;

use super::{FrequencyModel, Schedule};
use crate::calendar::{Month, month_of};

/// Once a year in the selected month.
///
/// Only the month is kept; the anchor's day-of-month is not carried into the rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearlyParams {
    pub month: Month,
}

impl YearlyParams {
    #[must_use]
    pub fn for_anchor(anchor: NaiveDate) -> Self {
        Self {
            month: month_of(anchor),
        }
    }
}

impl FrequencyModel for YearlyParams {
    fn frequency(&self) -> Frequency {
        Frequency::Yearly
    }

    fn resolve(&self, _anchor: NaiveDate) -> Option<Schedule> {
        Some(Schedule::Yearly { month: self.month })
    }
}
