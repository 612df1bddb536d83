use cadence_core::types::Frequency;
use chrono::NaiveDate;

use super::{FrequencyModel, Interval, Schedule};
use crate::calendar::{Weekday, weekday_of};
use crate::pattern::WeekdaySet;

/// Every N weeks on a set of weekdays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeeklyParams {
    pub interval: Interval,
    pub weekdays: WeekdaySet,
}

impl WeeklyParams {
    /// Starts with only the anchor's own weekday selected.
    #[must_use]
    pub fn for_anchor(anchor: NaiveDate, interval: Interval) -> Self {
        Self {
            interval,
            weekdays: WeekdaySet::single(weekday_of(anchor)),
        }
    }

    /// Flips `day`, returning whether it is now selected.
    pub fn toggle(&mut self, day: Weekday) -> bool {
        self.weekdays.toggle(day)
    }
}

impl FrequencyModel for WeeklyParams {
    fn frequency(&self) -> Frequency {
        Frequency::Weekly
    }

    fn resolve(&self, _anchor: NaiveDate) -> Option<Schedule> {
        if self.weekdays.is_empty() {
            tracing::trace!("Weekly schedule has no weekdays selected");
            return None;
        }
        Some(Schedule::Weekly {
            interval: self.interval,
            weekdays: self.weekdays,
        })
    }
}
