use cadence_core::types::Frequency;
use chrono::NaiveDate;

use super::{FrequencyModel, Interval, Schedule};

/// Every N days. No within-period pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyParams {
    pub interval: Interval,
}

impl DailyParams {
    #[must_use]
    pub const fn new(interval: Interval) -> Self {
        Self { interval }
    }
}

impl FrequencyModel for DailyParams {
    fn frequency(&self) -> Frequency {
        Frequency::Daily
    }

    fn resolve(&self, _anchor: NaiveDate) -> Option<Schedule> {
        Some(Schedule::Daily {
            interval: self.interval,
        })
    }
}
