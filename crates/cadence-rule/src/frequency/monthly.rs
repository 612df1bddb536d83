use cadence_core::types::Frequency;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{FrequencyModel, Interval, Schedule};
use crate::calendar::{WeekIndex, Weekday, day_of_month};
use crate::pattern::{MonthlyPatternMode, NthWeekday, resolve_nth_weekday};

/// The day a monthly recurrence lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MonthlyPattern {
    NthWeekday(NthWeekday),
    DayOfMonth(u8),
}

/// Every N months, by weekday position or by day number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthlyParams {
    pub interval: Interval,
    pub mode: MonthlyPatternMode,
    /// Only consulted in `Custom` mode; kept across mode switches.
    pub custom: NthWeekday,
}

impl MonthlyParams {
    /// Defaults to the anchor's own weekday position, with `custom` seeded from it too.
    #[must_use]
    pub fn for_anchor(anchor: NaiveDate, interval: Interval) -> Self {
        Self {
            interval,
            mode: MonthlyPatternMode::default(),
            custom: NthWeekday::of_anchor(anchor),
        }
    }

    pub fn set_custom_weekday(&mut self, weekday: Weekday) {
        self.custom.weekday = weekday;
    }

    pub fn set_custom_week_index(&mut self, week_index: WeekIndex) {
        self.custom.week_index = week_index;
    }

    #[must_use]
    pub fn pattern(&self, anchor: NaiveDate) -> MonthlyPattern {
        resolve_nth_weekday(anchor, self.mode, self.custom).map_or_else(
            || MonthlyPattern::DayOfMonth(day_of_month(anchor)),
            MonthlyPattern::NthWeekday,
        )
    }
}

impl FrequencyModel for MonthlyParams {
    fn frequency(&self) -> Frequency {
        Frequency::Monthly
    }

    fn resolve(&self, anchor: NaiveDate) -> Option<Schedule> {
        Some(Schedule::Monthly {
            interval: self.interval,
            pattern: self.pattern(anchor),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anchor() -> NaiveDate {
        // Third Tuesday of March
        NaiveDate::from_ymd_opt(2024, 3, 19).unwrap()
    }

    #[test]
    fn day_of_week_of_anchor() {
        let params = MonthlyParams::for_anchor(anchor(), Interval::ONE);
        assert_eq!(
            params.pattern(anchor()),
            MonthlyPattern::NthWeekday(NthWeekday::new(
                Weekday::Tuesday,
                WeekIndex::new(3).unwrap()
            ))
        );
    }

    #[test]
    fn day_of_month_mode() {
        let mut params = MonthlyParams::for_anchor(anchor(), Interval::ONE);
        params.mode = MonthlyPatternMode::DayOfMonth;
        assert_eq!(params.pattern(anchor()), MonthlyPattern::DayOfMonth(19));
    }

    #[test]
    fn custom_defaults_to_anchor_then_follows_edits() {
        let mut params = MonthlyParams::for_anchor(anchor(), Interval::ONE);
        params.mode = MonthlyPatternMode::Custom;
        assert_eq!(
            params.pattern(anchor()),
            MonthlyPattern::NthWeekday(NthWeekday::of_anchor(anchor()))
        );

        params.set_custom_weekday(Weekday::Friday);
        params.set_custom_week_index(WeekIndex::FIRST);
        assert_eq!(
            params.pattern(anchor()),
            MonthlyPattern::NthWeekday(NthWeekday::new(Weekday::Friday, WeekIndex::FIRST))
        );
    }

    #[test]
    fn mode_switch_keeps_interval() {
        let interval = Interval::new(3).unwrap();
        let mut params = MonthlyParams::for_anchor(anchor(), interval);
        for mode in [
            MonthlyPatternMode::DayOfMonth,
            MonthlyPatternMode::Custom,
            MonthlyPatternMode::DayOfWeekOfAnchor,
        ] {
            params.mode = mode;
            assert_eq!(params.resolve(anchor()).unwrap().interval(), Some(interval));
        }
    }

    #[test]
    fn pattern_serialization() {
        assert_eq!(
            serde_json::to_value(MonthlyPattern::DayOfMonth(19)).unwrap(),
            serde_json::json!({ "day_of_month": 19 })
        );
        assert_eq!(
            serde_json::to_value(MonthlyPattern::NthWeekday(NthWeekday::of_anchor(anchor())))
                .unwrap(),
            serde_json::json!({ "nth_weekday": { "weekday": "tuesday", "week_index": 3 } })
        );
    }
}
