//! Within-period patterns: weekday sets and nth-weekday-of-month pairs.

use std::fmt;

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::calendar::{WeekIndex, Weekday, week_index_within_month, weekday_of};

/// Ordered set of weekdays, Monday first.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Vec<Weekday>", into = "Vec<Weekday>")]
pub struct WeekdaySet(u8);

impl WeekdaySet {
    #[must_use]
    pub const fn empty() -> Self {
        Self(0)
    }

    #[must_use]
    pub const fn single(day: Weekday) -> Self {
        Self(1 << day.index())
    }

    #[must_use]
    pub const fn contains(self, day: Weekday) -> bool {
        self.0 & (1 << day.index()) != 0
    }

    /// Returns `true` if the day was not already present.
    pub fn insert(&mut self, day: Weekday) -> bool {
        let added = !self.contains(day);
        self.0 |= 1 << day.index();
        added
    }

    /// Returns `true` if the day was present.
    pub fn remove(&mut self, day: Weekday) -> bool {
        let removed = self.contains(day);
        self.0 &= !(1 << day.index());
        removed
    }

    /// Flips membership of `day`, returning whether it is now selected.
    pub fn toggle(&mut self, day: Weekday) -> bool {
        self.0 ^= 1 << day.index();
        self.contains(day)
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[must_use]
    pub const fn len(self) -> u32 {
        self.0.count_ones()
    }

    #[must_use]
    pub fn iter(self) -> impl Iterator<Item = Weekday> {
        Weekday::ALL.into_iter().filter(move |day| self.contains(*day))
    }

    /// ## Summary
    /// Returns the first date on or after `date` whose weekday is in the set.
    ///
    /// This is the date a weekly series anchored at `date` actually starts on.
    #[must_use]
    pub fn first_on_or_after(self, date: NaiveDate) -> Option<NaiveDate> {
        (0..7)
            .filter_map(|offset| date.checked_add_days(Days::new(offset)))
            .find(|candidate| self.contains(weekday_of(*candidate)))
    }
}

impl fmt::Debug for WeekdaySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl FromIterator<Weekday> for WeekdaySet {
    fn from_iter<I: IntoIterator<Item = Weekday>>(iter: I) -> Self {
        let mut set = Self::empty();
        for day in iter {
            set.insert(day);
        }
        set
    }
}

impl From<Vec<Weekday>> for WeekdaySet {
    fn from(value: Vec<Weekday>) -> Self {
        value.into_iter().collect()
    }
}

impl From<WeekdaySet> for Vec<Weekday> {
    fn from(value: WeekdaySet) -> Self {
        value.iter().collect()
    }
}

/// "The Kth occurrence of weekday W within the month."
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NthWeekday {
    pub weekday: Weekday,
    pub week_index: WeekIndex,
}

impl NthWeekday {
    #[must_use]
    pub const fn new(weekday: Weekday, week_index: WeekIndex) -> Self {
        Self {
            weekday,
            week_index,
        }
    }

    /// The anchor's own weekday and (clamped) position within its month.
    #[must_use]
    pub fn of_anchor(anchor: NaiveDate) -> Self {
        Self::new(weekday_of(anchor), week_index_within_month(anchor))
    }
}

/// How a monthly recurrence picks its day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MonthlyPatternMode {
    /// Same weekday and week index as the anchor ("third Tuesday").
    #[default]
    DayOfWeekOfAnchor,
    /// Same day number as the anchor ("the 19th").
    DayOfMonth,
    /// User-chosen weekday and week index.
    Custom,
}

/// ## Summary
/// Derives the weekday/week-index pair for a monthly pattern mode.
///
/// Returns `None` for `DayOfMonth`, which is not weekday-based.
#[must_use]
pub fn resolve_nth_weekday(
    anchor: NaiveDate,
    mode: MonthlyPatternMode,
    custom: NthWeekday,
) -> Option<NthWeekday> {
    match mode {
        MonthlyPatternMode::DayOfWeekOfAnchor => Some(NthWeekday::of_anchor(anchor)),
        MonthlyPatternMode::Custom => Some(custom),
        MonthlyPatternMode::DayOfMonth => None,
    }
}
