//! Start-date impact advisory for weekly recurrences.
//!
//! ## Summary
//! When a weekly selection leaves out the anchor's own weekday, the series no longer
//! starts on the anchor date. The advisory is edge-triggered: it fires when the anchor's
//! weekday goes from included to excluded, not on every recompute while it stays out.

use chrono::NaiveDate;

use crate::calendar::{Weekday, weekday_of};
use crate::pattern::WeekdaySet;

/// Notice that a weekly selection moves the series' first occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Advisory {
    pub anchor: NaiveDate,
    pub anchor_weekday: Weekday,
    /// First date on or after the anchor that the selection matches.
    pub effective_start: NaiveDate,
}

/// Edge-triggered tracker of whether the anchor's weekday is excluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StartDateAdvisory {
    excluded: bool,
}

impl StartDateAdvisory {
    /// Forgets the previous observation; weekly defaults always include the anchor.
    pub fn reset(&mut self) {
        self.excluded = false;
    }

    /// ## Summary
    /// Records the current selection, returning an advisory on the transition from
    /// "anchor weekday included" to "excluded".
    ///
    /// An empty selection is not observed; the previous state carries over.
    pub fn observe(&mut self, anchor: NaiveDate, weekdays: WeekdaySet) -> Option<Advisory> {
        let effective_start = weekdays.first_on_or_after(anchor)?;
        let anchor_weekday = weekday_of(anchor);
        let excluded = !weekdays.contains(anchor_weekday);
        let fired = excluded && !self.excluded;
        self.excluded = excluded;

        fired.then(|| {
            tracing::debug!(
                %anchor,
                %anchor_weekday,
                %effective_start,
                "Weekly selection excludes the anchor weekday"
            );
            Advisory {
                anchor,
                anchor_weekday,
                effective_start,
            }
        })
    }
}
