//! The immutable recurrence definition handed to the scheduling collaborator.

use cadence_core::types::Frequency;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::end::EndCondition;
use crate::error::{RuleError, RuleResult};
use crate::frequency::{Interval, Pattern, Schedule};

/// A fully resolved recurrence rule.
///
/// Produced by [`RuleDraft::assemble`](crate::draft::RuleDraft::assemble); a new edit
/// produces a new rule rather than changing an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RuleRecord")]
pub struct RecurrenceRule {
    anchor: NaiveDate,
    schedule: Schedule,
    end: EndCondition,
}

/// Unchecked wire shape of a rule.
#[derive(Deserialize)]
struct RuleRecord {
    anchor: NaiveDate,
    schedule: Schedule,
    end: EndCondition,
}

impl TryFrom<RuleRecord> for RecurrenceRule {
    type Error = RuleError;

    fn try_from(record: RuleRecord) -> Result<Self, Self::Error> {
        Self::new(record.anchor, record.schedule, record.end)
    }
}

impl RecurrenceRule {
    /// ## Summary
    /// Builds a rule from parts, checking the invariants that the component types
    /// cannot express on their own.
    ///
    /// ## Errors
    /// - `RuleError::EmptyWeekdays` for a weekly schedule with no weekdays.
    /// - `RuleError::UntilBeforeAnchor` for an until-date earlier than `anchor`.
    pub fn new(anchor: NaiveDate, schedule: Schedule, end: EndCondition) -> RuleResult<Self> {
        if let Schedule::Weekly { weekdays, .. } = schedule {
            if weekdays.is_empty() {
                return Err(RuleError::EmptyWeekdays);
            }
        }
        if let EndCondition::Until(boundary) = end {
            let until = boundary.inclusive_date();
            if until < anchor {
                return Err(RuleError::UntilBeforeAnchor { until, anchor });
            }
        }
        Ok(Self::from_parts(anchor, schedule, end))
    }

    /// Callers guarantee the invariants checked by [`RecurrenceRule::new`].
    pub(crate) const fn from_parts(
        anchor: NaiveDate,
        schedule: Schedule,
        end: EndCondition,
    ) -> Self {
        Self {
            anchor,
            schedule,
            end,
        }
    }

    #[must_use]
    pub const fn anchor(&self) -> NaiveDate {
        self.anchor
    }

    #[must_use]
    pub const fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    #[must_use]
    pub const fn frequency(&self) -> Frequency {
        self.schedule.frequency()
    }

    #[must_use]
    pub const fn interval(&self) -> Option<Interval> {
        self.schedule.interval()
    }

    #[must_use]
    pub const fn pattern(&self) -> Option<Pattern> {
        self.schedule.pattern()
    }

    #[must_use]
    pub const fn end(&self) -> EndCondition {
        self.end
    }
}
