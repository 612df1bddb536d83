//! The mutable working state of one editing session and the rule assembler.
//!
//! ## Summary
//! A [`RuleDraft`] is seeded from an anchor date, mutated one field at a time through
//! [`RuleDraft::mutate`], and re-assembled after every change. Assembly is pure: it
//! yields either a complete [`RecurrenceRule`] or names the input still missing.

use cadence_core::config::EditorSettings;
use cadence_core::types::Frequency;
use chrono::NaiveDate;

use crate::calendar::{Month, WeekIndex, Weekday};
use crate::end::{EndChoice, EndConditionResolver};
use crate::error::{RuleError, RuleResult};
use crate::frequency::{FrequencyModel, FrequencyParams, Interval};
use crate::pattern::{MonthlyPatternMode, WeekdaySet};
use crate::rule::RecurrenceRule;

/// Lifecycle of a draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DraftState {
    /// No frequency selected yet.
    Uninitialized,
    /// Frequency selected, but the rule does not assemble yet: no end condition, or a
    /// weekly selection with no weekdays.
    FrequencyChosen,
    /// The draft assembles into a rule.
    Complete,
    /// Editor closed; no further mutation is accepted.
    Terminal,
}

/// Why a draft does not yet assemble into a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MissingInput {
    Frequency,
    EndCondition,
    /// Weekly frequency with an empty weekday selection.
    Weekdays,
}

/// Result of assembling a draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Assembly {
    Complete(RecurrenceRule),
    Incomplete(MissingInput),
}

impl Assembly {
    #[must_use]
    pub const fn rule(&self) -> Option<&RecurrenceRule> {
        match self {
            Self::Complete(rule) => Some(rule),
            Self::Incomplete(_) => None,
        }
    }

    #[must_use]
    pub const fn into_rule(self) -> Option<RecurrenceRule> {
        match self {
            Self::Complete(rule) => Some(rule),
            Self::Incomplete(_) => None,
        }
    }

    #[must_use]
    pub const fn is_complete(&self) -> bool {
        matches!(self, Self::Complete(_))
    }
}

/// A single field-level edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mutation {
    SelectFrequency(Frequency),
    SetInterval(Interval),
    ToggleWeekday(Weekday),
    SetWeekdays(WeekdaySet),
    SetMonthlyMode(MonthlyPatternMode),
    SetCustomWeekday(Weekday),
    SetCustomWeekIndex(WeekIndex),
    SetMonth(Month),
    SelectEnd(EndChoice),
    ClearEnd,
}

impl Mutation {
    /// Name of the edited field, for errors and logs.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::SelectFrequency(_) => "frequency",
            Self::SetInterval(_) => "interval",
            Self::ToggleWeekday(_) | Self::SetWeekdays(_) => "weekdays",
            Self::SetMonthlyMode(_) => "monthly_mode",
            Self::SetCustomWeekday(_) => "custom_weekday",
            Self::SetCustomWeekIndex(_) => "custom_week_index",
            Self::SetMonth(_) => "month",
            Self::SelectEnd(_) | Self::ClearEnd => "end",
        }
    }
}

/// Working state of one recurrence editing session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleDraft {
    anchor: NaiveDate,
    default_interval: Interval,
    params: Option<FrequencyParams>,
    end: EndConditionResolver,
    closed: bool,
}

impl RuleDraft {
    /// Creates an uninitialized draft with interval defaults of 1.
    #[must_use]
    pub fn new(anchor: NaiveDate) -> Self {
        Self {
            anchor,
            default_interval: Interval::ONE,
            params: None,
            end: EndConditionResolver::default(),
            closed: false,
        }
    }

    /// ## Summary
    /// Creates a draft seeded from editor settings, selecting the default frequency
    /// if one is configured.
    ///
    /// ## Errors
    /// Returns an error if the configured default interval is out of range.
    pub fn seeded(anchor: NaiveDate, settings: &EditorSettings) -> RuleResult<Self> {
        settings.validate()?;
        let mut draft = Self::new(anchor);
        draft.default_interval = Interval::new(settings.default_interval)?;
        if let Some(frequency) = settings.default_frequency {
            draft.select_frequency(frequency);
        }
        Ok(draft)
    }

    #[must_use]
    pub const fn anchor(&self) -> NaiveDate {
        self.anchor
    }

    #[must_use]
    pub const fn params(&self) -> Option<&FrequencyParams> {
        self.params.as_ref()
    }

    #[must_use]
    pub fn frequency(&self) -> Option<Frequency> {
        self.params.as_ref().map(FrequencyModel::frequency)
    }

    #[must_use]
    pub const fn end(&self) -> &EndConditionResolver {
        &self.end
    }

    /// Weekday selection, if weekly frequency is active.
    #[must_use]
    pub const fn weekdays(&self) -> Option<WeekdaySet> {
        match &self.params {
            Some(FrequencyParams::Weekly(weekly)) => Some(weekly.weekdays),
            _ => None,
        }
    }

    #[must_use]
    pub fn state(&self) -> DraftState {
        if self.closed {
            DraftState::Terminal
        } else if self.params.is_none() {
            DraftState::Uninitialized
        } else if self.assemble().is_complete() {
            DraftState::Complete
        } else {
            DraftState::FrequencyChosen
        }
    }

    /// ## Summary
    /// Applies one edit and re-assembles.
    ///
    /// ## Errors
    /// Rejected edits leave the draft unchanged:
    /// - `RuleError::DraftClosed` after [`RuleDraft::close`].
    /// - `RuleError::NoFrequency` / `RuleError::NotApplicable` for a field the active
    ///   frequency does not have.
    /// - `RuleError::UntilBeforeAnchor` for an until-date earlier than the anchor.
    pub fn mutate(&mut self, mutation: Mutation) -> RuleResult<Assembly> {
        self.apply(mutation)?;
        Ok(self.assemble())
    }

    fn apply(&mut self, mutation: Mutation) -> RuleResult<()> {
        if self.closed {
            return Err(RuleError::DraftClosed);
        }

        match mutation {
            Mutation::SelectFrequency(frequency) => self.select_frequency(frequency),
            Mutation::SelectEnd(choice) => self.end.select(choice, self.anchor)?,
            Mutation::ClearEnd => self.end.clear(),
            Mutation::SetInterval(interval) => {
                if !self.params_mut(mutation)?.set_interval(interval) {
                    return Err(self.not_applicable(mutation));
                }
            }
            _ => self.apply_pattern(mutation)?,
        }
        Ok(())
    }

    fn apply_pattern(&mut self, mutation: Mutation) -> RuleResult<()> {
        let rejected = self.not_applicable(mutation);
        match (self.params_mut(mutation)?, mutation) {
            (FrequencyParams::Weekly(weekly), Mutation::ToggleWeekday(day)) => {
                weekly.toggle(day);
            }
            (FrequencyParams::Weekly(weekly), Mutation::SetWeekdays(weekdays)) => {
                weekly.weekdays = weekdays;
            }
            (FrequencyParams::Monthly(monthly), Mutation::SetMonthlyMode(mode)) => {
                monthly.mode = mode;
            }
            (FrequencyParams::Monthly(monthly), Mutation::SetCustomWeekday(weekday)) => {
                monthly.set_custom_weekday(weekday);
            }
            (FrequencyParams::Monthly(monthly), Mutation::SetCustomWeekIndex(week_index)) => {
                monthly.set_custom_week_index(week_index);
            }
            (FrequencyParams::Yearly(yearly), Mutation::SetMonth(month)) => {
                yearly.month = month;
            }
            _ => return Err(rejected),
        }
        Ok(())
    }

    fn params_mut(&mut self, mutation: Mutation) -> RuleResult<&mut FrequencyParams> {
        self.params.as_mut().ok_or(RuleError::NoFrequency {
            field: mutation.field(),
        })
    }

    fn not_applicable(&self, mutation: Mutation) -> RuleError {
        match self.frequency() {
            Some(frequency) => RuleError::NotApplicable {
                field: mutation.field(),
                frequency,
            },
            None => RuleError::NoFrequency {
                field: mutation.field(),
            },
        }
    }

    /// Re-selecting the active frequency keeps its parameters and end condition.
    fn select_frequency(&mut self, frequency: Frequency) {
        if self.frequency() == Some(frequency) {
            return;
        }
        tracing::debug!(
            %frequency,
            anchor = %self.anchor,
            "Frequency selected, resetting parameters and end condition"
        );
        self.params = Some(FrequencyParams::for_anchor(
            frequency,
            self.anchor,
            self.default_interval,
        ));
        self.end.clear();
    }

    /// ## Summary
    /// Combines the active frequency's schedule with the chosen end condition.
    ///
    /// Pure and idempotent: an unchanged draft always assembles to an equal result.
    #[must_use]
    pub fn assemble(&self) -> Assembly {
        let Some(params) = &self.params else {
            return Assembly::Incomplete(MissingInput::Frequency);
        };
        let Some(schedule) = params.resolve(self.anchor) else {
            return Assembly::Incomplete(MissingInput::Weekdays);
        };
        let Some(end) = self.end.resolve() else {
            return Assembly::Incomplete(MissingInput::EndCondition);
        };

        let rule = RecurrenceRule::from_parts(self.anchor, schedule, end);
        tracing::trace!(?rule, "Assembled recurrence rule");
        Assembly::Complete(rule)
    }

    /// ## Summary
    /// Ends the session, returning the final assembly.
    ///
    /// Further mutations are rejected with `RuleError::DraftClosed`.
    pub fn close(&mut self) -> Assembly {
        let assembly = self.assemble();
        self.closed = true;
        tracing::debug!(complete = assembly.is_complete(), "Draft closed");
        assembly
    }
}
