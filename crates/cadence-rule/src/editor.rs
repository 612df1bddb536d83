//! Recurrence editing session: applies edits and notifies the consumer.
//!
//! ## Summary
//! Each accepted edit runs, synchronously and in order: draft mutation, start-date
//! advisory, assembly, and a callback to the [`RuleSink`] with the new rule (or `None`
//! while incomplete). Rejected edits change nothing and notify nobody.

use cadence_core::config::EditorSettings;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::advisory::{Advisory, StartDateAdvisory};
use crate::draft::{Assembly, DraftState, Mutation, RuleDraft};
use crate::error::RuleResult;
use crate::rule::RecurrenceRule;

/// Consumer of editor output, typically the scheduling collaborator.
pub trait RuleSink {
    /// Called after every accepted edit with the re-assembled rule.
    fn rule_changed(&mut self, rule: Option<&RecurrenceRule>);

    /// Called when a weekly selection starts excluding the anchor's weekday.
    fn start_date_changed(&mut self, _advisory: &Advisory) {}
}

impl<F> RuleSink for F
where
    F: FnMut(Option<&RecurrenceRule>),
{
    fn rule_changed(&mut self, rule: Option<&RecurrenceRule>) {
        self(rule);
    }
}

/// One editing session over a [`RuleDraft`].
#[derive(Debug)]
pub struct RuleEditor<S> {
    id: Uuid,
    draft: RuleDraft,
    advisory: Option<StartDateAdvisory>,
    sink: S,
}

impl<S: RuleSink> RuleEditor<S> {
    /// ## Summary
    /// Opens a session seeded from `settings` and reports the initial assembly to `sink`.
    ///
    /// ## Errors
    /// Returns an error if `settings` are invalid.
    pub fn open(anchor: NaiveDate, settings: &EditorSettings, sink: S) -> RuleResult<Self> {
        let draft = RuleDraft::seeded(anchor, settings)?;
        let mut editor = Self {
            id: Uuid::now_v7(),
            draft,
            advisory: settings
                .start_date_advisory
                .then(StartDateAdvisory::default),
            sink,
        };
        tracing::debug!(
            session = %editor.id,
            %anchor,
            state = ?editor.draft.state(),
            "Recurrence editor opened"
        );
        let assembly = editor.draft.assemble();
        editor.sink.rule_changed(assembly.rule());
        Ok(editor)
    }

    #[must_use]
    pub const fn id(&self) -> Uuid {
        self.id
    }

    #[must_use]
    pub const fn draft(&self) -> &RuleDraft {
        &self.draft
    }

    #[must_use]
    pub const fn sink(&self) -> &S {
        &self.sink
    }

    #[must_use]
    pub fn state(&self) -> DraftState {
        self.draft.state()
    }

    #[must_use]
    pub fn current(&self) -> Assembly {
        self.draft.assemble()
    }

    /// ## Summary
    /// Applies one edit, then recomputes and notifies.
    ///
    /// ## Errors
    /// Returns the draft's rejection (see [`RuleDraft::mutate`]); the sink is not called.
    pub fn mutate(&mut self, mutation: Mutation) -> RuleResult<Assembly> {
        let _span = tracing::debug_span!("rule_editor", session = %self.id).entered();

        let previous = self.draft.frequency();
        let assembly = self.draft.mutate(mutation).inspect_err(|err| {
            tracing::warn!(field = mutation.field(), error = %err, "Rejected recurrence edit");
        })?;
        tracing::trace!(?mutation, complete = assembly.is_complete(), "Applied recurrence edit");

        self.check_start_date(self.draft.frequency() != previous);
        self.sink.rule_changed(assembly.rule());
        Ok(assembly)
    }

    fn check_start_date(&mut self, frequency_changed: bool) {
        let Some(advisory) = self.advisory.as_mut() else {
            return;
        };
        if frequency_changed {
            advisory.reset();
        }
        let Some(weekdays) = self.draft.weekdays() else {
            return;
        };
        if let Some(fired) = advisory.observe(self.draft.anchor(), weekdays) {
            self.sink.start_date_changed(&fired);
        }
    }

    /// ## Summary
    /// Closes the session, returning the committed rule if the draft is complete.
    #[must_use]
    pub fn close(mut self) -> Option<RecurrenceRule> {
        let _span = tracing::debug_span!("rule_editor", session = %self.id).entered();
        self.draft.close().into_rule()
    }

    /// Abandons the session without producing a rule.
    pub fn discard(self) {
        tracing::debug!(session = %self.id, "Recurrence editor discarded");
    }
}
