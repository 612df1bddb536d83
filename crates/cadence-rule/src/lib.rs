//! Recurrence-rule construction engine.
//!
//! ## Summary
//! Turns field-level editor choices (frequency, interval, weekday or month pattern,
//! end condition) relative to an anchor date into an immutable [`RecurrenceRule`].
//!
//! - [`calendar`]: weekday, week-of-month, day and month of a date
//! - [`pattern`]: weekday sets and nth-weekday patterns
//! - [`frequency`]: per-frequency parameter models
//! - [`end`]: end-condition resolution with inclusive until-dates
//! - [`draft`]: the mutable draft, its state machine and the assembler
//! - [`advisory`]: weekly start-date advisory
//! - [`editor`]: editing session that notifies a [`RuleSink`] after every edit

pub mod advisory;
pub mod calendar;
pub mod draft;
pub mod editor;
pub mod end;
pub mod error;
pub mod frequency;
pub mod pattern;
pub mod rule;

pub use cadence_core::types::Frequency;
pub use draft::{Assembly, DraftState, MissingInput, Mutation, RuleDraft};
pub use editor::{RuleEditor, RuleSink};
pub use error::{RuleError, RuleResult};
pub use rule::RecurrenceRule;
