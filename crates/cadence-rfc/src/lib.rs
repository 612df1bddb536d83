//! RFC 5545 hand-off for recurrence rules.
//!
//! Renders a [`cadence_rule::RecurrenceRule`] as `RRULE` text and builds the validated
//! `rrule::RRuleSet` that the scheduling collaborator expands into occurrences.

pub mod error;
pub mod recur;

pub use recur::{build_rrule_set, to_rrule_string, to_rruleset_string};
