use cadence_rule::RecurrenceRule;
use rrule::{RRule, RRuleSet, Tz, Unvalidated};

use super::build::{dtstart, to_rrule_string};
use crate::error::RfcResult;

/// ## Summary
/// Builds the validated `RRuleSet` for `rule`, starting at midnight UTC of its anchor.
///
/// ## Errors
/// Returns `RfcError::RRuleError` if the rendered `RRULE` is rejected by the `rrule` crate.
pub fn build_rrule_set(rule: &RecurrenceRule) -> RfcResult<RRuleSet> {
    let rrule_text = to_rrule_string(rule);
    let rrule = rrule_text.parse::<RRule<Unvalidated>>()?;
    let dt_start = dtstart(rule).and_utc().with_timezone(&Tz::UTC);

    tracing::trace!(rrule = %rrule_text, %dt_start, "Building RRuleSet");
    Ok(rrule.build(dt_start)?)
}
