//! `RRULE` text rendering (RFC 5545 §3.3.10).

use cadence_rule::calendar::Weekday;
use cadence_rule::end::{EndCondition, UntilBoundary};
use cadence_rule::frequency::Pattern;
use cadence_rule::RecurrenceRule;
use chrono::{NaiveDateTime, NaiveTime, TimeDelta};

const UTC_DATETIME_FORMAT: &str = "%Y%m%dT%H%M%SZ";

/// Series start: midnight of the anchor date, treated as UTC.
#[must_use]
pub fn dtstart(rule: &RecurrenceRule) -> NaiveDateTime {
    rule.anchor().and_time(NaiveTime::MIN)
}

/// ## Summary
/// Last second admitted by an until boundary.
///
/// RFC 5545 `UNTIL` is inclusive, so the exclusive start-of-next-day boundary is
/// rendered one second earlier; an occurrence at midnight of the following day
/// stays excluded.
#[must_use]
pub fn last_inclusive_instant(boundary: UntilBoundary) -> NaiveDateTime {
    let exclusive = boundary.exclusive_end();
    exclusive
        .checked_sub_signed(TimeDelta::seconds(1))
        .unwrap_or(exclusive)
}

fn byday(days: impl Iterator<Item = Weekday>) -> String {
    days.map(Weekday::rfc_code).collect::<Vec<_>>().join(",")
}

/// ## Summary
/// Renders the rule as an `RRULE` value, e.g. `FREQ=WEEKLY;INTERVAL=2;BYDAY=MO,WE;COUNT=5`.
///
/// Parts are emitted in a fixed order: `FREQ`, `INTERVAL` (omitted when 1), the
/// pattern part, then `COUNT` or `UNTIL`.
#[must_use]
pub fn to_rrule_string(rule: &RecurrenceRule) -> String {
    let mut parts = vec![format!("FREQ={}", rule.frequency().rfc_name())];

    if let Some(interval) = rule.interval().filter(|interval| interval.get() > 1) {
        parts.push(format!("INTERVAL={interval}"));
    }

    match rule.pattern() {
        Some(Pattern::Weekdays(weekdays)) => {
            parts.push(format!("BYDAY={}", byday(weekdays.iter())));
        }
        Some(Pattern::NthWeekday(nth)) => parts.push(format!(
            "BYDAY={}{}",
            nth.week_index.get(),
            nth.weekday.rfc_code()
        )),
        Some(Pattern::DayOfMonth(day)) => parts.push(format!("BYMONTHDAY={day}")),
        Some(Pattern::Month(month)) => parts.push(format!("BYMONTH={}", month.number())),
        None => {}
    }

    match rule.end() {
        EndCondition::Never => {}
        EndCondition::AfterOccurrences(count) => parts.push(format!("COUNT={count}")),
        EndCondition::Until(boundary) => parts.push(format!(
            "UNTIL={}",
            last_inclusive_instant(boundary).format(UTC_DATETIME_FORMAT)
        )),
    }

    let rendered = parts.join(";");
    tracing::trace!(rrule = %rendered, "Rendered RRULE");
    rendered
}

/// ## Summary
/// Renders `DTSTART` and `RRULE` lines as accepted by `rrule::RRuleSet`'s parser.
#[must_use]
pub fn to_rruleset_string(rule: &RecurrenceRule) -> String {
    format!(
        "DTSTART:{}\nRRULE:{}",
        dtstart(rule).format(UTC_DATETIME_FORMAT),
        to_rrule_string(rule)
    )
}
