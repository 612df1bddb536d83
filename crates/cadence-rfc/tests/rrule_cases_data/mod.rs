use cadence_rule::calendar::{Month, Weekday};
use cadence_rule::end::{EndChoice, OccurrenceCount};
use cadence_rule::frequency::Interval;
use cadence_rule::pattern::MonthlyPatternMode;
use cadence_rule::{Frequency, Mutation, RecurrenceRule, RuleDraft};
use cadence_rfc::{build_rrule_set, to_rruleset_string};
use chrono::NaiveDate;

pub struct HandoffCase {
    pub name: &'static str,
    pub anchor: &'static str,
    pub edits: Vec<Mutation>,
    pub rruleset: &'static str,
    pub expected: &'static [&'static str],
    pub limit: u16,
}

fn interval(value: u8) -> Interval {
    Interval::new(value).unwrap()
}

fn count(value: u8) -> OccurrenceCount {
    OccurrenceCount::new(value).unwrap()
}

fn parse_date(value: &str) -> NaiveDate {
    value
        .parse()
        .unwrap_or_else(|err| panic!("Bad date {value}: {err}"))
}

#[expect(clippy::too_many_lines)]
pub fn handoff_cases() -> Vec<HandoffCase> {
    vec![
        HandoffCase {
            name: "daily_every_third_day_across_leap_day",
            anchor: "2024-02-27",
            edits: vec![
                Mutation::SelectFrequency(Frequency::Daily),
                Mutation::SetInterval(interval(3)),
                Mutation::SelectEnd(EndChoice::AfterOccurrences(count(4))),
            ],
            rruleset: "DTSTART:20240227T000000Z\nRRULE:FREQ=DAILY;INTERVAL=3;COUNT=4",
            expected: &["2024-02-27", "2024-03-01", "2024-03-04", "2024-03-07"],
            limit: 100,
        },
        HandoffCase {
            name: "daily_until_is_inclusive",
            anchor: "2024-03-19",
            edits: vec![
                Mutation::SelectFrequency(Frequency::Daily),
                Mutation::SelectEnd(EndChoice::UntilDate(parse_date("2024-03-21"))),
            ],
            rruleset: "DTSTART:20240319T000000Z\nRRULE:FREQ=DAILY;UNTIL=20240321T235959Z",
            expected: &["2024-03-19", "2024-03-20", "2024-03-21"],
            limit: 100,
        },
        HandoffCase {
            name: "weekly_biweekly_monday_wednesday_until_year_end",
            anchor: "2024-12-02",
            edits: vec![
                Mutation::SelectFrequency(Frequency::Weekly),
                Mutation::SetInterval(interval(2)),
                Mutation::ToggleWeekday(Weekday::Wednesday),
                Mutation::SelectEnd(EndChoice::UntilDate(parse_date("2024-12-31"))),
            ],
            rruleset: "DTSTART:20241202T000000Z\nRRULE:FREQ=WEEKLY;INTERVAL=2;BYDAY=MO,WE;UNTIL=20241231T235959Z",
            expected: &[
                "2024-12-02",
                "2024-12-04",
                "2024-12-16",
                "2024-12-18",
                "2024-12-30",
            ],
            limit: 100,
        },
        HandoffCase {
            name: "weekly_excluding_anchor_weekday_starts_later",
            anchor: "2024-12-02",
            edits: vec![
                Mutation::SelectFrequency(Frequency::Weekly),
                Mutation::ToggleWeekday(Weekday::Friday),
                Mutation::ToggleWeekday(Weekday::Monday),
                Mutation::SelectEnd(EndChoice::AfterOccurrences(count(2))),
            ],
            rruleset: "DTSTART:20241202T000000Z\nRRULE:FREQ=WEEKLY;BYDAY=FR;COUNT=2",
            expected: &["2024-12-06", "2024-12-13"],
            limit: 100,
        },
        HandoffCase {
            name: "monthly_third_tuesday",
            anchor: "2024-03-19",
            edits: vec![
                Mutation::SelectFrequency(Frequency::Monthly),
                Mutation::SelectEnd(EndChoice::AfterOccurrences(count(5))),
            ],
            rruleset: "DTSTART:20240319T000000Z\nRRULE:FREQ=MONTHLY;BYDAY=3TU;COUNT=5",
            expected: &[
                "2024-03-19",
                "2024-04-16",
                "2024-05-21",
                "2024-06-18",
                "2024-07-16",
            ],
            limit: 100,
        },
        HandoffCase {
            name: "monthly_fifth_sunday_clamps_to_fourth",
            anchor: "2024-03-31",
            edits: vec![
                Mutation::SelectFrequency(Frequency::Monthly),
                Mutation::SelectEnd(EndChoice::AfterOccurrences(count(3))),
            ],
            rruleset: "DTSTART:20240331T000000Z\nRRULE:FREQ=MONTHLY;BYDAY=4SU;COUNT=3",
            expected: &["2024-04-28", "2024-05-26", "2024-06-23"],
            limit: 100,
        },
        HandoffCase {
            name: "monthly_day_of_month_every_other_month",
            anchor: "2024-01-15",
            edits: vec![
                Mutation::SelectFrequency(Frequency::Monthly),
                Mutation::SetInterval(interval(2)),
                Mutation::SetMonthlyMode(MonthlyPatternMode::DayOfMonth),
                Mutation::SelectEnd(EndChoice::AfterOccurrences(count(3))),
            ],
            rruleset: "DTSTART:20240115T000000Z\nRRULE:FREQ=MONTHLY;INTERVAL=2;BYMONTHDAY=15;COUNT=3",
            expected: &["2024-01-15", "2024-03-15", "2024-05-15"],
            limit: 100,
        },
        HandoffCase {
            name: "yearly_anchor_month",
            anchor: "2024-06-10",
            edits: vec![
                Mutation::SelectFrequency(Frequency::Yearly),
                Mutation::SetMonth(Month::June),
                Mutation::SelectEnd(EndChoice::AfterOccurrences(count(3))),
            ],
            rruleset: "DTSTART:20240610T000000Z\nRRULE:FREQ=YEARLY;BYMONTH=6;COUNT=3",
            expected: &["2024-06-10", "2025-06-10", "2026-06-10"],
            limit: 100,
        },
        HandoffCase {
            // Only the month is kept; expansion infers day 31, which February never has
            name: "yearly_jan31_february_drops_day",
            anchor: "2024-01-31",
            edits: vec![
                Mutation::SelectFrequency(Frequency::Yearly),
                Mutation::SetMonth(Month::February),
                Mutation::SelectEnd(EndChoice::AfterOccurrences(count(3))),
            ],
            rruleset: "DTSTART:20240131T000000Z\nRRULE:FREQ=YEARLY;BYMONTH=2;COUNT=3",
            expected: &[],
            limit: 5,
        },
    ]
}

pub fn assemble(case: &HandoffCase) -> RecurrenceRule {
    let mut draft = RuleDraft::new(parse_date(case.anchor));
    for edit in &case.edits {
        draft
            .mutate(*edit)
            .unwrap_or_else(|err| panic!("Case {} rejected {edit:?}: {err}", case.name));
    }
    draft
        .assemble()
        .into_rule()
        .unwrap_or_else(|| panic!("Case {} did not complete", case.name))
}

pub fn assert_case(case: &HandoffCase) {
    let rule = assemble(case);
    assert_eq!(
        to_rruleset_string(&rule),
        case.rruleset,
        "Case {} rendered differently",
        case.name
    );

    let rrule_set = build_rrule_set(&rule)
        .unwrap_or_else(|err| panic!("Failed to build {}: {}", case.name, err));
    let result = rrule_set.all(case.limit);
    let actual: Vec<NaiveDate> = result.dates.iter().map(chrono::DateTime::date_naive).collect();
    let expected: Vec<NaiveDate> = case.expected.iter().map(|value| parse_date(value)).collect();
    assert_eq!(actual, expected, "Case {} did not match", case.name);
}
