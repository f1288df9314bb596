use chrono::{DateTime, FixedOffset};

pub struct PeriodCase {
    pub name: &'static str,
    pub start: &'static str,
    pub end: &'static str,
    pub frequency: &'static str,
    pub until: Option<&'static str>,
    pub now: &'static str,
    pub want_active: &'static str,
    pub want_upcoming: &'static str,
}

#[expect(clippy::too_many_lines)]
pub fn period_cases() -> Vec<PeriodCase> {
    vec![
        PeriodCase {
            name: "onetime_override_incoming",
            start: "2021-05-01T00:00:00+09:00",
            end: "2021-05-03T00:00:00+09:00",
            frequency: "",
            until: None,
            now: "2021-04-30T23:59:59+09:00",
            want_active: "",
            want_upcoming: "2021-05-01T00:00:00+09:00-2021-05-03T00:00:00+09:00",
        },
        PeriodCase {
            name: "onetime_override_started",
            start: "2021-05-01T00:00:00+09:00",
            end: "2021-05-03T00:00:00+09:00",
            frequency: "",
            until: None,
            now: "2021-05-01T00:00:00+09:00",
            want_active: "2021-05-01T00:00:00+09:00-2021-05-03T00:00:00+09:00",
            want_upcoming: "",
        },
        PeriodCase {
            name: "onetime_override_ending",
            start: "2021-05-01T00:00:00+09:00",
            end: "2021-05-03T00:00:00+09:00",
            frequency: "",
            until: None,
            now: "2021-05-02T23:59:59+09:00",
            want_active: "2021-05-01T00:00:00+09:00-2021-05-03T00:00:00+09:00",
            want_upcoming: "",
        },
        PeriodCase {
            name: "onetime_override_ended",
            start: "2021-05-01T00:00:00+09:00",
            end: "2021-05-03T00:00:00+09:00",
            frequency: "",
            until: None,
            now: "2021-05-03T00:00:00+09:00",
            want_active: "",
            want_upcoming: "",
        },
        PeriodCase {
            name: "weekly_override_incoming",
            start: "2021-05-01T00:00:00+09:00",
            end: "2021-05-03T00:00:00+09:00",
            frequency: "Weekly",
            until: Some("2022-05-01T00:00:00+09:00"),
            now: "2021-04-30T23:59:59+09:00",
            want_active: "",
            want_upcoming: "2021-05-01T00:00:00+09:00-2021-05-03T00:00:00+09:00",
        },
        PeriodCase {
            name: "weekly_override_started",
            start: "2021-05-01T00:00:00+09:00",
            end: "2021-05-03T00:00:00+09:00",
            frequency: "Weekly",
            until: Some("2022-05-01T00:00:00+09:00"),
            now: "2021-05-01T00:00:00+09:00",
            want_active: "2021-05-01T00:00:00+09:00-2021-05-03T00:00:00+09:00",
            want_upcoming: "2021-05-08T00:00:00+09:00-2021-05-10T00:00:00+09:00",
        },
        PeriodCase {
            name: "weekly_override_ending",
            start: "2021-05-01T00:00:00+09:00",
            end: "2021-05-03T00:00:00+09:00",
            frequency: "Weekly",
            until: Some("2022-05-01T00:00:00+09:00"),
            now: "2021-05-02T23:59:59+09:00",
            want_active: "2021-05-01T00:00:00+09:00-2021-05-03T00:00:00+09:00",
            want_upcoming: "2021-05-08T00:00:00+09:00-2021-05-10T00:00:00+09:00",
        },
        PeriodCase {
            name: "weekly_override_ended",
            start: "2021-05-01T00:00:00+09:00",
            end: "2021-05-03T00:00:00+09:00",
            frequency: "Weekly",
            until: Some("2022-05-01T00:00:00+09:00"),
            now: "2021-05-03T00:00:00+09:00",
            want_active: "",
            want_upcoming: "2021-05-08T00:00:00+09:00-2021-05-10T00:00:00+09:00",
        },
        PeriodCase {
            name: "weekly_override_recurrence_incoming",
            start: "2021-05-01T00:00:00+09:00",
            end: "2021-05-03T00:00:00+09:00",
            frequency: "Weekly",
            until: Some("2022-05-01T00:00:00+09:00"),
            now: "2021-05-07T23:59:59+09:00",
            want_active: "",
            want_upcoming: "2021-05-08T00:00:00+09:00-2021-05-10T00:00:00+09:00",
        },
        PeriodCase {
            name: "weekly_override_recurrence_started",
            start: "2021-05-01T00:00:00+09:00",
            end: "2021-05-03T00:00:00+09:00",
            frequency: "Weekly",
            until: Some("2022-05-01T00:00:00+09:00"),
            now: "2021-05-08T00:00:00+09:00",
            want_active: "2021-05-08T00:00:00+09:00-2021-05-10T00:00:00+09:00",
            want_upcoming: "2021-05-15T00:00:00+09:00-2021-05-17T00:00:00+09:00",
        },
        PeriodCase {
            name: "weekly_override_recurrence_ending",
            start: "2021-05-01T00:00:00+09:00",
            end: "2021-05-03T00:00:00+09:00",
            frequency: "Weekly",
            until: Some("2022-05-01T00:00:00+09:00"),
            now: "2021-05-09T23:59:59+09:00",
            want_active: "2021-05-08T00:00:00+09:00-2021-05-10T00:00:00+09:00",
            want_upcoming: "2021-05-15T00:00:00+09:00-2021-05-17T00:00:00+09:00",
        },
        PeriodCase {
            name: "weekly_override_recurrence_ended",
            start: "2021-05-01T00:00:00+09:00",
            end: "2021-05-03T00:00:00+09:00",
            frequency: "Weekly",
            until: Some("2022-05-01T00:00:00+09:00"),
            now: "2021-05-10T00:00:00+09:00",
            want_active: "",
            want_upcoming: "2021-05-15T00:00:00+09:00-2021-05-17T00:00:00+09:00",
        },
        PeriodCase {
            name: "weekly_override_last_recurrence_incoming",
            start: "2021-05-01T00:00:00+09:00",
            end: "2021-05-03T00:00:00+09:00",
            frequency: "Weekly",
            until: Some("2022-05-01T00:00:00+09:00"),
            now: "2022-04-29T23:59:59+09:00",
            want_active: "",
            want_upcoming: "2022-04-30T00:00:00+09:00-2022-05-02T00:00:00+09:00",
        },
        PeriodCase {
            name: "weekly_override_last_recurrence_started",
            start: "2021-05-01T00:00:00+09:00",
            end: "2021-05-03T00:00:00+09:00",
            frequency: "Weekly",
            until: Some("2022-05-01T00:00:00+09:00"),
            now: "2022-04-30T00:00:00+09:00",
            want_active: "2022-04-30T00:00:00+09:00-2022-05-02T00:00:00+09:00",
            want_upcoming: "",
        },
        PeriodCase {
            name: "weekly_override_last_recurrence_ending",
            start: "2021-05-01T00:00:00+09:00",
            end: "2021-05-03T00:00:00+09:00",
            frequency: "Weekly",
            until: Some("2022-05-01T00:00:00+09:00"),
            now: "2022-05-01T23:59:59+09:00",
            want_active: "2022-04-30T00:00:00+09:00-2022-05-02T00:00:00+09:00",
            want_upcoming: "",
        },
        PeriodCase {
            name: "weekly_override_last_recurrence_ended",
            start: "2021-05-01T00:00:00+09:00",
            end: "2021-05-03T00:00:00+09:00",
            frequency: "Weekly",
            until: Some("2022-05-01T00:00:00+09:00"),
            now: "2022-05-02T00:00:00+09:00",
            want_active: "",
            want_upcoming: "",
        },
        PeriodCase {
            name: "weekly_override_repeated_forever_just_starting",
            start: "2021-05-01T00:00:00+09:00",
            end: "2021-05-03T00:00:00+09:00",
            frequency: "Weekly",
            until: None,
            now: "2021-05-08T00:00:00+09:00",
            want_active: "2021-05-08T00:00:00+09:00-2021-05-10T00:00:00+09:00",
            want_upcoming: "2021-05-15T00:00:00+09:00-2021-05-17T00:00:00+09:00",
        },
        PeriodCase {
            name: "monthly_override_just_starting",
            start: "2021-05-01T00:00:00+09:00",
            end: "2021-05-03T00:00:00+09:00",
            frequency: "Monthly",
            until: Some("2022-05-01T00:00:00+09:00"),
            now: "2021-05-01T00:00:00+09:00",
            want_active: "2021-05-01T00:00:00+09:00-2021-05-03T00:00:00+09:00",
            want_upcoming: "2021-06-01T00:00:00+09:00-2021-06-03T00:00:00+09:00",
        },
        PeriodCase {
            name: "monthly_override_just_recurring",
            start: "2021-05-01T00:00:00+09:00",
            end: "2021-05-03T00:00:00+09:00",
            frequency: "Monthly",
            until: Some("2022-05-01T00:00:00+09:00"),
            now: "2021-06-01T00:00:00+09:00",
            want_active: "2021-06-01T00:00:00+09:00-2021-06-03T00:00:00+09:00",
            want_upcoming: "2021-07-01T00:00:00+09:00-2021-07-03T00:00:00+09:00",
        },
        PeriodCase {
            name: "monthly_override_last_recurrence_incoming",
            start: "2021-05-01T00:00:00+09:00",
            end: "2021-05-03T00:00:00+09:00",
            frequency: "Monthly",
            until: Some("2022-05-01T00:00:00+09:00"),
            now: "2022-04-30T23:59:59+09:00",
            want_active: "",
            want_upcoming: "2022-05-01T00:00:00+09:00-2022-05-03T00:00:00+09:00",
        },
        PeriodCase {
            name: "monthly_override_last_recurrence_starting",
            start: "2021-05-01T00:00:00+09:00",
            end: "2021-05-03T00:00:00+09:00",
            frequency: "Monthly",
            until: Some("2022-05-01T00:00:00+09:00"),
            now: "2022-05-01T00:00:00+09:00",
            want_active: "2022-05-01T00:00:00+09:00-2022-05-03T00:00:00+09:00",
            want_upcoming: "",
        },
        PeriodCase {
            name: "monthly_override_last_recurrence_started",
            start: "2021-05-01T00:00:00+09:00",
            end: "2021-05-03T00:00:00+09:00",
            frequency: "Monthly",
            until: Some("2022-05-01T00:00:00+09:00"),
            now: "2022-05-01T00:00:01+09:00",
            want_active: "2022-05-01T00:00:00+09:00-2022-05-03T00:00:00+09:00",
            want_upcoming: "",
        },
        PeriodCase {
            name: "monthly_override_last_recurrence_ending",
            start: "2021-05-01T00:00:00+09:00",
            end: "2021-05-03T00:00:00+09:00",
            frequency: "Monthly",
            until: Some("2022-05-01T00:00:00+09:00"),
            now: "2022-05-02T23:59:59+09:00",
            want_active: "2022-05-01T00:00:00+09:00-2022-05-03T00:00:00+09:00",
            want_upcoming: "",
        },
        PeriodCase {
            name: "monthly_override_last_recurrence_ended",
            start: "2021-05-01T00:00:00+09:00",
            end: "2021-05-03T00:00:00+09:00",
            frequency: "Monthly",
            until: Some("2022-05-01T00:00:00+09:00"),
            now: "2022-05-03T00:00:00+09:00",
            want_active: "",
            want_upcoming: "",
        },
        PeriodCase {
            name: "yearly_override_just_starting",
            start: "2021-05-01T00:00:00+09:00",
            end: "2021-05-03T00:00:00+09:00",
            frequency: "Yearly",
            until: Some("2022-05-01T00:00:00+09:00"),
            now: "2021-05-01T00:00:00+09:00",
            want_active: "2021-05-01T00:00:00+09:00-2021-05-03T00:00:00+09:00",
            want_upcoming: "2022-05-01T00:00:00+09:00-2022-05-03T00:00:00+09:00",
        },
        PeriodCase {
            name: "yearly_override_just_recurring",
            start: "2021-05-01T00:00:00+09:00",
            end: "2021-05-03T00:00:00+09:00",
            frequency: "Yearly",
            until: Some("2023-05-01T00:00:00+09:00"),
            now: "2022-05-01T00:00:00+09:00",
            want_active: "2022-05-01T00:00:00+09:00-2022-05-03T00:00:00+09:00",
            want_upcoming: "2023-05-01T00:00:00+09:00-2023-05-03T00:00:00+09:00",
        },
        PeriodCase {
            name: "yearly_override_last_recurrence_incoming",
            start: "2021-05-01T00:00:00+09:00",
            end: "2021-05-03T00:00:00+09:00",
            frequency: "Yearly",
            until: Some("2023-05-01T00:00:00+09:00"),
            now: "2023-04-30T23:59:59+09:00",
            want_active: "",
            want_upcoming: "2023-05-01T00:00:00+09:00-2023-05-03T00:00:00+09:00",
        },
        PeriodCase {
            name: "yearly_override_last_recurrence_starting",
            start: "2021-05-01T00:00:00+09:00",
            end: "2021-05-03T00:00:00+09:00",
            frequency: "Yearly",
            until: Some("2023-05-01T00:00:00+09:00"),
            now: "2023-05-01T00:00:00+09:00",
            want_active: "2023-05-01T00:00:00+09:00-2023-05-03T00:00:00+09:00",
            want_upcoming: "",
        },
        PeriodCase {
            name: "yearly_override_last_recurrence_started",
            start: "2021-05-01T00:00:00+09:00",
            end: "2021-05-03T00:00:00+09:00",
            frequency: "Yearly",
            until: Some("2023-05-01T00:00:00+09:00"),
            now: "2023-05-01T00:00:01+09:00",
            want_active: "2023-05-01T00:00:00+09:00-2023-05-03T00:00:00+09:00",
            want_upcoming: "",
        },
        PeriodCase {
            name: "yearly_override_last_recurrence_ending",
            start: "2021-05-01T00:00:00+09:00",
            end: "2021-05-03T00:00:00+09:00",
            frequency: "Yearly",
            until: Some("2023-05-01T00:00:00+09:00"),
            now: "2023-05-02T23:23:59+09:00",
            want_active: "2023-05-01T00:00:00+09:00-2023-05-03T00:00:00+09:00",
            want_upcoming: "",
        },
        PeriodCase {
            name: "yearly_override_last_recurrence_ended",
            start: "2021-05-01T00:00:00+09:00",
            end: "2021-05-03T00:00:00+09:00",
            frequency: "Yearly",
            until: Some("2023-05-01T00:00:00+09:00"),
            now: "2023-05-03T00:00:00+09:00",
            want_active: "",
            want_upcoming: "",
        },
    ]
}

pub fn assert_case(case: &PeriodCase) {
    let periods = calculate_active_and_upcoming_recurring_periods(
        parse_rfc3339(case.now),
        parse_rfc3339(case.start),
        parse_rfc3339(case.end),
        case.frequency,
        case.until.map(parse_rfc3339),
    )
    .unwrap_or_else(|err| panic!("Case {} failed to evaluate: {}", case.name, err));

    assert_eq!(
        format_period(periods.active.as_ref()),
        case.want_active,
        "Case {} returned an unexpected active period",
        case.name
    );
    assert_eq!(
        format_period(periods.upcoming.as_ref()),
        case.want_upcoming,
        "Case {} returned an unexpected upcoming period",
        case.name
    );
}

fn parse_rfc3339(value: &str) -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339(value).unwrap_or_else(|err| {
        panic!("Failed to parse rfc3339 value {value}: {err}")
    })
}
