//! Canonical month and weekday names.
//!
//! chrono's own `FromStr` impls also accept abbreviations ("jan", "mon");
//! prompts only accept the full names, so matching is done here.

use chrono::{Month, Weekday};

pub const MONTHS: [Month; 12] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
    Month::July,
    Month::August,
    Month::September,
    Month::October,
    Month::November,
    Month::December,
];

pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Full month name, case-insensitive ("May", "may", " MAY ").
pub fn parse_month(input: &str) -> Option<Month> {
    let wanted = input.trim();
    MONTHS
        .into_iter()
        .find(|m| m.name().eq_ignore_ascii_case(wanted))
}

/// Full weekday name, case-insensitive.
pub fn parse_weekday(input: &str) -> Option<Weekday> {
    let wanted = input.trim();
    WEEKDAYS
        .into_iter()
        .find(|d| weekday_name(*d).eq_ignore_ascii_case(wanted))
}

/// 1-based month number → Month
pub fn month_from_number(n: u32) -> Option<Month> {
    MONTHS.into_iter().find(|m| m.number_from_month() == n)
}
