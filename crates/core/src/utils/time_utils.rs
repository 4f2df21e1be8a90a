use chrono::{DateTime, Local, NaiveDate, TimeZone};

use crate::constants::DATE_FORMAT;

/// Today's date in the given timezone.
pub fn today_in<Tz: TimeZone>(now: DateTime<Tz>) -> NaiveDate {
    now.date_naive()
}

/// Today's date on the local clock. New entries default to this day.
pub fn today_local() -> NaiveDate {
    today_in(Local::now())
}

/// Formats a date as `YYYY-MM-DD`.
pub fn format_day(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parses `YYYY-MM-DD`, ignoring surrounding whitespace.
pub fn parse_day(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok()
}

/// Parses either a plain date or an RFC 3339 timestamp, keeping only the day.
pub fn parse_day_lenient(value: &str) -> Option<NaiveDate> {
    parse_day(value).or_else(|| {
        DateTime::parse_from_rfc3339(value.trim())
            .ok()
            .map(|dt| dt.date_naive())
    })
}
