use chrono::{NaiveDate, NaiveDateTime, NaiveTime, ParseResult, TimeDelta};

/// Layout of the separate `Date` and `Time` columns of a terminal report once joined.
const REPORT_TIMESTAMP_FORMAT: &str = "%d/%m/%Y %H:%M:%S";
/// Layout persisted in the store. Lexical order of this layout is chronological order.
const STORAGE_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const STORAGE_DATE_FORMAT: &str = "%Y-%m-%d";
const DAY_FORMAT: &str = "%d/%m/%Y";
const TIME_FORMAT: &str = "%H:%M:%S";

const LAST_SECOND_OF_DAY: i64 = 86_399;

pub fn parse_report_timestamp(date: &str, time: &str) -> ParseResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(&format!("{date} {time}"), REPORT_TIMESTAMP_FORMAT)
}

/// Parses a `DD/MM/YYYY` day as typed by a user.
pub fn parse_day(value: &str) -> ParseResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DAY_FORMAT)
}

pub fn to_storage(timestamp: &NaiveDateTime) -> String {
    timestamp.format(STORAGE_TIMESTAMP_FORMAT).to_string()
}

pub fn parse_storage_date(value: &str) -> ParseResult<NaiveDate> {
    NaiveDate::parse_from_str(value, STORAGE_DATE_FORMAT)
}

pub fn parse_storage_time(value: &str) -> ParseResult<NaiveTime> {
    NaiveTime::parse_from_str(value, TIME_FORMAT)
}

pub fn format_day(day: &NaiveDate) -> String {
    day.format(DAY_FORMAT).to_string()
}

pub fn format_time(time: &NaiveTime) -> String {
    time.format(TIME_FORMAT).to_string()
}

pub fn start_of_day(day: NaiveDate) -> NaiveDateTime {
    day.and_time(NaiveTime::MIN)
}

/// Last whole second of `day`, the inclusive upper bound of a day-granular range.
pub fn end_of_day(day: NaiveDate) -> NaiveDateTime {
    start_of_day(day) + TimeDelta::seconds(LAST_SECOND_OF_DAY)
}
