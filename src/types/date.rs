use crate::types::ParseError;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATE_TIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M"
];
const YEAR_DIGITS: usize = 4;

/// Parses a transaction date into a calendar date and time.
///
/// Accepts full dates, `YYYY-MM` and `YYYY` (first day, at midnight), timestamps with a `T`
/// or space separator with or without seconds, and RFC 3339. Offsets are normalized to UTC.
pub fn parse_date(value: &str) -> Result<NaiveDateTime, ParseError> {
    let value = value.trim();

    if let Ok(date) = NaiveDate::parse_from_str(value, DATE_FORMAT) {
        return Ok(date.and_time(NaiveTime::MIN));
    }

    for format in DATE_TIME_FORMATS {
        if let Ok(date_time) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(date_time);
        }
    }

    if let Ok(date_time) = DateTime::parse_from_rfc3339(value) {
        return Ok(date_time.naive_utc());
    }

    parse_partial_date(value)
        .map(|date| date.and_time(NaiveTime::MIN))
        .ok_or_else(|| ParseError::InvalidDate(value.to_string()))
}

fn parse_partial_date(value: &str) -> Option<NaiveDate> {
    let (year, month) = match value.split_once('-') {
        Some((year, month)) => (year, Some(month)),
        None => (value, None)
    };

    if year.len() != YEAR_DIGITS || !year.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }

    let month = match month {
        Some(month) if month.len() == 2 && month.bytes().all(|byte| byte.is_ascii_digit()) => month.parse().ok()?,
        Some(_) => return None,
        None => 1
    };

    NaiveDate::from_ymd_opt(year.parse().ok()?, month, 1)
}
