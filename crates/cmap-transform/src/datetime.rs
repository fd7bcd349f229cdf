//! Collection date/time parsing and ISO 8601 formatting.
//!
//! SRA submitters write collection dates in many shapes. Values are parsed
//! against an explicit format list and rendered as ISO 8601, preserving
//! partial precision (a bare `2011-03` stays `2011-03`). Unparseable values
//! leave the canonical `time` cell empty.

use chrono::{Datelike, NaiveDate, NaiveDateTime};

/// Precision detected in a source date/time value.
#[derive(Debug, Clone, PartialEq)]
pub enum TimePrecision {
    /// Full date and time of day.
    DateTime(NaiveDateTime),
    /// Date only.
    Date(NaiveDate),
    /// Year and month only.
    YearMonth { year: i32, month: u32 },
    /// Year only.
    Year(i32),
    /// Already valid ISO 8601; kept verbatim.
    Iso8601(String),
    /// Unparseable.
    Unknown(String),
}

impl TimePrecision {
    /// Render as ISO 8601, preserving the detected precision.
    pub fn to_iso8601(&self) -> String {
        match self {
            TimePrecision::DateTime(dt) => dt.format("%Y-%m-%dT%H:%M:%S").to_string(),
            TimePrecision::Date(date) => date.format("%Y-%m-%d").to_string(),
            TimePrecision::YearMonth { year, month } => format!("{year:04}-{month:02}"),
            TimePrecision::Year(year) => format!("{year:04}"),
            TimePrecision::Iso8601(value) | TimePrecision::Unknown(value) => value.clone(),
        }
    }
}

/// Normalize a source value to an ISO 8601 string, or `None` when it does
/// not parse as a date or date/time.
pub fn normalize_time(value: &str) -> Option<String> {
    match parse_time_precision(value) {
        TimePrecision::Unknown(_) => None,
        precision => Some(precision.to_iso8601()),
    }
}

/// Detect the precision of a source date/time value.
pub fn parse_time_precision(value: &str) -> TimePrecision {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return TimePrecision::Unknown(String::new());
    }
    if is_iso8601(trimmed) {
        return TimePrecision::Iso8601(trimmed.to_string());
    }
    if let Some(dt) = parse_datetime_formats(trimmed) {
        return TimePrecision::DateTime(dt);
    }
    if let Some(date) = parse_date_formats(trimmed) {
        return TimePrecision::Date(date);
    }
    if let Some(partial) = parse_partial(trimmed) {
        return partial;
    }
    TimePrecision::Unknown(trimmed.to_string())
}

/// Check for valid ISO 8601 shapes: `YYYY`, `YYYY-MM`, `YYYY-MM-DD`, and
/// the latter with `THH:MM[:SS[.fff]]`. Component ranges are validated, so
/// `2011-13-40` is not ISO.
fn is_iso8601(value: &str) -> bool {
    match value.len() {
        4 => value
            .parse::<i32>()
            .is_ok_and(|year| (1900..=2100).contains(&year)),
        7 => match value.split_once('-') {
            Some((year, month)) => {
                year.len() == 4
                    && year.parse::<i32>().is_ok()
                    && month
                        .parse::<u32>()
                        .is_ok_and(|month| (1..=12).contains(&month))
            }
            None => false,
        },
        10 => NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok(),
        16 => NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M").is_ok(),
        _ => NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f").is_ok(),
    }
}

fn parse_datetime_formats(value: &str) -> Option<NaiveDateTime> {
    const FORMATS: [&str; 9] = [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M:%SZ",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y/%m/%d %H:%M:%S",
        "%Y/%m/%d %H:%M",
        "%d-%b-%Y %H:%M:%S",
        "%m/%d/%Y %H:%M:%S",
        "%m/%d/%Y %H:%M",
    ];
    FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
}

fn parse_date_formats(value: &str) -> Option<NaiveDate> {
    const FORMATS: [&str; 10] = [
        "%Y-%m-%d",
        "%Y/%m/%d",
        "%d-%b-%Y",  // 12-Mar-2011
        "%d-%B-%Y",  // 12-March-2011
        "%m/%d/%Y",  // US: 03/12/2011
        "%d.%m.%Y",  // 12.03.2011
        "%Y%m%d",    // compact: 20110312
        "%b %d, %Y", // Mar 12, 2011
        "%d %b %Y",  // 12 Mar 2011
        "%d %B %Y",  // 12 March 2011
    ];
    FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
}

/// Year-month and year-only shapes that are not already ISO 8601.
fn parse_partial(value: &str) -> Option<TimePrecision> {
    let month_year_formats = ["%b %Y", "%B %Y", "%m/%Y"];
    for fmt in month_year_formats {
        if let Ok(date) = NaiveDate::parse_from_str(&format!("{value} 1"), &format!("{fmt} %d")) {
            return Some(TimePrecision::YearMonth {
                year: date.year(),
                month: date.month(),
            });
        }
    }
    None
}
