//! Human-readable rendering of API dates.
//!
//! The API sends ISO-8601 dates, sometimes as full timestamps. Only the
//! calendar date is displayed, as `MMMM d, yyyy` (e.g. "June 1, 2025").

#[cfg(test)]
#[path = "date_format_test.rs"]
mod date_format_test;

use time::Date;
use time::macros::format_description;

/// Parse the leading `YYYY-MM-DD` of an ISO-8601 string.
pub fn parse_iso_date(raw: &str) -> Option<Date> {
    let day = raw.trim().get(..10)?;
    Date::parse(day, format_description!("[year]-[month]-[day]")).ok()
}

/// Long-form date, or `None` when `raw` is not an ISO date.
pub fn format_long_date(raw: &str) -> Option<String> {
    parse_iso_date(raw)?
        .format(format_description!("[month repr:long] [day padding:none], [year]"))
        .ok()
}

/// Long-form date, falling back to the raw text when it cannot be parsed.
pub fn display_date(raw: &str) -> String {
    format_long_date(raw).unwrap_or_else(|| raw.trim().to_owned())
}
