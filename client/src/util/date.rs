//! Timestamp display.
//!
//! The API emits ISO 8601 strings, with or without an offset. Anything that
//! does not parse is shown verbatim.

#[cfg(test)]
#[path = "date_test.rs"]
mod date_test;

use chrono::{DateTime, NaiveDate, NaiveDateTime};

fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_utc().date());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.date());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// "January 2, 2025".
pub fn long_date(raw: &str) -> String {
    parse_date(raw).map_or_else(|| raw.to_owned(), |d| d.format("%B %-d, %Y").to_string())
}

/// "1/2/2025", for cards and comments.
pub fn short_date(raw: &str) -> String {
    parse_date(raw).map_or_else(|| raw.to_owned(), |d| d.format("%-m/%-d/%Y").to_string())
}
