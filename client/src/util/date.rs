//! Display formatting for post dates.
//!
//! Backend timestamps are RFC 3339 (`2024-01-05T10:30:00.000Z`) or bare
//! `YYYY-MM-DD` dates. The calendar date is taken as written; no local
//! time-zone shift is applied.

#[cfg(test)]
#[path = "date_test.rs"]
mod date_test;

use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime};

/// Shown when a post has no usable date.
pub const MISSING_DATE: &str = "No Date Available";

fn parse_date(raw: &str) -> Option<Date> {
    let raw = raw.trim();
    if let Ok(ts) = OffsetDateTime::parse(raw, &Rfc3339) {
        return Some(ts.date());
    }
    Date::parse(raw, format_description!("[year]-[month]-[day]")).ok()
}

/// `"January 05, 2024"` style, or [`MISSING_DATE`].
pub fn format_long_date(raw: Option<&str>) -> String {
    raw.and_then(parse_date)
        .and_then(|d| d.format(format_description!("[month repr:long] [day], [year]")).ok())
        .unwrap_or_else(|| MISSING_DATE.to_owned())
}

/// `"1/5/2024"` style, or [`MISSING_DATE`].
pub fn format_short_date(raw: Option<&str>) -> String {
    raw.and_then(parse_date)
        .and_then(|d| {
            d.format(format_description!("[month padding:none]/[day padding:none]/[year]"))
                .ok()
        })
        .unwrap_or_else(|| MISSING_DATE.to_owned())
}
