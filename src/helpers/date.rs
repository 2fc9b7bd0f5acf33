//! Date helper functions

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use std::fmt::Write as _;

/// Parse an ISO-8601 date, with or without a time part
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();

    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(d);
    }

    let formats = [
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%dT%H:%M",
    ];
    for fmt in formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.date());
        }
    }

    // Keep the calendar date as written, ignoring the offset
    DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.date_naive())
}

/// Format an ISO date using a Moment.js-compatible format string
///
/// # Examples
/// ```ignore
/// format_date("2024-01-05", "MMMM D, YYYY") // -> Some("January 5, 2024")
/// ```
pub fn format_date(iso: &str, format: &str) -> Option<String> {
    let date = parse_date(iso)?;
    let chrono_format = moment_to_chrono_format(format);

    let mut out = String::new();
    write!(out, "{}", date.format(&chrono_format)).ok()?;
    Some(out)
}

/// Format a date for display, falling back to the raw text when unparseable
pub fn display_date(iso: &str, format: &str) -> String {
    format_date(iso, format).unwrap_or_else(|| {
        tracing::warn!("Unrecognized date {:?}, showing it as written", iso);
        iso.to_string()
    })
}

/// Convert Moment.js format to chrono format
fn moment_to_chrono_format(format: &str) -> String {
    // Longest patterns first within each category
    let replacements = [
        // Year
        ("YYYY", "%Y"),
        ("YY", "%y"),
        // Month
        ("MMMM", "%B"),
        ("MMM", "%b"),
        ("MM", "%m"),
        // Day of month
        ("DDDD", "%j"),
        ("DD", "%d"),
        ("D", "%-d"),
        // Day of week
        ("dddd", "%A"),
        ("ddd", "%a"),
    ];

    // Literal `%` would otherwise start a chrono specifier
    let mut result = format.replace('%', "%%");

    for (from, to) in replacements {
        result = result.replace(from, to);
    }

    result
}
