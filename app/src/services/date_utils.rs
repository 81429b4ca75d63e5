//! Date helpers for `YYYY-MM-DD` bill dates.
//!
//! Ordering compares the raw strings: for this format lexicographic order is
//! chronological order, so list sorting never needs to parse.

use chrono::{Datelike, NaiveDate};
use std::cmp::Ordering;

/// True when `s` is a real calendar date in `YYYY-MM-DD` form.
pub fn is_valid_date_string(s: &str) -> bool {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").is_ok()
}

/// Most-recent-first ordering on raw `YYYY-MM-DD` strings.
pub fn compare_dates_descending(a: &str, b: &str) -> Ordering {
    b.cmp(a)
}

/// Format a `YYYY-MM-DD` date for display, e.g. "April 4, 2004".
/// `None` when the date does not parse; callers decide the fallback.
pub fn format_date_for_display(date: &str) -> Option<String> {
    let parsed = NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()?;
    Some(format!(
        "{} {}, {}",
        month_name(parsed.month()),
        parsed.day(),
        parsed.year()
    ))
}

fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "January",
    }
}
