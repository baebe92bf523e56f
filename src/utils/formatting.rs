//! Formatting utilities used for CLI outputs.

use chrono::{DateTime, Duration, NaiveDate, TimeZone};
use std::fmt::Display;
use unicode_width::UnicodeWidthStr;

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";
pub const TITLE_DATE_FORMAT: &str = "%B %d, %Y (%a)";

pub fn format_date(date: &NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub fn format_date_time<Tz: TimeZone>(dt: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    dt.format(DATE_TIME_FORMAT).to_string()
}

/// Go-style duration truncated to whole minutes: `7h30m`, `6h0m`, `45m`, `-1h15m`.
pub fn format_duration(d: Duration) -> String {
    let total = d.num_minutes();
    let sign = if total < 0 { "-" } else { "" };
    let abs = total.abs();
    let hours = abs / 60;
    let minutes = abs % 60;

    if hours > 0 {
        format!("{sign}{hours}h{minutes}m")
    } else {
        format!("{sign}{minutes}m")
    }
}

/// Title followed by a line of `=` as wide as the title.
pub fn underline(title: &str) -> String {
    format!("{}\n{}", title, "=".repeat(title.width()))
}

pub fn pad_right(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(fill))
}
