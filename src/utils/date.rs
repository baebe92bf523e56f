use crate::errors::{AppError, AppResult};
use crate::utils::formatting::DATE_FORMAT;
use chrono::{DateTime, Local, NaiveDate};
use regex::Regex;
use std::sync::LazyLock;

static DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid date regex"));

/// Strict `YYYY-MM-DD`: zero padding is required, `2023-8-1` is rejected.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    if !DATE_RE.is_match(s) {
        return None;
    }
    NaiveDate::parse_from_str(s, DATE_FORMAT).ok()
}

/// Date argument of `add`: a `YYYY-MM-DD` string, or the date of `now` when absent.
pub fn resolve_date(arg: Option<&str>, now: &DateTime<Local>) -> AppResult<NaiveDate> {
    match arg {
        Some(s) => parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string())),
        None => Ok(now.date_naive()),
    }
}
