//! Time utilities: time expressions ("", HH:MM, 1h30m, -45m), Go-style
//! durations, midnight and minute truncation.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Duration, NaiveTime, TimeZone, Timelike};
use regex::Regex;
use std::sync::LazyLock;

static EXACT_TIME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{2}:\d{2}$").expect("valid exact time regex"));

static RELATIVE_TIME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(-?\d+h(\d+m)?|-?\d+m)$").expect("valid relative time regex")
});

/// Resolve a user supplied time expression against `now`.
///
/// - `""` is `now` itself
/// - `HH:MM` is a clock time today (hours and minutes are not range checked,
///   `99:99` lands 99h99m after midnight)
/// - `[-]NhNm` / `[-]Nm` is an offset from `now`
///
/// Anything else is rejected with [`AppError::InvalidTime`].
pub fn parse_time_expr<Tz: TimeZone>(expr: &str, now: &DateTime<Tz>) -> AppResult<DateTime<Tz>> {
    if expr.is_empty() {
        return Ok(now.clone());
    }

    if EXACT_TIME_RE.is_match(expr) {
        let offset = parse_exact_time(expr)?;
        return Ok(local_midnight(now) + offset);
    }

    if RELATIVE_TIME_RE.is_match(expr) {
        let offset =
            parse_go_duration(expr).map_err(|_| AppError::InvalidTime(expr.to_string()))?;
        return Ok(now.clone() + offset);
    }

    Err(AppError::InvalidTime(expr.to_string()))
}

/// `HH:MM` as an offset from midnight.
fn parse_exact_time(expr: &str) -> AppResult<Duration> {
    let invalid = || AppError::InvalidTime(expr.to_string());

    let (hours, minutes) = expr.split_once(':').ok_or_else(invalid)?;
    let hours: i64 = hours.parse().map_err(|_| invalid())?;
    let minutes: i64 = minutes.parse().map_err(|_| invalid())?;

    Ok(Duration::minutes(hours * 60 + minutes))
}

/// Start of the calendar day of `now`, in the same zone.
///
/// When midnight does not exist (DST gap), the earliest instant of the day is used.
pub fn local_midnight<Tz: TimeZone>(now: &DateTime<Tz>) -> DateTime<Tz> {
    let naive_midnight = now.date_naive().and_time(NaiveTime::MIN);

    now.timezone()
        .from_local_datetime(&naive_midnight)
        .earliest()
        .unwrap_or_else(|| now.clone() - now.time().signed_duration_since(NaiveTime::MIN))
}

/// Drop seconds and sub-second precision.
pub fn truncate_to_minute<Tz: TimeZone>(dt: &DateTime<Tz>) -> DateTime<Tz> {
    dt.with_second(0)
        .and_then(|d| d.with_nanosecond(0))
        .unwrap_or_else(|| dt.clone())
}

/// Parse a Go `time.ParseDuration` style string: an optional sign followed by
/// one or more `<decimal><unit>` groups (`ns`, `us`, `µs`, `ms`, `s`, `m`, `h`).
///
/// `"0"` is accepted on its own.
pub fn parse_go_duration(input: &str) -> AppResult<Duration> {
    let invalid = || AppError::InvalidDuration(input.to_string());

    let (negative, mut rest) = match input.strip_prefix('-') {
        Some(r) => (true, r),
        None => (false, input.strip_prefix('+').unwrap_or(input)),
    };

    if rest == "0" {
        return Ok(Duration::zero());
    }
    if rest.is_empty() {
        return Err(invalid());
    }

    let mut total_nanos: i128 = 0;

    while !rest.is_empty() {
        let number_end = rest
            .find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .ok_or_else(invalid)?;
        let number = &rest[..number_end];
        rest = &rest[number_end..];

        let unit_end = rest
            .find(|c: char| c.is_ascii_digit() || c == '.')
            .unwrap_or(rest.len());
        let unit = &rest[..unit_end];
        rest = &rest[unit_end..];

        let unit_nanos: i128 = match unit {
            "ns" => 1,
            "us" | "µs" | "μs" => 1_000,
            "ms" => 1_000_000,
            "s" => 1_000_000_000,
            "m" => 60 * 1_000_000_000,
            "h" => 3_600 * 1_000_000_000,
            _ => return Err(invalid()),
        };

        let (int_part, frac_part) = number.split_once('.').unwrap_or((number, ""));
        if (int_part.is_empty() && frac_part.is_empty()) || frac_part.contains('.') {
            return Err(invalid());
        }

        let int_value: i128 = if int_part.is_empty() {
            0
        } else {
            int_part.parse().map_err(|_| invalid())?
        };

        let mut group = int_value.checked_mul(unit_nanos).ok_or_else(invalid)?;

        if !frac_part.is_empty() {
            // precision beyond nanoseconds is irrelevant
            let digits = &frac_part[..frac_part.len().min(18)];
            let frac_value: i128 = digits.parse().map_err(|_| invalid())?;
            let scale = 10_i128.pow(digits.len() as u32);
            group += frac_value * unit_nanos / scale;
        }

        total_nanos = total_nanos.checked_add(group).ok_or_else(invalid)?;
    }

    if negative {
        total_nanos = -total_nanos;
    }

    let nanos = i64::try_from(total_nanos).map_err(|_| invalid())?;
    Ok(Duration::nanoseconds(nanos))
}
