//! Command operations. Each takes the open store, an output sink and the
//! current time, and reports normal outcomes as text.

pub mod add;
pub mod config;
pub mod log;
pub mod show;
pub mod start;
pub mod stop;

use crate::errors::AppResult;
use crate::models::WorkDay;
use crate::utils::time::parse_go_duration;
use chrono::{Duration, NaiveDate};

/// Optional `--length` argument as a duration.
pub(crate) fn parse_length(length: Option<&str>) -> AppResult<Option<Duration>> {
    length.map(parse_go_duration).transpose()
}

/// Unsaved work day with the user's length and note overrides applied.
pub(crate) fn build_work_day(
    date: NaiveDate,
    length: Option<Duration>,
    note: Option<&str>,
) -> WorkDay {
    let mut wd = WorkDay::new(date);
    if let Some(length) = length {
        wd.set_length(length);
    }
    if let Some(note) = note {
        wd.set_note(note);
    }
    wd
}
