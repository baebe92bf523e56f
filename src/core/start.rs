use crate::core::{build_work_day, parse_length};
use crate::db::log::ttlog_lenient;
use crate::db::pool::DbPool;
use crate::db::queries::{create_work_day, create_work_period, load_work_day_with_periods};
use crate::errors::AppResult;
use crate::models::WorkPeriod;
use crate::utils::formatting::{format_date, format_date_time};
use crate::utils::time::parse_time_expr;
use chrono::{DateTime, Local};
use std::io::Write;
use tracing::info;

/// Arguments of the `start` command.
#[derive(Debug, Default, Clone)]
pub struct StartArgs {
    /// `HH:MM`, `1h30m`, `-15m`; now when absent
    pub time: Option<String>,
    /// Length of the work day, only used when the day is created here
    pub length: Option<String>,
    /// Note of the new work period
    pub note: Option<String>,
    /// Note of the work day, only used when the day is created here
    pub day_note: Option<String>,
}

pub struct StartLogic;

impl StartLogic {
    /// Open a new work period on today's work day, creating the day if needed.
    ///
    /// Nothing is written when the day already has an open period.
    pub fn apply(
        pool: &DbPool,
        out: &mut impl Write,
        now: DateTime<Local>,
        args: &StartArgs,
    ) -> AppResult<()> {
        let today = now.date_naive();

        let existing = load_work_day_with_periods(&pool.conn, &today)?;

        if let Some(wd) = &existing
            && wd.has_open_period()
        {
            info!(id = wd.id, "work day already has an open period");
            writeln!(out, "This work day already has an open work period.")?;
            return Ok(());
        }

        // resolve before any write so a bad time leaves the store untouched
        let start_at = parse_time_expr(args.time.as_deref().unwrap_or(""), &now)?;

        let (work_day, is_new) = match existing {
            Some(wd) => (wd, false),
            None => {
                // only a new day takes the length
                let length = parse_length(args.length.as_deref())?;
                let wd = build_work_day(today, length, args.day_note.as_deref());
                (create_work_day(&pool.conn, &wd)?, true)
            }
        };

        let mut period = WorkPeriod::new(&work_day, start_at);
        if let Some(note) = &args.note {
            period.set_note(note.as_str());
        }
        let period = create_work_period(&pool.conn, &period)?;

        ttlog_lenient(
            &pool.conn,
            "start",
            &format_date(&work_day.date),
            &format!(
                "Started work period #{} at {}",
                period.id,
                format_date_time(&period.start_at)
            ),
        );

        let qualifier = if is_new { "NEW " } else { "" };
        writeln!(
            out,
            "Started tracking time on {}work day #{} ({}).",
            qualifier,
            work_day.id,
            format_date(&work_day.date)
        )?;
        Ok(())
    }
}
