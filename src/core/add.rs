use crate::core::{build_work_day, parse_length};
use crate::db::log::ttlog_lenient;
use crate::db::pool::DbPool;
use crate::db::queries::{create_work_day, get_work_day_by_date};
use crate::errors::AppResult;
use crate::utils::date::resolve_date;
use crate::utils::formatting::format_date;
use chrono::{DateTime, Local};
use std::io::Write;
use tracing::info;

/// Arguments of the `add` command, as typed by the user.
#[derive(Debug, Default, Clone)]
pub struct AddArgs {
    /// `YYYY-MM-DD`, today when absent
    pub date: Option<String>,
    /// Go-style duration, e.g. `4h30m`
    pub length: Option<String>,
    pub note: Option<String>,
}

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    pub fn apply(
        pool: &DbPool,
        out: &mut impl Write,
        now: DateTime<Local>,
        args: &AddArgs,
    ) -> AppResult<()> {
        let date = resolve_date(args.date.as_deref(), &now)?;
        let length = parse_length(args.length.as_deref())?;

        if get_work_day_by_date(&pool.conn, &date)?.is_some() {
            info!(%date, "work day already exists");
            writeln!(out, "Work day on {} already exists.", format_date(&date))?;
            return Ok(());
        }

        let work_day = build_work_day(date, length, args.note.as_deref());
        let work_day = create_work_day(&pool.conn, &work_day)?;

        ttlog_lenient(
            &pool.conn,
            "add",
            &format_date(&work_day.date),
            &format!("Added work day #{}", work_day.id),
        );

        writeln!(
            out,
            "Added work day #{} on {}",
            work_day.id,
            format_date(&work_day.date)
        )?;
        Ok(())
    }
}
