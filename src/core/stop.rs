use crate::db::log::ttlog_lenient;
use crate::db::pool::DbPool;
use crate::db::queries::{get_open_work_period, get_work_day_by_date, update_work_period};
use crate::errors::AppResult;
use crate::utils::formatting::{format_date, format_date_time};
use crate::utils::time::parse_time_expr;
use chrono::{DateTime, Local};
use std::io::Write;
use tracing::{info, warn};

/// Arguments of the `stop` command.
#[derive(Debug, Default, Clone)]
pub struct StopArgs {
    /// `HH:MM`, `1h30m`, `-15m`; now when absent
    pub time: Option<String>,
    pub note: Option<String>,
}

pub struct StopLogic;

impl StopLogic {
    /// Close today's open work period. Prints nothing on success.
    pub fn apply(
        pool: &DbPool,
        out: &mut impl Write,
        now: DateTime<Local>,
        args: &StopArgs,
    ) -> AppResult<()> {
        let today = now.date_naive();

        let open = match get_work_day_by_date(&pool.conn, &today)? {
            Some(wd) => get_open_work_period(&pool.conn, &wd)?,
            None => None,
        };

        let Some(mut period) = open else {
            info!(%today, "no ongoing work period");
            writeln!(out, "Unable to find an ongoing work period.")?;
            return Ok(());
        };

        let end_at = parse_time_expr(args.time.as_deref().unwrap_or(""), &now)?;
        if end_at < period.start_at {
            warn!(
                id = period.id,
                start = %format_date_time(&period.start_at),
                end = %format_date_time(&end_at),
                "work period ends before it starts"
            );
        }

        period.set_end_at(Some(end_at));
        if let Some(note) = &args.note {
            period.set_note(note.as_str());
        }

        let period = update_work_period(&pool.conn, &period)?;

        ttlog_lenient(
            &pool.conn,
            "stop",
            &format_date(&today),
            &format!(
                "Stopped work period #{} at {}",
                period.id,
                format_date_time(&end_at)
            ),
        );

        Ok(())
    }
}
