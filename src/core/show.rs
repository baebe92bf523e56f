use crate::db::pool::DbPool;
use crate::db::queries::load_work_day_with_periods;
use crate::errors::{AppError, AppResult};
use crate::models::WorkDay;
use crate::utils::date::parse_date;
use crate::utils::formatting::{TITLE_DATE_FORMAT, format_date_time, format_duration, underline};
use crate::utils::table::{Column, Table};
use chrono::{DateTime, Local};
use std::io::Write;

/// Placeholder for the end of an open period.
const OPEN_END: &str = "-";

pub struct ShowLogic;

impl ShowLogic {
    /// Print the summary of the work day on `date` (`YYYY-MM-DD`, mandatory).
    pub fn apply(
        pool: &DbPool,
        out: &mut impl Write,
        now: DateTime<Local>,
        date: &str,
    ) -> AppResult<()> {
        let parsed = parse_date(date).ok_or_else(|| AppError::InvalidDate(date.to_string()))?;

        let Some(work_day) = load_work_day_with_periods(&pool.conn, &parsed)? else {
            writeln!(out, "No work day for {} yet.", date)?;
            return Ok(());
        };

        write!(out, "{}", render_work_day(&work_day, &now))?;
        Ok(())
    }
}

/// Summary block, then the period table when the day has periods.
pub fn render_work_day(work_day: &WorkDay, now: &DateTime<Local>) -> String {
    let title = underline(&work_day.date.format(TITLE_DATE_FORMAT).to_string());

    let mut out = format!(
        "{title}\n\
         \n\
         Work Day: \t\t\t\t{length}\n\
         Time Worked:\t\t\t{worked}\n\
         Time Remaining:\t\t{remaining}\n\
         Estimated Finish: {finish}\n\
         Note:\t\t\t\t\t\t\t{note}\n",
        length = format_duration(work_day.length()),
        worked = format_duration(work_day.time_worked()),
        remaining = format_duration(work_day.time_remaining()),
        finish = format_date_time(&work_day.estimated_finish(now)),
        note = work_day.note.as_deref().unwrap_or(""),
    );

    if !work_day.work_periods().is_empty() {
        out.push('\n');
        out.push_str(&render_periods(work_day));
    }

    out
}

fn render_periods(work_day: &WorkDay) -> String {
    let mut table = Table::new(vec![
        Column::new("ID"),
        Column::new("Start"),
        Column::new("End"),
        Column::new("Worked"),
        Column::new("Note"),
    ]);

    for wp in work_day.work_periods() {
        let end = wp
            .end_at
            .as_ref()
            .map(format_date_time)
            .unwrap_or_else(|| OPEN_END.to_string());

        table.add_row(vec![
            wp.id.to_string(),
            format_date_time(&wp.start_at),
            end,
            format_duration(wp.time_worked()),
            wp.note.clone().unwrap_or_default(),
        ]);
    }

    table.render()
}
