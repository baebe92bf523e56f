use crate::db::queries::{get_work_day_count, get_work_period_count};
use crate::errors::{AppError, AppResult};
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use crate::utils::formatting::{DATE_FORMAT, format_date};
use chrono::NaiveDate;
use rusqlite::Connection;
use std::fs;
use std::io::Write;

/// Summary figures for `db --info`.
#[derive(Debug, Clone, PartialEq)]
pub struct DbInfo {
    pub path: String,
    pub file_size: u64,
    pub work_days: i64,
    pub work_periods: i64,
    pub first_date: Option<NaiveDate>,
    pub last_date: Option<NaiveDate>,
}

pub fn collect_db_info(conn: &Connection, db_path: &str) -> AppResult<DbInfo> {
    // in-memory databases have no file
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);

    let (first, last): (Option<String>, Option<String>) =
        conn.query_row("SELECT MIN(date), MAX(date) FROM work_days", [], |row| {
            Ok((row.get(0)?, row.get(1)?))
        })?;

    Ok(DbInfo {
        path: db_path.to_string(),
        file_size,
        work_days: get_work_day_count(conn)?,
        work_periods: get_work_period_count(conn)?,
        first_date: first.as_deref().map(parse_date).transpose()?,
        last_date: last.as_deref().map(parse_date).transpose()?,
    })
}

pub fn print_db_info(out: &mut impl Write, info: &DbInfo) -> AppResult<()> {
    let file_mb = (info.file_size as f64) / (1024.0 * 1024.0);
    let missing = format!("{GREY}--{RESET}");
    let fmt = |d: &Option<NaiveDate>| d.as_ref().map(format_date).unwrap_or(missing.clone());

    writeln!(out)?;
    writeln!(out, "{CYAN}• File:{RESET} {YELLOW}{}{RESET}", info.path)?;
    writeln!(out, "{CYAN}• Size:{RESET} {:.2} MB", file_mb)?;
    writeln!(out, "{CYAN}• Work days:{RESET} {GREEN}{}{RESET}", info.work_days)?;
    writeln!(out, "{CYAN}• Work periods:{RESET} {GREEN}{}{RESET}", info.work_periods)?;
    writeln!(out, "{CYAN}• Date range:{RESET}")?;
    writeln!(out, "    from: {}", fmt(&info.first_date))?;
    writeln!(out, "    to:   {}", fmt(&info.last_date))?;

    if info.work_days > 0 {
        let avg = info.work_periods as f64 / info.work_days as f64;
        writeln!(out, "{CYAN}• Average periods/day:{RESET} {:.2}", avg)?;
    }

    writeln!(out)?;
    Ok(())
}

fn parse_date(date_str: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(date_str, DATE_FORMAT)
        .map_err(|_| AppError::InvalidDate(date_str.to_string()))
}
