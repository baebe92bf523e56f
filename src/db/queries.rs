use crate::errors::{AppError, AppResult};
use crate::models::{WorkDay, WorkPeriod};
use crate::utils::formatting::{DATE_FORMAT, format_date};
use chrono::{DateTime, Local, NaiveDate};
use rusqlite::types::Type;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};
use tracing::debug;

const WORK_DAY_COLUMNS: &str = "id, date, length_mins, note, created_at, updated_at";
const WORK_PERIOD_COLUMNS: &str =
    "id, work_day_id, start_at, end_at, note, created_at, updated_at";

fn to_db_timestamp(dt: &DateTime<Local>) -> String {
    dt.to_rfc3339()
}

fn conversion_failure(column: &str, row: &Row, err: AppError) -> rusqlite::Error {
    let idx = row.as_ref().column_index(column).unwrap_or(0);
    rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(err))
}

fn get_date(row: &Row, column: &str) -> Result<NaiveDate> {
    let raw: String = row.get(column)?;
    NaiveDate::parse_from_str(&raw, DATE_FORMAT)
        .map_err(|_| conversion_failure(column, row, AppError::InvalidDate(raw.clone())))
}

fn get_timestamp(row: &Row, column: &str) -> Result<DateTime<Local>> {
    let raw: String = row.get(column)?;
    DateTime::parse_from_rfc3339(&raw)
        .map(|dt| dt.with_timezone(&Local))
        .map_err(|_| conversion_failure(column, row, AppError::InvalidTime(raw.clone())))
}

fn get_optional_timestamp(row: &Row, column: &str) -> Result<Option<DateTime<Local>>> {
    let raw: Option<String> = row.get(column)?;
    match raw {
        Some(_) => get_timestamp(row, column).map(Some),
        None => Ok(None),
    }
}

pub fn map_work_day(row: &Row) -> Result<WorkDay> {
    let mut wd = WorkDay::new(get_date(row, "date")?);
    wd.id = row.get("id")?;
    wd.length_mins = row.get("length_mins")?;
    wd.note = row.get("note")?;
    wd.created_at = Some(get_timestamp(row, "created_at")?);
    wd.updated_at = Some(get_timestamp(row, "updated_at")?);
    Ok(wd)
}

pub fn map_work_period(row: &Row) -> Result<WorkPeriod> {
    Ok(WorkPeriod {
        id: row.get("id")?,
        work_day_id: row.get("work_day_id")?,
        start_at: get_timestamp(row, "start_at")?,
        end_at: get_optional_timestamp(row, "end_at")?,
        note: row.get("note")?,
        created_at: Some(get_timestamp(row, "created_at")?),
        updated_at: Some(get_timestamp(row, "updated_at")?),
    })
}

// ---------------------------
// Work days
// ---------------------------

/// Insert a work day, stamping created/updated with the current time.
///
/// A second day on the same date is refused by the unique index on `date`.
pub fn create_work_day(conn: &Connection, work_day: &WorkDay) -> AppResult<WorkDay> {
    let now = Local::now();

    conn.execute(
        "INSERT INTO work_days (date, length_mins, note, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            format_date(&work_day.date),
            work_day.length_mins,
            work_day.note,
            to_db_timestamp(&now),
            to_db_timestamp(&now),
        ],
    )?;

    let mut created = work_day.clone();
    created.id = conn.last_insert_rowid();
    created.created_at = Some(now);
    created.updated_at = Some(now);

    debug!(id = created.id, date = %created.date, "created work day");
    Ok(created)
}

/// `None` when no work day exists on `date`.
pub fn get_work_day_by_date(conn: &Connection, date: &NaiveDate) -> AppResult<Option<WorkDay>> {
    let sql = format!("SELECT {WORK_DAY_COLUMNS} FROM work_days WHERE date = ?1");

    let wd = conn
        .query_row(&sql, [format_date(date)], map_work_day)
        .optional()?;

    Ok(wd)
}

/// Work day on `date` with its periods attached.
pub fn load_work_day_with_periods(
    conn: &Connection,
    date: &NaiveDate,
) -> AppResult<Option<WorkDay>> {
    let Some(mut wd) = get_work_day_by_date(conn, date)? else {
        return Ok(None);
    };

    let periods = get_work_periods(conn, &wd)?;
    wd.set_work_periods(periods);
    Ok(Some(wd))
}

pub fn get_work_day_count(conn: &Connection) -> AppResult<i64> {
    let count = conn.query_row("SELECT COUNT(*) FROM work_days", [], |row| row.get(0))?;
    Ok(count)
}

// ---------------------------
// Work periods
// ---------------------------

pub fn create_work_period(conn: &Connection, period: &WorkPeriod) -> AppResult<WorkPeriod> {
    let now = Local::now();

    conn.execute(
        "INSERT INTO work_periods (work_day_id, start_at, end_at, note, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            period.work_day_id,
            to_db_timestamp(&period.start_at),
            period.end_at.as_ref().map(to_db_timestamp),
            period.note,
            to_db_timestamp(&now),
            to_db_timestamp(&now),
        ],
    )?;

    let mut created = period.clone();
    created.id = conn.last_insert_rowid();
    created.created_at = Some(now);
    created.updated_at = Some(now);

    debug!(id = created.id, work_day_id = created.work_day_id, "created work period");
    Ok(created)
}

/// All periods of `work_day`, in insertion order.
pub fn get_work_periods(conn: &Connection, work_day: &WorkDay) -> AppResult<Vec<WorkPeriod>> {
    let sql = format!(
        "SELECT {WORK_PERIOD_COLUMNS} FROM work_periods
         WHERE work_day_id = ?1
         ORDER BY id ASC"
    );
    let mut stmt = conn.prepare(&sql)?;

    let rows = stmt.query_map([work_day.id], map_work_period)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// The ongoing period of `work_day`, if any. The oldest one wins should
/// several exist.
pub fn get_open_work_period(
    conn: &Connection,
    work_day: &WorkDay,
) -> AppResult<Option<WorkPeriod>> {
    let sql = format!(
        "SELECT {WORK_PERIOD_COLUMNS} FROM work_periods
         WHERE work_day_id = ?1 AND end_at IS NULL
         ORDER BY id ASC
         LIMIT 1"
    );

    let wp = conn
        .query_row(&sql, [work_day.id], map_work_period)
        .optional()?;

    Ok(wp)
}

/// Persist start/end/note of an existing period and refresh `updated_at`.
pub fn update_work_period(conn: &Connection, period: &WorkPeriod) -> AppResult<WorkPeriod> {
    let now = Local::now();

    let changed = conn.execute(
        "UPDATE work_periods
         SET start_at = ?1, end_at = ?2, note = ?3, updated_at = ?4
         WHERE id = ?5",
        params![
            to_db_timestamp(&period.start_at),
            period.end_at.as_ref().map(to_db_timestamp),
            period.note,
            to_db_timestamp(&now),
            period.id,
        ],
    )?;

    if changed == 0 {
        return Err(AppError::Db(rusqlite::Error::QueryReturnedNoRows));
    }

    let mut updated = period.clone();
    updated.updated_at = Some(now);

    debug!(id = updated.id, "updated work period");
    Ok(updated)
}

pub fn get_work_period_count(conn: &Connection) -> AppResult<i64> {
    let count = conn.query_row("SELECT COUNT(*) FROM work_periods", [], |row| row.get(0))?;
    Ok(count)
}
