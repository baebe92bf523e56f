use crate::errors::{AppError, AppResult};
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, Result, params};
use tracing::{debug, info};

/// A named schema change, applied at most once per database.
struct Migration {
    version: &'static str,
    description: &'static str,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: "20230811_0001_create_work_days",
        description: "Created work_days table with unique date index",
        sql: r#"
        CREATE TABLE IF NOT EXISTS work_days (
            id           INTEGER PRIMARY KEY,
            date         DATETIME NOT NULL,
            length_mins  INTEGER NOT NULL,
            note         TEXT,
            created_at   DATETIME NOT NULL,
            updated_at   DATETIME NOT NULL
        );

        CREATE UNIQUE INDEX IF NOT EXISTS idx_work_days_date ON work_days(date);
        "#,
    },
    Migration {
        version: "20230812_0002_create_work_periods",
        description: "Created work_periods table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS work_periods (
            id           INTEGER PRIMARY KEY,
            work_day_id  INTEGER NOT NULL,
            start_at     DATETIME NOT NULL,
            end_at       DATETIME,
            note         TEXT,
            created_at   DATETIME NOT NULL,
            updated_at   DATETIME NOT NULL,

            FOREIGN KEY(work_day_id) REFERENCES work_days(id)
        );
        "#,
    },
    Migration {
        version: "20230902_0003_index_work_periods_day",
        description: "Indexed work_periods by work day",
        sql: r#"
        CREATE INDEX IF NOT EXISTS idx_work_periods_day ON work_periods(work_day_id);
        "#,
    },
];

/// Ensure that the `log` table exists. It also records applied migrations.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn apply(conn: &Connection, migration: &Migration) -> Result<()> {
    let tx = conn.unchecked_transaction()?;

    tx.execute_batch(migration.sql)?;
    tx.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (?1, 'migration_applied', ?2, ?3)",
        params![
            Local::now().to_rfc3339(),
            migration.version,
            migration.description
        ],
    )?;

    tx.commit()
}

/// Public entry point: run all pending migrations and return how many were applied.
///
/// Invoked whenever a [`DbPool`](crate::db::DbPool) is opened.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<usize> {
    ensure_log_table(conn)?;

    let mut applied = 0;
    for migration in MIGRATIONS {
        if is_applied(conn, migration.version)? {
            debug!(version = migration.version, "migration already applied");
            continue;
        }

        apply(conn, migration)
            .map_err(|e| AppError::Migration(format!("{}: {}", migration.version, e)))?;

        info!(version = migration.version, "{}", migration.description);
        applied += 1;
    }

    Ok(applied)
}
