//! SQLite connection wrapper (lightweight for CLI usage).

use crate::db::migrate::run_pending_migrations;
use crate::errors::AppResult;
use rusqlite::Connection;
use std::fs;
use std::path::Path;
use tracing::debug;

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    /// Open the database file without touching the schema.
    /// The parent directory is created when missing.
    pub fn new(path: &str) -> AppResult<Self> {
        let path = Path::new(path);
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }

        let conn = Connection::open(path)?;
        Ok(Self { conn })
    }

    /// Open the database file, enable foreign keys and apply pending migrations.
    pub fn open(path: &str) -> AppResult<Self> {
        debug!(path, "opening database");
        let pool = Self::new(path)?;
        prepare(&pool.conn)?;
        Ok(pool)
    }

    /// Fully initialized in-memory database.
    pub fn in_memory() -> AppResult<Self> {
        let conn = Connection::open_in_memory()?;
        prepare(&conn)?;
        Ok(Self { conn })
    }
}

fn prepare(conn: &Connection) -> AppResult<()> {
    // work_periods.work_day_id references work_days.id
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    run_pending_migrations(conn)?;
    Ok(())
}
