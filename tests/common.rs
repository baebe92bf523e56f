#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{DateTime, Local, NaiveDate, TimeZone};
use tempfile::TempDir;
use wh::db::pool::DbPool;

/// Binary under test, with HOME pointed at `home` so no real config is touched.
pub fn wh(home: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("wh");
    cmd.env("HOME", home.path())
        .env("APPDATA", home.path())
        .env_remove("WH_LOG");
    cmd
}

/// Fresh temp dir plus a database path inside it.
pub fn setup_test_db() -> (TempDir, String) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let db_path = dir.path().join("wh.sqlite").to_string_lossy().to_string();
    (dir, db_path)
}

/// Fully migrated in-memory store.
pub fn memory_pool() -> DbPool {
    DbPool::in_memory().expect("open in-memory db")
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

/// Local wall clock time; test dates avoid DST transitions.
pub fn local(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Local> {
    Local
        .with_ymd_and_hms(y, m, d, h, min, s)
        .single()
        .expect("unambiguous local time")
}

pub fn output(buf: Vec<u8>) -> String {
    String::from_utf8(buf).expect("utf-8 output")
}
