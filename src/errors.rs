//! Error type shared by every layer of wh.
//!
//! Normal outcomes such as "work day already exists" or "no open period" are
//! not errors: commands report them as output text.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // user input, rejected before anything is written
    #[error("Invalid date format: {0} (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("Invalid time format: {0} (expected HH:MM, 1h30m, -45m, ...)")]
    InvalidTime(String),

    #[error("Invalid duration: {0} (expected e.g. 4h30m or 90m)")]
    InvalidDuration(String),

    // storage
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    /// Carries the version of the failing migration.
    #[error("Database migration error: {0}")]
    Migration(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // configuration file
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),
}

pub type AppResult<T> = Result<T, AppError>;
