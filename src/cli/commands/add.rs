use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::{AddArgs, AddLogic};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use chrono::Local;
use std::io;

/// Add a new work day.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add { date, length, note } = cmd {
        let args = AddArgs {
            date: date.clone(),
            length: length
                .clone()
                .or_else(|| Some(cfg.default_day_length.clone())),
            note: note.clone(),
        };

        let pool = DbPool::open(&cfg.database)?;
        AddLogic::apply(&pool, &mut io::stdout().lock(), Local::now(), &args)?;
    }

    Ok(())
}
