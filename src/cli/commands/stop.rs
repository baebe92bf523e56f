use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::stop::{StopArgs, StopLogic};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use chrono::Local;
use std::io;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Stop { time, note } = cmd {
        let args = StopArgs {
            time: time.clone(),
            note: note.clone(),
        };

        let pool = DbPool::open(&cfg.database)?;
        StopLogic::apply(&pool, &mut io::stdout().lock(), Local::now(), &args)?;
    }

    Ok(())
}
