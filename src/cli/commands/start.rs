use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::start::{StartArgs, StartLogic};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use chrono::Local;
use std::io;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Start {
        time,
        length,
        note,
        day_note,
    } = cmd
    {
        let args = StartArgs {
            time: time.clone(),
            length: length
                .clone()
                .or_else(|| Some(cfg.default_day_length.clone())),
            note: note.clone(),
            day_note: day_note.clone(),
        };

        let pool = DbPool::open(&cfg.database)?;
        StartLogic::apply(&pool, &mut io::stdout().lock(), Local::now(), &args)?;
    }

    Ok(())
}
