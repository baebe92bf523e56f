use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::show::ShowLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use chrono::Local;
use std::io;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { date } = cmd {
        let pool = DbPool::open(&cfg.database)?;
        ShowLogic::apply(&pool, &mut io::stdout().lock(), Local::now(), date)?;
    }

    Ok(())
}
