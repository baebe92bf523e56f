use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::migrate::run_pending_migrations;
use crate::db::pool::DbPool;
use crate::db::stats::{collect_db_info, print_db_info};
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, RED, RESET};
use rusqlite::Connection;
use std::io::{self, Write};

/// Database maintenance. Actions run in a fixed order: migrate, info, check, vacuum.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Db {
        migrate,
        check,
        vacuum,
        info,
    } = cmd
    else {
        return Ok(());
    };

    let pool = DbPool::new(&cfg.database)?;
    let out = &mut io::stdout().lock();

    // pending migrations are applied in any case; --migrate reports the count
    let applied = run_pending_migrations(&pool.conn)?;

    if *migrate {
        writeln!(out, "{CYAN}▶ Running migrations…{RESET}")?;
        writeln!(out, "{GREEN}✔ Migration completed ({applied} applied).{RESET}\n")?;
    }

    if *info {
        print_db_info(out, &collect_db_info(&pool.conn, &cfg.database)?)?;
    }

    if *check {
        integrity_check(&pool.conn, out)?;
    }

    if *vacuum {
        writeln!(out, "{CYAN}▶ Running VACUUM…{RESET}")?;
        pool.conn.execute_batch("VACUUM;")?;
        writeln!(out, "{GREEN}✔ Vacuum completed.{RESET}\n")?;
    }

    Ok(())
}

fn integrity_check(conn: &Connection, out: &mut impl Write) -> AppResult<()> {
    writeln!(out, "{CYAN}▶ Running integrity check…{RESET}")?;

    let result: String = conn.query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;
    if result == "ok" {
        writeln!(out, "{GREEN}✔ Integrity check passed.{RESET}\n")?;
    } else {
        writeln!(out, "{RED}✘ Integrity check failed:{RESET} {result}\n")?;
    }

    Ok(())
}
