//! wh library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use tracing::{debug, warn};

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Db { .. } => cli::commands::db::handle(&cli.command, cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
        Commands::Add { .. } => cli::commands::add::handle(&cli.command, cfg),
        Commands::Start { .. } => cli::commands::start::handle(&cli.command, cfg),
        Commands::Stop { .. } => cli::commands::stop::handle(&cli.command, cfg),
        Commands::Show { .. } => cli::commands::show::handle(&cli.command, cfg),
    }
}

/// Commands that can rewrite the config file.
fn repairs_config(cmd: &Commands) -> bool {
    matches!(
        cmd,
        Commands::Init
            | Commands::Config {
                edit_config: true,
                ..
            }
    )
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ diagnostics on stderr
    utils::logging::enable_logging(cli.verbose);

    // 3️⃣ load config once; init and config --edit must still work on a broken file
    let mut cfg = match Config::load() {
        Ok(cfg) => cfg,
        Err(e) if repairs_config(&cli.command) => {
            warn!(error = %e, "unreadable configuration, using defaults");
            Config::default()
        }
        Err(e) => return Err(e),
    };

    // 4️⃣ command line override of the DB path
    let database = cli.db.as_deref().unwrap_or(&cfg.database);
    cfg.database = Config::resolve_db_path(database)
        .to_string_lossy()
        .to_string();
    debug!(database = %cfg.database, "configuration loaded");

    dispatch(&cli, &cfg)
}
