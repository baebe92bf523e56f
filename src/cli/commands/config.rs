use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::config::ConfigLogic;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use std::io;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = cmd
    {
        if *print_config {
            ConfigLogic::print(cfg, &mut io::stdout().lock())?;
        }

        if *edit_config {
            let path = Config::config_file();
            if !path.exists() {
                info(format!("Creating {} with defaults", path.display()));
                cfg.save_to(&path)?;
            }

            let used = ConfigLogic::edit(&path, editor.as_deref())?;
            success(format!(
                "Configuration file edited successfully using '{}'",
                used
            ));
        }
    }

    Ok(())
}
