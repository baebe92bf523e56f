use crate::config::Config;
use crate::errors::{AppError, AppResult};
use std::io::Write;
use std::path::Path;
use std::process::Command;
use tracing::warn;

pub struct ConfigLogic;

impl ConfigLogic {
    pub fn print(cfg: &Config, out: &mut impl Write) -> AppResult<()> {
        writeln!(out, "📄 Current configuration:\n")?;
        writeln!(out, "{}", serde_yaml::to_string(cfg)?)?;
        Ok(())
    }

    /// Open the config file in `editor`, `$EDITOR`/`$VISUAL`, or a platform default.
    /// When the requested editor fails the default one is tried once.
    pub fn edit(path: &Path, editor: Option<&str>) -> AppResult<String> {
        let default_editor = std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            });

        let requested = editor.map(str::to_string).unwrap_or(default_editor.clone());

        match Command::new(&requested).arg(path).status() {
            Ok(s) if s.success() => return Ok(requested),
            _ => warn!(editor = %requested, fallback = %default_editor, "editor failed"),
        }

        match Command::new(&default_editor).arg(path).status() {
            Ok(s) if s.success() => Ok(default_editor),
            Ok(s) => Err(AppError::Config(format!(
                "editor '{}' exited with {}",
                default_editor, s
            ))),
            Err(e) => Err(AppError::Config(format!(
                "failed to launch editor '{}': {}",
                default_editor, e
            ))),
        }
    }
}
