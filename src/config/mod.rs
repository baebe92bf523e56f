use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    /// Go-style duration used when `--length` is not given.
    #[serde(default = "default_day_length")]
    pub default_day_length: String,
}

fn default_day_length() -> String {
    "7h30m".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            default_day_length: default_day_length(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("wh")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".wh")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("wh.conf")
    }

    /// Return the default path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("wh.sqlite")
    }

    /// `~/` is expanded; other relative names live in the config directory.
    pub fn resolve_db_path(name: &str) -> PathBuf {
        let p = expand_tilde(name);
        if p.is_absolute() {
            p
        } else {
            Self::config_dir().join(p)
        }
    }

    /// Load the configuration file, or return defaults if it does not exist.
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {}", path.display(), e)))?;
        let cfg = serde_yaml::from_str(&content)?;
        Ok(cfg)
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(path, serde_yaml::to_string(self)?)?;
        Ok(())
    }

    /// Create the config directory and, unless `is_test`, write the config file.
    /// Settings of an existing, readable file are kept; `custom_db` replaces the
    /// database path.
    pub fn init_all(custom_db: Option<&str>, is_test: bool) -> AppResult<Self> {
        fs::create_dir_all(Self::config_dir())?;

        // a broken file is replaced by defaults
        let mut config = Self::load().unwrap_or_else(|e| {
            warn!(error = %e, "unreadable configuration, rewriting with defaults");
            Self::default()
        });
        if let Some(name) = custom_db {
            config.database = Self::resolve_db_path(name).to_string_lossy().to_string();
        }

        if !is_test {
            config.save_to(&Self::config_file())?;
        }

        Ok(config)
    }
}
