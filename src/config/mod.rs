use crate::errors::AppResult;
use crate::export::DEFAULT_EXPORT_FILE;
use crate::ui::messages::warning;
use crate::ui::status::DEFAULT_STATUS_TTL_SECS;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_export_file")]
    pub export_file: String,
    #[serde(default = "default_status_ttl")]
    pub status_ttl_secs: i64,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_export_file() -> String {
    DEFAULT_EXPORT_FILE.to_string()
}
fn default_status_ttl() -> i64 {
    DEFAULT_STATUS_TTL_SECS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            export_file: default_export_file(),
            status_ttl_secs: default_status_ttl(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rtimesheet")
        } else {
            let home = dirs::home_dir()
                .or_else(|| env::var("HOME").ok().map(PathBuf::from))
                .unwrap_or_else(|| PathBuf::from("."));
            home.join(".rtimesheet")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rtimesheet.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rtimesheet.sqlite")
    }

    /// Load configuration from the standard file, or defaults if missing.
    pub fn load() -> Self {
        Self::load_from(&Self::config_file())
    }

    /// Load configuration from `path`. A missing file gives defaults; an
    /// unreadable or malformed one gives defaults and a warning.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Config::default();
        }

        match fs::read_to_string(path)
            .map_err(crate::errors::AppError::from)
            .and_then(|content| Ok(serde_yaml::from_str::<Config>(&content)?))
        {
            Ok(cfg) => cfg,
            Err(e) => {
                warning(format!(
                    "Could not read configuration '{}' ({e}); using defaults.",
                    path.display()
                ));
                Config::default()
            }
        }
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Create the config directory and file, pointing at `custom_db` when
    /// given. In test mode the config file is left alone.
    /// Returns the database path that was configured.
    pub fn init_all(custom_db: Option<&str>, is_test: bool) -> AppResult<String> {
        let dir = Self::config_dir();

        let db_path = custom_db
            .map(crate::utils::path::expand_tilde)
            .unwrap_or_else(Self::database_file);

        if !is_test {
            fs::create_dir_all(&dir)?;
            let config = Config {
                database: db_path.to_string_lossy().to_string(),
                ..Config::default()
            };
            let yaml = config.to_yaml()?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
        }

        if let Some(parent) = db_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        Ok(db_path.to_string_lossy().to_string())
    }
}
