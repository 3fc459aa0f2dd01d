use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use serde_json::Error as SerdeError;
use time::{macros::format_description, Date};

use crate::domain::variant::NEW_RELEASE_WINDOW_DAYS;

const APP_QUALIFIER: &str = "com";
const APP_ORG: &str = "SoleAndAnkle";
const APP_NAME: &str = "ShoeCard";

/// User-editable settings read from `config.json` in the platform config dir.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Days a release is shown as "Just Released".
    pub new_release_window_days: u16,
    /// Pins "today" (`YYYY-MM-DD`) instead of the system date.
    pub reference_date: Option<String>,
    /// Catalog JSON to load instead of the bundled one.
    pub catalog_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            new_release_window_days: NEW_RELEASE_WINDOW_DAYS,
            reference_date: None,
            catalog_path: None,
        }
    }
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.new_release_window_days == 0 {
            return Err(ConfigError::InvalidWindow);
        }
        self.pinned_date()?;
        Ok(())
    }

    pub fn pinned_date(&self) -> Result<Option<Date>, ConfigError> {
        self.reference_date
            .as_deref()
            .map(|raw| {
                Date::parse(raw.trim(), format_description!("[year]-[month]-[day]"))
                    .map_err(|_| ConfigError::InvalidReferenceDate(raw.to_string()))
            })
            .transpose()
    }

    /// The pinned date if configured, else `fallback`.
    pub fn today_or(&self, fallback: Date) -> Date {
        self.pinned_date().ok().flatten().unwrap_or(fallback)
    }
}

fn config_file() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join("config.json"))
}

/// Loads the config, falling back to defaults when no file exists.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    match config_file() {
        Some(path) => load_config_from(&path),
        None => {
            tracing::debug!("No config directory available; using defaults");
            Ok(AppConfig::default())
        }
    }
}

pub fn load_config_from(path: &Path) -> Result<AppConfig, ConfigError> {
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "Config file not found; using defaults");
            return Ok(AppConfig::default());
        }
        Err(err) => return Err(err.into()),
    };
    parse_config(&data)
}

pub fn parse_config(data: &str) -> Result<AppConfig, ConfigError> {
    let config: AppConfig = serde_json::from_str(data)?;
    config.validate()?;
    Ok(config)
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("new_release_window_days must be at least 1")]
    InvalidWindow,
    #[error("reference_date {0:?} is not a YYYY-MM-DD date")]
    InvalidReferenceDate(String),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serde(#[from] SerdeError),
}
