use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::categories::{CategorySet, DEFAULT_CATEGORIES};
use crate::{ClientError, ClientResult};

pub const HOME_ENV: &str = "PENNYWISE_HOME";
pub const ENV_PREFIX: &str = "PENNYWISE";
pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const LEDGER_FILE_NAME: &str = "expenses.csv";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawSettings {
    ledger_path: Option<PathBuf>,
    categories: Vec<String>,
    log_level: String,
}

impl Default for RawSettings {
    fn default() -> Self {
        Self {
            ledger_path: None,
            categories: DEFAULT_CATEGORIES
                .iter()
                .map(|label| label.to_string())
                .collect(),
            log_level: "warn".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub home: PathBuf,
    pub ledger_path: PathBuf,
    pub categories: CategorySet,
    pub log_level: String,
}

/// Overrides that win over file and environment values.
#[derive(Debug, Clone, Default)]
pub struct SettingsOverrides {
    pub home: Option<PathBuf>,
    pub ledger_path: Option<PathBuf>,
}

impl Settings {
    pub fn load(overrides: &SettingsOverrides) -> ClientResult<Self> {
        let home = resolve_home(overrides.home.as_deref())?;
        let config_path = home.join(CONFIG_FILE_NAME);

        let raw: RawSettings = config::Config::builder()
            .add_source(config::File::from(config_path.as_path()).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("categories"),
            )
            .build()
            .and_then(|built| built.try_deserialize())
            .map_err(|error| ClientError::config_invalid(&error.to_string()))?;

        let ledger_path = match (&overrides.ledger_path, raw.ledger_path) {
            (Some(path), _) => absolutize(path)?,
            (None, Some(path)) if path.is_relative() => home.join(path),
            (None, Some(path)) => path,
            (None, None) => home.join(LEDGER_FILE_NAME),
        };

        Ok(Self {
            categories: CategorySet::new(raw.categories)?,
            log_level: raw.log_level,
            ledger_path,
            home,
        })
    }

    /// Settings rooted at `home` with defaults only; no file or environment lookups.
    pub fn with_home(home: &Path) -> Self {
        Self {
            home: home.to_path_buf(),
            ledger_path: home.join(LEDGER_FILE_NAME),
            categories: CategorySet::default(),
            log_level: "warn".to_string(),
        }
    }
}

pub fn resolve_home(home_override: Option<&Path>) -> ClientResult<PathBuf> {
    let candidate = match home_override {
        Some(path) => path.to_path_buf(),
        None => {
            if let Some(override_path) = std::env::var_os(HOME_ENV) {
                PathBuf::from(override_path)
            } else if let Some(home_path) = home::home_dir() {
                home_path.join(".pennywise")
            } else {
                return Err(ClientError::config_invalid(
                    "could not resolve a home directory; set PENNYWISE_HOME",
                ));
            }
        }
    };

    absolutize(&candidate)
}

pub fn ensure_parent_directory(path: &Path) -> ClientResult<()> {
    let Some(parent) = path.parent() else {
        return Ok(());
    };
    if parent.as_os_str().is_empty() {
        return Ok(());
    }
    fs::create_dir_all(parent).map_err(|error| ClientError::ledger_io_failed(path, &error.to_string()))
}

fn absolutize(path: &Path) -> ClientResult<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }

    std::env::current_dir()
        .map(|cwd| cwd.join(path))
        .map_err(|error| ClientError::config_invalid(&error.to_string()))
}
