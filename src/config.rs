use std::env;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::draft::CommitDraft;
use crate::error::{AppError, AppResult};

const CONFIG_DIR_ENV: &str = "CMB_CONFIG_DIR";
const DEFAULT_TYPE_ENV: &str = "CMB_DEFAULT_TYPE";
const DEFAULT_SCOPE_ENV: &str = "CMB_DEFAULT_SCOPE";
const CONFIG_FILE_NAME: &str = "config.json";

/// Settings persisted between runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredConfig {
    #[serde(default)]
    pub default_type: Option<String>,
    #[serde(default)]
    pub default_scope: Option<String>,
}

impl StoredConfig {
    pub fn load() -> AppResult<Self> {
        let path = config_file_path()?;
        match fs::read_to_string(&path) {
            Ok(contents) => serde_json::from_str(&contents).map_err(|err| {
                AppError::Configuration(format!("invalid config file {}: {err}", path.display()))
            }),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(AppError::Io(err)),
        }
    }

    pub fn save(&self) -> AppResult<()> {
        let path = config_file_path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
}

/// Effective configuration: stored values with environment overrides applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    pub default_type: Option<String>,
    pub default_scope: Option<String>,
}

impl AppConfig {
    pub fn load() -> AppResult<Self> {
        let stored = StoredConfig::load()?;
        Ok(Self::resolve(stored, |key| env::var(key).ok()))
    }

    pub fn resolve(stored: StoredConfig, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let pick = |key: &str, fallback: Option<String>| {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .or(fallback)
        };
        let config = Self {
            default_type: pick(DEFAULT_TYPE_ENV, stored.default_type),
            default_scope: pick(DEFAULT_SCOPE_ENV, stored.default_scope),
        };
        debug!(?config, "configuration resolved");
        config
    }

    /// Initial form values.
    pub fn initial_draft(&self) -> CommitDraft {
        CommitDraft {
            kind: self.default_type.clone().unwrap_or_default(),
            scope: self.default_scope.clone().unwrap_or_default(),
            ..CommitDraft::default()
        }
    }
}

pub fn config_directory() -> AppResult<PathBuf> {
    if let Ok(dir) = env::var(CONFIG_DIR_ENV) {
        return Ok(PathBuf::from(dir));
    }
    dirs::config_dir()
        .map(|dir| dir.join("cmb"))
        .ok_or_else(|| AppError::Configuration("could not determine config directory".to_string()))
}

pub fn config_file_path() -> AppResult<PathBuf> {
    Ok(config_directory()?.join(CONFIG_FILE_NAME))
}
