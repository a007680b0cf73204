//! Configuration handling for the checklist CLI
//!
//! Configuration is stored in `~/.config/checklist/config.toml` (or the
//! platform equivalent), overridable with `$CHECKLIST_CONFIG`.

use std::fs;
use std::path::{Path, PathBuf};

use directories::{BaseDirs, ProjectDirs};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable pointing at an alternate config file
pub const CONFIG_ENV: &str = "CHECKLIST_CONFIG";

/// Store file name used when nothing else is configured
pub const DEFAULT_FILE_NAME: &str = ".checklist.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read configuration {}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse configuration {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },

    #[error("Could not determine home directory")]
    NoHomeDir,
}

/// Output format for commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// User configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Checklist file used when `--file` is not given
    pub file: Option<PathBuf>,

    /// Output format used when `--format` is not given
    pub format: Option<OutputFormat>,
}

impl Config {
    /// Returns the config file location: `$CHECKLIST_CONFIG`, else the
    /// platform config directory
    pub fn default_path() -> Option<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Some(PathBuf::from(path));
        }

        ProjectDirs::from("dev", "checklist", "checklist")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Loads configuration from the default location
    pub fn load() -> Result<Self, ConfigError> {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Loads configuration from `path`; a missing file yields defaults
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Resolves the checklist file: the explicit path if given, else the
    /// configured one, else `~/.checklist.json`
    pub fn store_path(&self, explicit: Option<&Path>) -> Result<PathBuf, ConfigError> {
        match explicit.or(self.file.as_deref()) {
            Some(path) => expand_home(path),
            None => Ok(home_dir()?.join(DEFAULT_FILE_NAME)),
        }
    }

    /// Resolves the output format: the explicit one if given, else the configured one
    pub fn output_format(&self, explicit: Option<OutputFormat>) -> OutputFormat {
        explicit.or(self.format).unwrap_or_default()
    }
}

fn home_dir() -> Result<PathBuf, ConfigError> {
    BaseDirs::new()
        .map(|dirs| dirs.home_dir().to_path_buf())
        .ok_or(ConfigError::NoHomeDir)
}

/// Expands a leading `~` to the home directory
pub fn expand_home(path: &Path) -> Result<PathBuf, ConfigError> {
    match path.strip_prefix("~") {
        Ok(rest) => Ok(home_dir()?.join(rest)),
        Err(_) => Ok(path.to_path_buf()),
    }
}
