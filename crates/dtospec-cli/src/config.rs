//! Configuration management for the CLI
//!
//! This module handles loading configuration from:
//! - Default values
//! - Configuration files (YAML/JSON/TOML, chosen by extension)
//! - The `DTOSPEC_CONFIG` environment variable and `--config` flag

use crate::cli::OutputFormat;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File name stem looked up in the working directory
const PROJECT_CONFIG_STEM: &str = ".dtospec";

/// Extensions tried, in order, for every lookup location
const CONFIG_EXTENSIONS: [&str; 4] = ["yaml", "yml", "json", "toml"];

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Output settings
    pub output: OutputConfig,

    /// Logging settings
    pub logging: LoggingConfig,
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Default output format
    pub format: OutputFormat,

    /// Use colored output by default
    pub color: bool,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// Log level used when no `-v` flag is given (trace, debug, info, warn, error)
    pub level: String,

    /// Log format (compact, full, json)
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Human,
            color: true,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: "compact".to_string(),
        }
    }
}

/// Serialization format of a config file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FileFormat {
    Yaml,
    Json,
    Toml,
}

impl FileFormat {
    fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|s| s.to_str()) {
            Some("yaml") | Some("yml") => FileFormat::Yaml,
            Some("toml") => FileFormat::Toml,
            _ => FileFormat::Json,
        }
    }
}

/// A loaded configuration and the file it came from, if any
#[derive(Debug, Clone, Default)]
pub struct LoadedConfig {
    pub config: Config,
    pub source: Option<PathBuf>,
}

impl Config {
    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = std::fs::read_to_string(path)?;

        let config = match FileFormat::from_path(path) {
            FileFormat::Yaml => serde_yaml::from_str(&content)?,
            FileFormat::Toml => toml::from_str(&content).map_err(|e| {
                Error::config(format!("Failed to parse {}: {}", path.display(), e))
            })?,
            FileFormat::Json => serde_json::from_str(&content)?,
        };

        Ok(config)
    }

    /// Load configuration from an explicit file or the default locations
    ///
    /// An explicit file must exist. Otherwise the first existing default
    /// location wins, and built-in defaults apply when none exists.
    pub fn load_with_file(file: Option<&Path>) -> Result<LoadedConfig> {
        if let Some(path) = file {
            return Ok(LoadedConfig {
                config: Self::from_file(path)?,
                source: Some(path.to_path_buf()),
            });
        }

        let cwd = std::env::current_dir()?;
        Self::load_from(&Self::default_config_paths(&cwd))
    }

    /// Load the first existing file among `candidates`
    pub fn load_from(candidates: &[PathBuf]) -> Result<LoadedConfig> {
        match candidates.iter().find(|path| path.is_file()) {
            Some(path) => Ok(LoadedConfig {
                config: Self::from_file(path)?,
                source: Some(path.clone()),
            }),
            None => Ok(LoadedConfig::default()),
        }
    }

    /// Default configuration file paths to check, in priority order
    pub fn default_config_paths(cwd: &Path) -> Vec<PathBuf> {
        let mut paths: Vec<PathBuf> = CONFIG_EXTENSIONS
            .iter()
            .map(|ext| cwd.join(format!("{}.{}", PROJECT_CONFIG_STEM, ext)))
            .collect();

        if let Some(config_dir) = dirs::config_dir() {
            let dtospec_dir = config_dir.join("dtospec");
            paths.extend(
                CONFIG_EXTENSIONS
                    .iter()
                    .map(|ext| dtospec_dir.join(format!("config.{}", ext))),
            );
        }

        paths
    }

    /// Default location of the user configuration file
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("dtospec").join("config.toml"))
    }

    /// Render configuration as TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| Error::config(format!("Failed to serialize as TOML: {}", e)))
    }

    /// Save configuration to a file, format chosen by extension
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = match FileFormat::from_path(path) {
            FileFormat::Yaml => serde_yaml::to_string(self)?,
            FileFormat::Toml => self.to_toml()?,
            FileFormat::Json => serde_json::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)?;
        Ok(())
    }
}
