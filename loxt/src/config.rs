//! Configuration module for the loxt CLI.
//!
//! This module handles loading configuration settings for the loxt
//! application.

use dirs::{config_dir, home_dir};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::commands::common::OutputFormat;
use crate::error::{LoxtError, Result};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "loxt.toml";

/// Application configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Global verbose setting.
    #[serde(default)]
    pub verbose: bool,

    /// Token dump configuration.
    #[serde(default)]
    pub tokens: TokensConfig,
}

/// Options for the `tokens` command.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TokensConfig {
    /// Default output format for token dumps.
    #[serde(default)]
    pub format: OutputFormat,
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Searches for configuration in the following order:
    /// 1. Current directory
    /// 2. User's home directory
    /// 3. System configuration directory
    ///
    /// Returns the default configuration if no config file is found.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(LoxtError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| LoxtError::Config(format!("Failed to parse configuration: {}", e)))?;

        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Check for config in current directory.
    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    /// Check for config in home directory.
    fn check_home_config() -> Option<PathBuf> {
        home_dir()
            .map(|dir| dir.join(".config").join("loxt").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Check for config in system config directory.
    fn check_system_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("loxt").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Find the configuration file in standard locations.
    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config()
            .or_else(Self::check_home_config)
            .or_else(Self::check_system_config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(!config.verbose);
        assert_eq!(config.tokens.format, OutputFormat::Text);
    }

    #[test]
    fn test_config_load_full_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("loxt.toml");

        let original = Config {
            verbose: true,
            tokens: TokensConfig {
                format: OutputFormat::Json,
            },
        };
        std::fs::write(&config_path, toml::to_string(&original).unwrap()).unwrap();

        let loaded = Config::load_from_path(&config_path).unwrap();
        assert_eq!(original, loaded);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("loxt.toml");
        std::fs::write(&config_path, "[tokens]\nformat = \"kinds\"\n").unwrap();

        let config = Config::load_from_path(&config_path).unwrap();
        assert!(!config.verbose);
        assert_eq!(config.tokens.format, OutputFormat::Kinds);
    }

    #[test]
    fn test_invalid_format_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("loxt.toml");
        std::fs::write(&config_path, "[tokens]\nformat = \"yaml\"\n").unwrap();

        let result = Config::load_from_path(&config_path);
        assert!(matches!(result, Err(LoxtError::Config(_))));
    }

    #[test]
    fn test_load_from_nonexistent_path() {
        let result = Config::load_from_path(Path::new("/nonexistent/path/loxt.toml"));
        assert!(matches!(result, Err(LoxtError::Config(_))));
    }
}
