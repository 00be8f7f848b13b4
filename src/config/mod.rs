//! Configuration Module
//!
//! Handles application configuration loading, validation, and management.
//! No user-entered request data ever lands here — only ambient settings.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Contact book configuration
    #[serde(default)]
    pub contacts: ContactsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log to file
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Contact book settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ContactsConfig {
    /// Path to the contact book TOML file. Defaults to
    /// `<config-dir>/forgetme/contacts.toml` when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. Default values
    /// 2. System config: ~/.config/forgetme/config.toml
    /// 3. Local config: ./forgetme.toml
    /// 4. Environment variables
    pub fn load() -> Result<Self> {
        tracing::debug!("Loading configuration...");

        let mut config = Self::default();

        if let Some(system_config_path) = Self::system_config_path()
            && system_config_path.exists()
        {
            tracing::debug!("Loading system config from: {:?}", system_config_path);
            config = Self::merge_from_file(config, &system_config_path)?;
        }

        let local_config_path = Self::local_config_path();
        if local_config_path.exists() {
            tracing::debug!("Loading local config from: {:?}", local_config_path);
            config = Self::merge_from_file(config, &local_config_path)?;
        }

        config = Self::apply_env_overrides(config);

        tracing::debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Load configuration from a specific file path
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!("Loading configuration from custom path: {:?}", path);

        let mut config = Self::default();

        if path.exists() {
            config = Self::merge_from_file(config, path)?;
        } else {
            anyhow::bail!("Config file not found: {:?}", path);
        }

        config = Self::apply_env_overrides(config);
        Ok(config)
    }

    /// Get the system config path: ~/.config/forgetme/config.toml
    pub fn system_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("forgetme").join("config.toml"))
    }

    /// Get the local config path: ./forgetme.toml
    fn local_config_path() -> PathBuf {
        PathBuf::from("./forgetme.toml")
    }

    /// Load and merge configuration from a TOML file
    fn merge_from_file(_base: Self, path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {path:?}"))?;

        let file_config: Self = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {path:?}"))?;

        Ok(file_config)
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut config: Self) -> Self {
        if let Ok(log_level) = std::env::var("FORGETME_LOG_LEVEL") {
            config.logging.level = log_level;
        }

        if let Ok(contacts_path) = std::env::var("FORGETME_CONTACTS_PATH") {
            config.contacts.path = Some(PathBuf::from(contacts_path));
        }

        config
    }

    /// Resolved contact book path (configured or default location).
    pub fn contacts_path(&self) -> Option<PathBuf> {
        self.contacts
            .path
            .clone()
            .or_else(crate::contacts::default_contacts_path)
    }

    /// Validate the loaded configuration.
    pub fn validate(&self) -> Result<()> {
        match self.logging.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => Ok(()),
            other => anyhow::bail!("Unknown log level: {other}"),
        }
    }

    /// Save configuration to a TOML file
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {parent:?}"))?;
        }
        let contents =
            toml::to_string_pretty(self).context("Failed to serialize configuration")?;
        fs::write(path, contents)
            .with_context(|| format!("Failed to write config file: {path:?}"))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.logging.level, "info");
        assert!(config.contacts.path.is_none());
    }

    #[test]
    fn test_validate_rejects_unknown_level() {
        let config = Config {
            logging: LoggingConfig {
                level: "loud".to_string(),
                file: None,
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_save_and_reload_round_trip() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("config.toml");

        let config = Config {
            logging: LoggingConfig {
                level: "debug".to_string(),
                file: None,
            },
            contacts: ContactsConfig {
                path: Some(PathBuf::from("/tmp/contacts.toml")),
            },
        };
        config.save(&path).expect("save");

        let loaded = Config::load_from_path(&path).expect("load");
        assert_eq!(loaded.logging.level, "debug");
        assert_eq!(loaded.contacts.path, Some(PathBuf::from("/tmp/contacts.toml")));
    }

    #[test]
    fn test_load_missing_path_is_error() {
        assert!(Config::load_from_path("/definitely/not/here.toml").is_err());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("config.toml");
        fs::write(&path, "[contacts]\npath = \"/x/contacts.toml\"\n").expect("write");

        let loaded = Config::load_from_path(&path).expect("load");
        assert_eq!(loaded.logging.level, "info");
        assert_eq!(loaded.contacts.path, Some(PathBuf::from("/x/contacts.toml")));
    }
}
