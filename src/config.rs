//! Configuration file support for pyazo.
//!
//! Settings are read from `~/.config/pyazo/config.toml` under a `[pyazo]`
//! table with the keys `url`, `token`, `util`, and `output_dir`. If no config
//! file exists, sensible defaults are used automatically.

use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

fn default_url() -> String {
    "https://pyazo.example.com/api".to_string()
}

/// User settings, loaded once at startup and immutable afterwards.
///
/// # Example TOML
/// ```toml
/// [pyazo]
/// url = "https://pyazo.example.com/api"
/// token = "my-api-token"
/// util = "maim"
/// output_dir = "/home/me/Pictures/screenshots"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the pyazo server API.
    #[serde(default = "default_url")]
    pub url: String,

    /// Bearer token for authenticated requests. An empty token is sent as-is.
    #[serde(default)]
    pub token: String,

    /// Explicit screenshot utility name. Empty means auto-detect.
    #[serde(default)]
    pub util: String,

    /// Directory for locally saved copies. Empty means use the platform
    /// Pictures directory.
    #[serde(default)]
    pub output_dir: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            url: default_url(),
            token: String::new(),
            util: String::new(),
            output_dir: String::new(),
        }
    }
}

/// Wrapper matching the `[pyazo]` table in the config file.
#[derive(Debug, Default, Serialize, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    pyazo: Option<Config>,
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g.
    /// HOME not set).
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("pyazo");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from file, or returns defaults if not found.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        let config_str = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let config = Self::parse(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    fn parse(config_str: &str) -> Result<Self> {
        let file: ConfigFile = toml::from_str(config_str)?;
        Ok(file.pyazo.unwrap_or_default())
    }

    /// Explicitly configured utility name, if any.
    pub fn util(&self) -> Option<&str> {
        if self.util.is_empty() {
            None
        } else {
            Some(&self.util)
        }
    }

    /// Configured output directory for local copies, if any.
    pub fn output_dir(&self) -> Option<&str> {
        if self.output_dir.is_empty() {
            None
        } else {
            Some(&self.output_dir)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_file_is_empty() {
        let config = Config::parse("").unwrap();
        assert_eq!(config.url, "https://pyazo.example.com/api");
        assert_eq!(config.token, "");
        assert!(config.util().is_none());
        assert!(config.output_dir().is_none());
    }

    #[test]
    fn reads_pyazo_table() {
        let config = Config::parse(
            r#"
            [pyazo]
            url = "https://img.example.org"
            token = "secret"
            util = "maim"
            output_dir = "/tmp/shots"
            "#,
        )
        .unwrap();

        assert_eq!(config.url, "https://img.example.org");
        assert_eq!(config.token, "secret");
        assert_eq!(config.util(), Some("maim"));
        assert_eq!(config.output_dir(), Some("/tmp/shots"));
    }

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let config = Config::parse("[pyazo]\ntoken = \"t\"\n").unwrap();
        assert_eq!(config.url, "https://pyazo.example.com/api");
        assert_eq!(config.token, "t");
        assert!(config.util().is_none());
    }

    #[test]
    fn invalid_toml_is_an_error() {
        assert!(Config::parse("[pyazo\nurl =").is_err());
    }
}
