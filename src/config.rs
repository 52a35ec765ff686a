//! Configuration management for footprint-calc
//!
//! Config stored at: ~/.config/footprint-calc/config.json
//!
//! The Gemini API key itself is never part of the configuration; only the
//! name of the environment variable it is read from is stored here.

use crate::cli::OutputFormat;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Gemini model used for analysis chat
    #[serde(default = "default_model")]
    pub model: String,

    /// Environment variable the API key is read from
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,

    /// Default output format (json, table)
    #[serde(default = "default_output_format")]
    pub output_format: OutputFormat,

    /// Request timeout for chat API calls, in seconds
    #[serde(default = "default_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_api_key_env() -> String {
    "GEMINI_API_KEY".to_string()
}

fn default_output_format() -> OutputFormat {
    OutputFormat::Table
}

fn default_timeout_secs() -> u64 {
    90
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model: default_model(),
            api_key_env: default_api_key_env(),
            output_format: default_output_format(),
            request_timeout_secs: default_timeout_secs(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| Error::Config("could not determine config directory".to_string()))?
            .join("footprint-calc");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;

        // Ensure directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, content)?;
        Ok(())
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Footprint Calc Configuration")?;
        writeln!(f, "============================")?;
        writeln!(f)?;
        writeln!(f, "Model:           {}", self.model)?;
        writeln!(f, "API key env var: {}", self.api_key_env)?;
        writeln!(f, "Output format:   {}", self.output_format)?;
        writeln!(f, "Timeout:         {}s", self.request_timeout_secs)?;

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:     {}", path.display())?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.model, "gemini-2.5-flash");
        assert_eq!(config.api_key_env, "GEMINI_API_KEY");
        assert_eq!(config.output_format, OutputFormat::Table);
        assert_eq!(config.request_timeout_secs, 90);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: Config = serde_json::from_str(r#"{"model": "gemini-2.0-flash"}"#).unwrap();
        assert_eq!(config.model, "gemini-2.0-flash");
        assert_eq!(config.api_key_env, "GEMINI_API_KEY");
        assert_eq!(config.request_timeout_secs, 90);
    }

    #[test]
    fn test_config_round_trip() {
        let mut config = Config::default();
        config.output_format = OutputFormat::Json;
        config.request_timeout_secs = 30;

        let json = serde_json::to_string(&config).unwrap();
        let loaded: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded.output_format, OutputFormat::Json);
        assert_eq!(loaded.request_timeout_secs, 30);
    }

    #[test]
    fn test_display_never_shows_a_key() {
        // Only the env var name may appear, never a key value
        std::env::set_var("FOOTPRINT_TEST_KEY", "secret-value");
        let mut config = Config::default();
        config.api_key_env = "FOOTPRINT_TEST_KEY".to_string();

        let shown = config.to_string();
        assert!(shown.contains("FOOTPRINT_TEST_KEY"));
        assert!(!shown.contains("secret-value"));
        std::env::remove_var("FOOTPRINT_TEST_KEY");
    }
}
