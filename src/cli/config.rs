//! Configuration management for vaxassist
//!
//! Provides TOML-based configuration with defaults and validation.
//! Location: ~/.vaxassist/config.toml

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use crate::errors::{AdvisorError, Result};

const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Complete configuration for vaxassist
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub repl: ReplConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Terminal rendering configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub color_output: bool,
    pub show_disclaimer: bool,
    pub show_risk_factors: bool,
}

/// Interactive questionnaire configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReplConfig {
    pub prompt: String,
    pub history_file: String,
    pub save_history: bool,
}

/// Log output configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            color_output: true,
            show_disclaimer: true,
            show_risk_factors: false,
        }
    }
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            prompt: "you> ".to_string(),
            history_file: "~/.vaxassist/history".to_string(),
            save_history: true,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from file or use defaults
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        if let Some(config_path) = path {
            Self::load_from_file(&config_path)
        } else {
            Self::load_default()
        }
    }

    /// Load configuration from specific file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| AdvisorError::ConfigError(format!("Failed to read config: {}", e)))?;

        let config: Config = toml::from_str(&contents)
            .map_err(|e| AdvisorError::ConfigError(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Load default configuration from standard location or use built-in defaults
    pub fn load_default() -> Result<Self> {
        if let Some(config_path) = Self::default_path() {
            if config_path.exists() {
                return Self::load_from_file(&config_path);
            }
        }

        Ok(Config::default())
    }

    /// Standard config location, if a home directory is known
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".vaxassist").join("config.toml"))
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.repl.prompt.trim().is_empty() {
            return Err(AdvisorError::ConfigError(
                "repl.prompt must not be empty".to_string()
            ));
        }

        if self.repl.save_history && self.repl.history_file.trim().is_empty() {
            return Err(AdvisorError::ConfigError(
                "repl.history_file is required when save_history is enabled".to_string()
            ));
        }

        if !LOG_LEVELS.contains(&self.logging.level.as_str()) {
            return Err(AdvisorError::ConfigError(
                format!("Invalid log level: {}", self.logging.level)
            ));
        }

        Ok(())
    }

    /// Save configuration to file
    pub fn save(&self, path: &Path) -> Result<()> {
        let contents = self.to_toml()?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| AdvisorError::ConfigError(format!("Failed to create config dir: {}", e)))?;
        }

        std::fs::write(path, contents)
            .map_err(|e| AdvisorError::ConfigError(format!("Failed to write config: {}", e)))?;

        Ok(())
    }

    /// Pretty TOML rendering
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| AdvisorError::ConfigError(format!("Failed to serialize config: {}", e)))
    }

    /// Expand tilde in paths
    pub fn expand_path(path: &str) -> PathBuf {
        if let Some(rest) = path.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(rest);
            }
        }
        PathBuf::from(path)
    }

    /// REPL history file, if history is enabled
    pub fn history_path(&self) -> Option<PathBuf> {
        if self.repl.save_history {
            Some(Self::expand_path(&self.repl.history_file))
        } else {
            None
        }
    }
}
