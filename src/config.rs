//! Configuration management for ChatGenius
//!
//! This module handles loading, parsing, validating, and managing
//! configuration from files, environment variables, and CLI overrides.

use crate::error::{ChatGeniusError, Result};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure for ChatGenius
///
/// Holds everything the CLI needs: where snapshots live, how the simulated
/// assistant behaves, and UI defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Snapshot storage configuration
    #[serde(default)]
    pub storage: StorageConfig,

    /// Simulated assistant behavior
    #[serde(default)]
    pub assistant: AssistantConfig,

    /// UI defaults
    #[serde(default)]
    pub ui: UiConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage: StorageConfig::default(),
            assistant: AssistantConfig::default(),
            ui: UiConfig::default(),
        }
    }
}

/// Snapshot storage configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding the snapshot files
    ///
    /// When unset, the platform data directory is used. The
    /// `CHATGENIUS_DATA_DIR` environment variable (or `--data-dir`)
    /// takes precedence over both.
    #[serde(default)]
    pub data_dir: Option<String>,
}

/// Simulated assistant behavior configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssistantConfig {
    /// Lower bound of the simulated thinking delay (milliseconds)
    #[serde(default = "default_min_delay_ms")]
    pub min_delay_ms: u64,

    /// Upper bound of the simulated thinking delay (milliseconds)
    #[serde(default = "default_max_delay_ms")]
    pub max_delay_ms: u64,

    /// Canned reply strings the assistant picks from uniformly at random
    #[serde(default = "default_replies")]
    pub replies: Vec<String>,
}

fn default_min_delay_ms() -> u64 {
    1000
}

fn default_max_delay_ms() -> u64 {
    3000
}

fn default_replies() -> Vec<String> {
    vec![
        "I understand your question. Let me help you with that.".to_string(),
        "That's an interesting point. Here's what I think...".to_string(),
        "I'd be happy to assist you with that!".to_string(),
        "Based on what you've told me, I can suggest...".to_string(),
        "Great question! Let me provide some insights.".to_string(),
    ]
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            min_delay_ms: default_min_delay_ms(),
            max_delay_ms: default_max_delay_ms(),
            replies: default_replies(),
        }
    }
}

/// UI defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Enable colored terminal output
    ///
    /// The persisted dark-mode preference overrides this at runtime.
    #[serde(default = "default_color")]
    pub color: bool,
}

fn default_color() -> bool {
    true
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            color: default_color(),
        }
    }
}

impl Config {
    /// Load configuration from file with environment and CLI overrides
    ///
    /// # Arguments
    ///
    /// * `path` - Path to configuration file
    /// * `cli` - CLI arguments for overrides
    ///
    /// # Errors
    ///
    /// Returns error if the file exists but cannot be read or parsed
    pub fn load(path: &str, cli: &crate::cli::Cli) -> Result<Self> {
        let mut config = if Path::new(path).exists() {
            Self::from_file(path)?
        } else {
            tracing::debug!("Config file not found at {}, using defaults", path);
            Self::default()
        };

        config.apply_env_vars();
        config.apply_cli_overrides(cli);

        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(ChatGeniusError::Io)
            .with_context(|| format!("Failed to read config file {}", path))?;
        let config = serde_yaml::from_str(&contents)
            .map_err(ChatGeniusError::Yaml)
            .with_context(|| format!("Failed to parse config file {}", path))?;
        Ok(config)
    }

    fn apply_env_vars(&mut self) {
        if let Ok(data_dir) = std::env::var("CHATGENIUS_DATA_DIR") {
            self.storage.data_dir = Some(data_dir);
        }
    }

    fn apply_cli_overrides(&mut self, cli: &crate::cli::Cli) {
        if let Some(data_dir) = &cli.data_dir {
            self.storage.data_dir = Some(data_dir.clone());
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns error when the delay range is inverted or the reply set is
    /// empty.
    pub fn validate(&self) -> Result<()> {
        if self.assistant.min_delay_ms > self.assistant.max_delay_ms {
            return Err(ChatGeniusError::Config(format!(
                "assistant.min_delay_ms ({}) must not exceed assistant.max_delay_ms ({})",
                self.assistant.min_delay_ms, self.assistant.max_delay_ms
            ))
            .into());
        }

        if self.assistant.replies.is_empty() {
            return Err(
                ChatGeniusError::Config("assistant.replies must not be empty".to_string()).into(),
            );
        }

        Ok(())
    }
}
