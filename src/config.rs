//! Configuration management for TradeJournal
//!
//! This module handles loading, parsing, validating, and managing
//! configuration from files, environment variables, and CLI overrides.

use crate::error::{Result, JournalError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure for TradeJournal
///
/// Holds everything the client needs: where the journal service lives,
/// how the chat session behaves, and presentation preferences.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Journal service API configuration
    #[serde(default)]
    pub api: ApiConfig,

    /// Chat session configuration
    #[serde(default)]
    pub chat: ChatConfig,
}

/// Journal service API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the journal service REST API
    ///
    /// Endpoints are built relative to this base (e.g. `/chats`,
    /// `/ai/chat`), which allows tests to point the client at a mock
    /// server.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

fn default_base_url() -> String {
    "http://localhost:8000/api".to_string()
}

fn default_timeout_seconds() -> u64 {
    60
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

/// Chat session configuration
///
/// Settings for the interactive chat session, including the placeholder
/// text shown while a reply is pending and whether the welcome screen is
/// printed for empty sessions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatConfig {
    /// Placeholder content shown for the provisional assistant message
    #[serde(default = "default_pending_reply_text")]
    pub pending_reply_text: String,

    /// Print the welcome screen with suggestion prompts when the session
    /// starts with no conversation selected
    #[serde(default = "default_show_welcome")]
    pub show_welcome: bool,
}

fn default_pending_reply_text() -> String {
    "Processing your message...".to_string()
}

fn default_show_welcome() -> bool {
    true
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            pending_reply_text: default_pending_reply_text(),
            show_welcome: default_show_welcome(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            chat: ChatConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from a YAML file with CLI overrides applied
    ///
    /// A missing file is not an error: defaults are used, matching the
    /// behavior of running the client against a local service with no
    /// config at all.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the YAML configuration file
    /// * `cli` - Parsed CLI arguments whose overrides take precedence
    ///
    /// # Errors
    ///
    /// Returns error if the file exists but cannot be read or parsed
    pub fn load(path: impl AsRef<Path>, cli: &crate::cli::Cli) -> Result<Self> {
        let path = path.as_ref();

        let mut config = if path.exists() {
            let contents = std::fs::read_to_string(path)?;
            serde_yaml::from_str(&contents)?
        } else {
            tracing::debug!("Config file {} not found, using defaults", path.display());
            Self::default()
        };

        if let Some(api_url) = &cli.api_url {
            config.api.base_url = api_url.clone();
        }

        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns error if the API base URL is empty or not a valid URL, or
    /// if the timeout is zero
    pub fn validate(&self) -> Result<()> {
        if self.api.base_url.trim().is_empty() {
            return Err(JournalError::Config("api.base_url must not be empty".to_string()).into());
        }

        url::Url::parse(&self.api.base_url).map_err(|e| {
            JournalError::Config(format!("api.base_url is not a valid URL: {}", e))
        })?;

        if self.api.timeout_seconds == 0 {
            return Err(
                JournalError::Config("api.timeout_seconds must be greater than 0".to_string())
                    .into(),
            );
        }

        Ok(())
    }
}
