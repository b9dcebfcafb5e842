//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Configuration validation errors
#[derive(Error, Debug, PartialEq)]
pub enum ConfigValidationError {
    #[error("timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("model name cannot be empty")]
    EmptyModelName,

    #[error("base_url must start with http:// or https://, got '{0}'")]
    InvalidBaseUrl(String),

    #[error("reveal_threshold must be in (0, 1], got {0}")]
    InvalidRevealThreshold(f32),

    #[error("tick_ms cannot be 0")]
    InvalidTick,
}

/// Gemini endpoint configuration (`[gemini]` section)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGeminiConfig {
    /// Model name placed in the request path
    pub model: String,
    /// Endpoint root, overridable for proxies and tests
    pub base_url: String,
    /// Direct API key (not recommended, use the env var instead)
    pub api_key: Option<String>,
    /// Environment variable holding the API key
    pub api_key_env: String,
    /// Request timeout; unset means no client-side timeout
    pub timeout_seconds: Option<u64>,
}

impl Default for FileGeminiConfig {
    fn default() -> Self {
        Self {
            model: "gemini-2.5-flash".to_string(),
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            api_key: None,
            api_key_env: "GEMINI_API_KEY".to_string(),
            timeout_seconds: None,
        }
    }
}

impl FileGeminiConfig {
    /// Resolve the API key: explicit value first, then the named env var.
    ///
    /// Blank values count as absent.
    pub fn resolve_api_key(&self) -> Option<String> {
        self.resolve_api_key_with(|name| std::env::var(name).ok())
    }

    fn resolve_api_key_with(&self, lookup: impl Fn(&str) -> Option<String>) -> Option<String> {
        self.api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .or_else(|| lookup(&self.api_key_env).filter(|k| !k.trim().is_empty()))
    }
}

/// Chat texts (`[chat]` section)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileChatConfig {
    /// Opening assistant turn; derived from the profile when absent
    pub greeting: Option<String>,
    /// Reply shown for every failed call
    pub fallback_reply: String,
}

impl Default for FileChatConfig {
    fn default() -> Self {
        Self {
            greeting: None,
            fallback_reply: twin_domain::DEFAULT_FALLBACK_REPLY.to_string(),
        }
    }
}

/// Profile source (`[profile]` section)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProfileConfig {
    /// TOML profile file; the built-in profile is used when absent
    pub path: Option<PathBuf>,
}

/// TUI settings (`[tui]` section)
///
/// # Example
///
/// ```toml
/// [tui]
/// tick_ms = 250
/// reveal_threshold = 0.1
/// reveal_duration_ms = 1000
/// nav_scroll_threshold = 3
/// star_count = 50
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileTuiConfig {
    /// Redraw tick for animations (default: 250)
    pub tick_ms: u64,
    /// Visible fraction that reveals a block (default: 0.1)
    pub reveal_threshold: f32,
    /// Length of the reveal fade (default: 1000)
    pub reveal_duration_ms: u64,
    /// Rows scrolled before the navbar turns solid (default: 3)
    pub nav_scroll_threshold: u16,
    /// Stars drawn behind the hero (default: 50)
    pub star_count: usize,
}

impl Default for FileTuiConfig {
    fn default() -> Self {
        Self {
            tick_ms: 250,
            reveal_threshold: 0.1,
            reveal_duration_ms: 1000,
            nav_scroll_threshold: 3,
            star_count: 50,
        }
    }
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Gemini endpoint settings
    pub gemini: FileGeminiConfig,
    /// Chat texts
    pub chat: FileChatConfig,
    /// Profile source
    pub profile: FileProfileConfig,
    /// TUI settings
    pub tui: FileTuiConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if let Some(0) = self.gemini.timeout_seconds {
            return Err(ConfigValidationError::InvalidTimeout);
        }

        if self.gemini.model.trim().is_empty() {
            return Err(ConfigValidationError::EmptyModelName);
        }

        let base = self.gemini.base_url.trim();
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(ConfigValidationError::InvalidBaseUrl(
                self.gemini.base_url.clone(),
            ));
        }

        let threshold = self.tui.reveal_threshold;
        if !(threshold > 0.0 && threshold <= 1.0) {
            return Err(ConfigValidationError::InvalidRevealThreshold(threshold));
        }

        if self.tui.tick_ms == 0 {
            return Err(ConfigValidationError::InvalidTick);
        }

        Ok(())
    }
}
