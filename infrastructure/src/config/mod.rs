//! Configuration file loading for portfolio-twin
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `PORTFOLIO_TWIN_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./twin.toml` or `./.twin.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/portfolio-twin/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileChatConfig, FileConfig, FileGeminiConfig, FileProfileConfig,
    FileTuiConfig,
};
pub use loader::{APP_DIR, ConfigLoader, ENV_PREFIX};
