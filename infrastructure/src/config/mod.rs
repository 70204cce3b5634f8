//! Configuration file loading for live-qa
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. Environment variables `LIVEQA_<SECTION>__<KEY>`
//! 2. `--config <path>` specified file
//! 3. Project root: `./liveqa.toml` or `./.liveqa.toml`
//! 4. Global: `$XDG_CONFIG_HOME/live-qa/config.toml`
//! 5. Default values
//!
//! The API key itself is read from the environment variable named by
//! `model.api_key_env` ([`resolve_api_key`]).

mod credential;
mod error;
mod file_config;
mod loader;

pub use credential::{resolve_api_key, resolve_api_key_with};
pub use error::ConfigError;
pub use file_config::{
    ConfigIssue, FileAgentConfig, FileConfig, FileLoggingConfig, FileModelConfig,
    FileOutputConfig, FileReplConfig, FileSearchConfig, Severity,
};
pub use loader::ConfigLoader;
