//! Infrastructure layer for live-qa
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer: the Gemini gateway, the DuckDuckGo search
//! tool, the JSONL transcript logger, and configuration file loading.

pub mod config;
pub mod logging;
pub mod providers;
pub mod tools;

// Re-export commonly used types
pub use config::{
    ConfigError, ConfigIssue, ConfigLoader, FileAgentConfig, FileConfig, FileLoggingConfig,
    FileModelConfig, FileOutputConfig, FileReplConfig, FileSearchConfig, Severity,
    resolve_api_key,
};
pub use logging::JsonlConversationLogger;
pub use providers::{GeminiLlmGateway, GeminiSettings};
pub use tools::{WebSearchExecutor, default_tool_spec, web::SearchSettings};
