//! Logging configuration from TOML (`[logging]` section)

use serde::{Deserialize, Serialize};

/// Raw logging configuration from TOML
///
/// ```toml
/// [logging]
/// conversation_log = "qa.jsonl"
/// log_file = "liveqa.log"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// JSONL transcript of every question (model completions, searches, answers)
    pub conversation_log: Option<String>,
    /// Additional tracing output file
    pub log_file: Option<String>,
}
