//! Model configuration from TOML (`[model]` section)

use super::{ConfigIssue, Severity};
use liveqa_domain::{Model, Temperature};
use serde::{Deserialize, Serialize};

/// Raw language model configuration from TOML
///
/// # Example
///
/// ```toml
/// [model]
/// name = "gemini-1.5-flash"
/// temperature = 0.4
/// api_key_env = "GEMINI_API_KEY"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileModelConfig {
    /// Model identifier sent to the API
    pub name: String,
    /// Sampling temperature, `0.0..=1.0`
    pub temperature: f32,
    /// Name of the environment variable holding the API key
    pub api_key_env: String,
    /// API base URL (overridable for proxies)
    pub base_url: String,
    /// Per-request HTTP timeout
    pub request_timeout_seconds: u64,
}

impl Default for FileModelConfig {
    fn default() -> Self {
        Self {
            name: Model::default().to_string(),
            temperature: Temperature::DEFAULT.value(),
            api_key_env: "GEMINI_API_KEY".to_string(),
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            request_timeout_seconds: 60,
        }
    }
}

impl FileModelConfig {
    /// Parse the model name, falling back to the default on an empty name.
    pub fn parse_model(&self) -> (Model, Vec<ConfigIssue>) {
        match self.name.parse::<Model>() {
            Ok(model) => (model, vec![]),
            Err(_) => (
                Model::default(),
                vec![ConfigIssue::new(
                    Severity::Error,
                    "model.name",
                    "model name cannot be empty",
                )],
            ),
        }
    }

    pub fn parse_temperature(&self) -> (Temperature, Vec<ConfigIssue>) {
        match Temperature::new(self.temperature) {
            Ok(t) => (t, vec![]),
            Err(e) => (
                Temperature::default(),
                vec![ConfigIssue::new(
                    Severity::Error,
                    "model.temperature",
                    e.to_string(),
                )],
            ),
        }
    }

    pub(super) fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        issues.extend(self.parse_model().1);
        issues.extend(self.parse_temperature().1);
        if self.api_key_env.trim().is_empty() {
            issues.push(ConfigIssue::new(
                Severity::Error,
                "model.api_key_env",
                "credential variable name cannot be empty",
            ));
        }
        if self.request_timeout_seconds == 0 {
            issues.push(ConfigIssue::new(
                Severity::Error,
                "model.request_timeout_seconds",
                "must be greater than zero",
            ));
        }
        issues
    }
}
