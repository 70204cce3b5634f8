//! Agent configuration from TOML (`[agent]` section)

use super::{ConfigIssue, Severity};
use liveqa_application::AgentParams;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw reasoning loop configuration from TOML
///
/// ```toml
/// [agent]
/// max_steps = 15
/// timeout_seconds = 120
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAgentConfig {
    /// Maximum model completions per question
    pub max_steps: usize,
    /// Upper bound on one question, end to end
    pub timeout_seconds: u64,
}

impl Default for FileAgentConfig {
    fn default() -> Self {
        let params = AgentParams::default();
        Self {
            max_steps: params.max_steps,
            timeout_seconds: params.timeout.as_secs(),
        }
    }
}

impl FileAgentConfig {
    pub fn to_agent_params(&self) -> AgentParams {
        AgentParams::default()
            .with_max_steps(self.max_steps)
            .with_timeout(Duration::from_secs(self.timeout_seconds))
    }

    pub(super) fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        if self.max_steps == 0 {
            issues.push(ConfigIssue::new(
                Severity::Error,
                "agent.max_steps",
                "must be at least 1",
            ));
        }
        if self.timeout_seconds == 0 {
            issues.push(ConfigIssue::new(
                Severity::Error,
                "agent.timeout_seconds",
                "must be greater than zero",
            ));
        }
        issues
    }
}
