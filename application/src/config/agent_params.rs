//! Agent parameters: reasoning loop control.
//!
//! [`AgentParams`] groups the static parameters that bound the loop in
//! [`ReactAgent`](crate::use_cases::react_agent::ReactAgent).
//! These are application-layer concerns, not domain policy.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Reasoning loop control parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentParams {
    /// Maximum number of model completions per question.
    pub max_steps: usize,
    /// Upper bound on the whole question, model and search calls included.
    pub timeout: Duration,
}

impl Default for AgentParams {
    fn default() -> Self {
        Self {
            max_steps: 15,
            timeout: Duration::from_secs(120),
        }
    }
}

impl AgentParams {
    pub fn with_max_steps(mut self, max: usize) -> Self {
        self.max_steps = max;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
