//! ReAct step variants

use serde::{Deserialize, Serialize};

/// One parsed model completion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ReactStep {
    /// Reasoning with no action and no conclusion.
    Reason { thought: String },
    /// Invoke a tool with a single string input.
    Invoke {
        thought: String,
        tool: String,
        input: String,
    },
    /// Final answer reached.
    Conclude { thought: String, answer: String },
}

impl ReactStep {
    /// The reasoning text that preceded the action or answer.
    pub fn thought(&self) -> &str {
        match self {
            ReactStep::Reason { thought } => thought,
            ReactStep::Invoke { thought, .. } => thought,
            ReactStep::Conclude { thought, .. } => thought,
        }
    }

    pub fn is_final(&self) -> bool {
        matches!(self, ReactStep::Conclude { .. })
    }
}
