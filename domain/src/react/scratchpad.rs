//! Per-question transcript of completed ReAct steps.

use serde::{Deserialize, Serialize};

/// One completed step: the raw model completion and what it observed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScratchpadEntry {
    /// Raw completion text, exactly as the model produced it.
    pub log: String,
    /// Tool output or format-error feedback.
    pub observation: String,
}

/// Accumulated steps for a single `answer()` call.
///
/// Rendered into the prompt right after the trailing `Thought:` so the model
/// continues from where it stopped.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Scratchpad {
    entries: Vec<ScratchpadEntry>,
}

impl Scratchpad {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, log: impl Into<String>, observation: impl Into<String>) {
        self.entries.push(ScratchpadEntry {
            log: log.into(),
            observation: observation.into(),
        });
    }

    pub fn entries(&self) -> &[ScratchpadEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render as `{log}\nObservation: {observation}\nThought: ` per entry.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for entry in &self.entries {
            out.push_str(&entry.log);
            out.push_str("\nObservation: ");
            out.push_str(&entry.observation);
            out.push_str("\nThought: ");
        }
        out
    }
}
