//! Tool domain entities

use serde::{Deserialize, Serialize};

/// Definition of a tool that can be used by the agent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolDefinition {
    /// Unique name of the tool (e.g., "web_search")
    pub name: String,
    /// Human-readable description, shown to the model verbatim
    pub description: String,
}

impl ToolDefinition {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// Specification of available tools for the agent
///
/// Keeps registration order so the prompt is stable between runs.
#[derive(Debug, Clone, Default)]
pub struct ToolSpec {
    tools: Vec<ToolDefinition>,
}

impl ToolSpec {
    pub fn new() -> Self {
        Self { tools: Vec::new() }
    }

    /// Register a tool, replacing any previous definition with the same name
    pub fn register(mut self, tool: ToolDefinition) -> Self {
        self.tools.retain(|t| t.name != tool.name);
        self.tools.push(tool);
        self
    }

    /// Look a tool up by name, ignoring case and surrounding whitespace
    pub fn get(&self, name: &str) -> Option<&ToolDefinition> {
        let name = name.trim();
        self.tools
            .iter()
            .find(|t| t.name.eq_ignore_ascii_case(name))
    }

    pub fn all(&self) -> impl Iterator<Item = &ToolDefinition> {
        self.tools.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tools.iter().map(|t| t.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

/// A call to a tool with its single string input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolCall {
    /// Name of the tool to call
    pub tool_name: String,
    /// Raw input passed to the tool
    pub input: String,
}

impl ToolCall {
    pub fn new(tool_name: impl Into<String>, input: impl Into<String>) -> Self {
        Self {
            tool_name: tool_name.into(),
            input: input.into(),
        }
    }
}
