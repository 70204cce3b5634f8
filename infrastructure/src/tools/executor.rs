//! Web tool executor: the concrete implementation of [`ToolExecutorPort`].
//!
//! [`WebSearchExecutor`] owns one shared `reqwest::Client` and routes every
//! call through the registered [`ToolSpec`]:
//!
//! ```text
//! ToolExecutorPort::execute()
//!   ├─ unknown tool  → ToolResult::failure(NOT_FOUND)
//!   └─ web_search    → execute_web_search()
//! ```

use super::web::{SearchSettings, WEB_SEARCH, execute_web_search};
use async_trait::async_trait;
use liveqa_application::ports::agent::AgentBuildError;
use liveqa_application::ports::tool_executor::ToolExecutorPort;
use liveqa_domain::tool::{
    entities::{ToolCall, ToolSpec},
    value_objects::{ToolError, ToolResult},
};
use tracing::debug;

/// Executor for the agent's web tools.
#[derive(Debug, Clone)]
pub struct WebSearchExecutor {
    /// Available tools
    tool_spec: ToolSpec,
    settings: SearchSettings,
    /// Shared HTTP client (connection pool reused across searches)
    http_client: reqwest::Client,
}

impl WebSearchExecutor {
    /// Create an executor with [`default_tool_spec()`](super::default_tool_spec).
    pub fn new(settings: SearchSettings) -> Result<Self, AgentBuildError> {
        let http_client = reqwest::Client::builder()
            .timeout(settings.timeout)
            .build()
            .map_err(|e| AgentBuildError::Client(e.to_string()))?;
        Ok(Self::with_client(http_client, settings))
    }

    /// Create an executor around an existing client.
    pub fn with_client(http_client: reqwest::Client, settings: SearchSettings) -> Self {
        Self {
            tool_spec: super::default_tool_spec(),
            settings,
            http_client,
        }
    }

    pub fn settings(&self) -> &SearchSettings {
        &self.settings
    }
}

#[async_trait]
impl ToolExecutorPort for WebSearchExecutor {
    fn tool_spec(&self) -> &ToolSpec {
        &self.tool_spec
    }

    async fn execute(&self, call: &ToolCall) -> ToolResult {
        let Some(definition) = self.tool_spec.get(&call.tool_name) else {
            return ToolResult::failure(&call.tool_name, ToolError::not_found(&call.tool_name));
        };

        debug!("Executing {} with input: {}", definition.name, call.input);
        match definition.name.as_str() {
            WEB_SEARCH => execute_web_search(&self.http_client, &self.settings, call).await,
            other => ToolResult::failure(
                other,
                ToolError::execution_failed(format!("Tool '{}' has no implementation", other)),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn executor() -> WebSearchExecutor {
        WebSearchExecutor::with_client(reqwest::Client::new(), SearchSettings::default())
    }

    #[test]
    fn test_executor_has_web_search() {
        let executor = executor();
        assert_eq!(executor.available_tools(), vec![WEB_SEARCH]);
        assert!(executor.get_tool("WEB_SEARCH").is_some());
    }

    #[tokio::test]
    async fn test_unknown_tool_fails() {
        let result = executor()
            .execute(&ToolCall::new("calculator", "2+2"))
            .await;
        assert!(!result.is_success());
        assert_eq!(result.error().unwrap().code, "NOT_FOUND");
        assert_eq!(result.tool_name, "calculator");
    }

    #[test]
    fn test_new_builds_client() {
        let executor = WebSearchExecutor::new(SearchSettings::default()).unwrap();
        assert_eq!(executor.settings().max_results, 5);
    }
}
