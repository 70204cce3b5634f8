//! Agent port
//!
//! An [`Agent`] answers one question with one string. How it gets there
//! (how many reasoning steps, how many searches) is opaque to callers.

use super::llm_gateway::GatewayError;
use async_trait::async_trait;
use liveqa_domain::Question;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Errors raised while constructing an agent
#[derive(Error, Debug)]
pub enum AgentBuildError {
    #[error("Invalid agent configuration: {0}")]
    Configuration(String),

    #[error("HTTP client initialization failed: {0}")]
    Client(String),
}

/// Any failure from the language model, the search backend or the loop itself
#[derive(Error, Debug)]
pub enum AgentInvocationError {
    #[error("Language model request failed: {0}")]
    Gateway(#[from] GatewayError),

    #[error("No final answer after {max_steps} reasoning steps")]
    StepLimitExceeded { max_steps: usize },

    #[error("No answer within {}s", .0.as_secs())]
    Timeout(Duration),

    #[error("Model returned an empty final answer")]
    EmptyAnswer,

    #[error("Agent could not be constructed: {0}")]
    Build(#[from] AgentBuildError),
}

/// Coarse failure categories used to pick a user-facing hint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    Network,
    Authentication,
    Timeout,
    NonConvergence,
    Other,
}

impl ErrorCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "network",
            ErrorCategory::Authentication => "authentication",
            ErrorCategory::Timeout => "timeout",
            ErrorCategory::NonConvergence => "non_convergence",
            ErrorCategory::Other => "other",
        }
    }

    /// Short suggestion shown under the apology, if there is a useful one
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            ErrorCategory::Network => {
                Some("Check your internet connection and try again.")
            }
            ErrorCategory::Authentication => {
                Some("The API key was rejected. Check the configured credential.")
            }
            ErrorCategory::Timeout => {
                Some("Answering took too long. Try a more specific question.")
            }
            ErrorCategory::NonConvergence => {
                Some("The agent could not settle on an answer. Try rephrasing the question.")
            }
            ErrorCategory::Other => None,
        }
    }
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl AgentInvocationError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            AgentInvocationError::Gateway(
                GatewayError::ConnectionError(_) | GatewayError::Timeout,
            ) => ErrorCategory::Network,
            AgentInvocationError::Gateway(GatewayError::AuthenticationFailed(_)) => {
                ErrorCategory::Authentication
            }
            AgentInvocationError::Gateway(_) => ErrorCategory::Other,
            AgentInvocationError::Timeout(_) => ErrorCategory::Timeout,
            AgentInvocationError::StepLimitExceeded { .. } | AgentInvocationError::EmptyAnswer => {
                ErrorCategory::NonConvergence
            }
            AgentInvocationError::Build(_) => ErrorCategory::Other,
        }
    }
}

/// Answers a question, possibly after several reasoning and search steps
#[async_trait]
pub trait Agent: Send + Sync {
    async fn answer(&self, question: &Question) -> Result<String, AgentInvocationError>;
}
