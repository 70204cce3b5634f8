//! LLM Gateway port
//!
//! Defines the interface for communicating with the hosted language model.

use async_trait::async_trait;
use liveqa_domain::Model;
use thiserror::Error;

/// Errors that can occur during LLM gateway operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("Rate limited: {0}")]
    RateLimited(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Timeout")]
    Timeout,

    #[error("Other error: {0}")]
    Other(String),
}

/// A single text completion request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionRequest {
    /// Full prompt text
    pub prompt: String,
    /// Sequences at which generation stops (not included in the output)
    pub stop: Vec<String>,
}

impl CompletionRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            stop: Vec::new(),
        }
    }

    pub fn with_stop<I, S>(mut self, stop: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stop = stop.into_iter().map(Into::into).collect();
        self
    }
}

/// Gateway for LLM communication
///
/// Model and sampling settings are fixed when the adapter is constructed;
/// callers only supply prompts.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// The model this gateway talks to
    fn model(&self) -> &Model;

    /// Complete a prompt and return the generated text
    async fn complete(&self, request: &CompletionRequest) -> Result<String, GatewayError>;
}
