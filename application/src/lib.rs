//! Application layer for live-qa
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::AgentParams;
pub use ports::{
    agent::{Agent, AgentBuildError, AgentInvocationError, ErrorCategory},
    agent_progress::{AgentProgressNotifier, NoAgentProgress},
    answer_surface::AnswerSurface,
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    llm_gateway::{CompletionRequest, GatewayError, LlmGateway},
    tool_executor::ToolExecutorPort,
};
pub use use_cases::agent_builder::AgentBuilder;
pub use use_cases::ask::{AskUseCase, SubmitOutcome};
pub use use_cases::react_agent::ReactAgent;
