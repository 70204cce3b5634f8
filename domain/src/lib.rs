//! Domain layer for live-qa
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Question / Answer
//!
//! A [`Question`] is the only validated input in the system: it is never empty.
//! The answer is plain text produced by the agent for exactly one question.
//!
//! ## ReAct
//!
//! The agent answers by alternating reasoning and tool invocation. Each model
//! completion is parsed into a [`ReactStep`], completed steps are accumulated
//! in a [`Scratchpad`] and rendered back into the next prompt.
//!
//! ## Session
//!
//! [`SessionState`] guards against running the same question twice when the
//! page is redrawn without an explicit trigger.

pub mod core;
pub mod interaction;
pub mod prompt;
pub mod react;
pub mod tool;
pub mod util;

// Re-export commonly used types
pub use core::{
    error::{DomainError, ValidationError},
    model::{Model, Temperature},
    question::Question,
};
pub use interaction::SessionState;
pub use prompt::ReactPromptTemplate;
pub use react::{
    parsing::{ParseError, parse_react_output},
    scratchpad::{Scratchpad, ScratchpadEntry},
    step::ReactStep,
};
pub use tool::{
    entities::{ToolCall, ToolDefinition, ToolSpec},
    value_objects::{ToolError, ToolResult, ToolResultMetadata},
};
