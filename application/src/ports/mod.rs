//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure and presentation adapters
//! must implement.

pub mod agent;
pub mod agent_progress;
pub mod answer_surface;
pub mod conversation_logger;
pub mod llm_gateway;
pub mod tool_executor;
