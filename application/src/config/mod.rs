//! Application-level configuration.
//!
//! - [`AgentParams`]: reasoning loop control (step limit, overall timeout)

pub mod agent_params;

pub use agent_params::AgentParams;
