//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod agent_builder;
pub mod ask;
pub mod react_agent;
