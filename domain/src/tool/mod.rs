//! Tool domain types
//!
//! A tool is an external capability the agent can invoke with a single
//! string input, e.g. `web_search`.

pub mod entities;
pub mod value_objects;
