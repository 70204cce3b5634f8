//! Tool implementations for the agent
//!
//! Exactly one tool is registered: `web_search`, backed by DuckDuckGo.

pub mod web;

mod executor;

pub use executor::WebSearchExecutor;

use liveqa_domain::tool::entities::ToolSpec;

/// The agent's tool set
pub fn default_tool_spec() -> ToolSpec {
    ToolSpec::new().register(web::web_search_definition())
}
