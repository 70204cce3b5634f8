//! **Web tools**: `web_search`
//!
//! The agent's only window on current events. Backed by DuckDuckGo through
//! `reqwest` (HTTP) and `scraper` (HTML parsing).

mod search;

pub use search::{
    NO_RESULTS, SearchHit, SearchSettings, WEB_SEARCH, execute_web_search, format_instant_answer,
    parse_html_results, web_search_definition,
};
