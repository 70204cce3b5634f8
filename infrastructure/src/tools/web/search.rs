//! `web_search` tool: search the web using DuckDuckGo.
//!
//! # Sources
//!
//! 1. The DuckDuckGo HTML endpoint (`html.duckduckgo.com/html/`), parsed with
//!    `scraper`. The snippets of the first `max_results` organic results are
//!    joined with single spaces into one observation.
//! 2. When the HTML page yields nothing, the
//!    [Instant Answer API](https://api.duckduckgo.com/) (abstract, answer,
//!    definition, related topics).
//!
//! Neither requires an API key. If both come back empty the observation is
//! [`NO_RESULTS`]. Transport and HTTP errors become a failed [`ToolResult`];
//! they never abort the reasoning loop.

use liveqa_domain::tool::{
    entities::{ToolCall, ToolDefinition},
    value_objects::{ToolError, ToolResult, ToolResultMetadata},
};
use scraper::{ElementRef, Html, Selector};
use std::time::{Duration, Instant};
use tracing::debug;

/// Canonical tool name for the web search tool.
pub const WEB_SEARCH: &str = "web_search";

/// Observation when no source produced any text.
pub const NO_RESULTS: &str = "No good DuckDuckGo Search Result was found";

/// DuckDuckGo HTML results endpoint.
const DDG_HTML_URL: &str = "https://html.duckduckgo.com/html/";

/// DuckDuckGo Instant Answer API endpoint (no API key required).
const DDG_API_URL: &str = "https://api.duckduckgo.com/";

const USER_AGENT: &str = concat!("live-qa/", env!("CARGO_PKG_VERSION"));

/// Maximum related topics taken from an instant answer.
const MAX_RELATED_TOPICS: usize = 5;

/// Search behaviour knobs, from the `[search]` config section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchSettings {
    pub max_results: usize,
    /// DuckDuckGo region code (`kl`), e.g. "wt-wt"
    pub region: String,
    pub timeout: Duration,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            max_results: 5,
            region: "wt-wt".to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

/// Create the [`ToolDefinition`] for `web_search`.
///
/// The description is shown to the model verbatim in the prompt.
pub fn web_search_definition() -> ToolDefinition {
    ToolDefinition::new(
        WEB_SEARCH,
        "A wrapper around DuckDuckGo Search. Useful for when you need to answer questions about current events. Input should be a search query.",
    )
}

/// A single organic result from the HTML page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub title: String,
    pub url: String,
    pub snippet: String,
}

/// Execute the `web_search` tool: query DuckDuckGo and aggregate results.
pub async fn execute_web_search(
    client: &reqwest::Client,
    settings: &SearchSettings,
    call: &ToolCall,
) -> ToolResult {
    let start = Instant::now();

    let query = call.input.trim();
    if query.is_empty() {
        return ToolResult::failure(
            WEB_SEARCH,
            ToolError::invalid_argument("Search query cannot be empty"),
        );
    }

    let html = match fetch_html_results(client, settings, query).await {
        Ok(html) => html,
        Err(e) => return ToolResult::failure(WEB_SEARCH, e),
    };

    let hits = parse_html_results(&html, settings.max_results);
    debug!("DuckDuckGo HTML returned {} result(s)", hits.len());

    let (output, result_count) = if hits.is_empty() {
        let data = match fetch_instant_answer(client, query).await {
            Ok(data) => data,
            Err(e) => return ToolResult::failure(WEB_SEARCH, e),
        };
        match format_instant_answer(&data) {
            Some(text) => (text, 1),
            None => (NO_RESULTS.to_string(), 0),
        }
    } else {
        (join_snippets(&hits), hits.len())
    };

    ToolResult::success(WEB_SEARCH, output).with_metadata(ToolResultMetadata {
        duration_ms: Some(start.elapsed().as_millis() as u64),
        result_count: Some(result_count),
    })
}

async fn fetch_html_results(
    client: &reqwest::Client,
    settings: &SearchSettings,
    query: &str,
) -> Result<String, ToolError> {
    let response = client
        .post(DDG_HTML_URL)
        .form(&[("q", query), ("kl", settings.region.as_str())])
        .header("User-Agent", USER_AGENT)
        .timeout(settings.timeout)
        .send()
        .await
        .map_err(request_error)?;

    let status = response.status();
    if !status.is_success() {
        return Err(ToolError::execution_failed(format!(
            "Search returned HTTP {}",
            status.as_u16()
        )));
    }

    response
        .text()
        .await
        .map_err(|e| ToolError::execution_failed(format!("Failed to read search results: {}", e)))
}

async fn fetch_instant_answer(
    client: &reqwest::Client,
    query: &str,
) -> Result<serde_json::Value, ToolError> {
    let response = client
        .get(DDG_API_URL)
        .query(&[
            ("q", query),
            ("format", "json"),
            ("no_html", "1"),
            ("skip_disambig", "1"),
        ])
        .header("User-Agent", USER_AGENT)
        .send()
        .await
        .map_err(request_error)?;

    if !response.status().is_success() {
        return Err(ToolError::execution_failed(format!(
            "Search API returned error: {}",
            response.status()
        )));
    }

    response
        .json()
        .await
        .map_err(|e| ToolError::execution_failed(format!("Failed to parse search results: {}", e)))
}

fn request_error(e: reqwest::Error) -> ToolError {
    if e.is_timeout() {
        ToolError::timeout("web search")
    } else {
        ToolError::execution_failed(format!("Search request failed: {}", e))
    }
}

/// Extract organic results from the DuckDuckGo HTML page, skipping ads.
pub fn parse_html_results(html: &str, max_results: usize) -> Vec<SearchHit> {
    let (Some(result_sel), Some(title_sel), Some(snippet_sel)) = (
        selector("div.result"),
        selector("a.result__a"),
        selector(".result__snippet"),
    ) else {
        return Vec::new();
    };

    let document = Html::parse_document(html);
    document
        .select(&result_sel)
        .filter(|result| !result.value().classes().any(|c| c == "result--ad"))
        .filter_map(|result| {
            let snippet = element_text(result.select(&snippet_sel).next()?);
            if snippet.is_empty() {
                return None;
            }
            let title_el = result.select(&title_sel).next();
            Some(SearchHit {
                title: title_el.map(element_text).unwrap_or_default(),
                url: title_el
                    .and_then(|a| a.value().attr("href"))
                    .unwrap_or_default()
                    .to_string(),
                snippet,
            })
        })
        .take(max_results)
        .collect()
}

fn selector(css: &str) -> Option<Selector> {
    Selector::parse(css).ok()
}

/// Text content with whitespace collapsed.
fn element_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}

fn join_snippets(hits: &[SearchHit]) -> String {
    hits.iter()
        .map(|hit| hit.snippet.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format an Instant Answer API response as plain text.
///
/// Returns `None` when the response carries no usable text.
pub fn format_instant_answer(data: &serde_json::Value) -> Option<String> {
    let mut sections: Vec<String> = Vec::new();

    if let Some(abstract_text) = non_empty(&data["AbstractText"]) {
        match non_empty(&data["AbstractSource"]) {
            Some(source) => sections.push(format!("{} (Source: {})", abstract_text, source)),
            None => sections.push(abstract_text.to_string()),
        }
    }

    if let Some(answer) = non_empty(&data["Answer"]) {
        sections.push(format!("Answer: {}", answer));
    }

    if let Some(definition) = non_empty(&data["Definition"]) {
        sections.push(format!("Definition: {}", definition));
    }

    if let Some(topics) = data["RelatedTopics"].as_array() {
        let topic_texts: Vec<&str> = topics
            .iter()
            .filter_map(|t| non_empty(&t["Text"]))
            .take(MAX_RELATED_TOPICS)
            .collect();
        if !topic_texts.is_empty() {
            sections.push(format!("Related: {}", topic_texts.join("; ")));
        }
    }

    if sections.is_empty() {
        None
    } else {
        Some(sections.join("\n"))
    }
}

fn non_empty(value: &serde_json::Value) -> Option<&str> {
    value.as_str().map(str::trim).filter(|s| !s.is_empty())
}
