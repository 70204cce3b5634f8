//! Search tool configuration from TOML (`[search]` section)

use super::{ConfigIssue, Severity};
use serde::{Deserialize, Serialize};

/// Raw DuckDuckGo search configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSearchConfig {
    /// Number of result snippets aggregated into one observation
    pub max_results: usize,
    /// DuckDuckGo region code (`kl` parameter), e.g. "wt-wt", "us-en"
    pub region: String,
    pub timeout_seconds: u64,
}

impl Default for FileSearchConfig {
    fn default() -> Self {
        Self {
            max_results: 5,
            region: "wt-wt".to_string(),
            timeout_seconds: 30,
        }
    }
}

impl FileSearchConfig {
    pub(super) fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        if self.max_results == 0 {
            issues.push(ConfigIssue::new(
                Severity::Error,
                "search.max_results",
                "must be at least 1",
            ));
        }
        if self.region.trim().is_empty() {
            issues.push(ConfigIssue::new(
                Severity::Warning,
                "search.region",
                "empty region, falling back to 'wt-wt'",
            ));
        }
        if self.timeout_seconds == 0 {
            issues.push(ConfigIssue::new(
                Severity::Error,
                "search.timeout_seconds",
                "must be greater than zero",
            ));
        }
        issues
    }

    /// Region code with the empty-string fallback applied
    pub fn region(&self) -> &str {
        match self.region.trim() {
            "" => "wt-wt",
            region => region,
        }
    }
}
