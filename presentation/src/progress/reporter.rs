//! Reasoning step output for `--show-steps`.

use super::indicator::WorkingIndicator;
use colored::Colorize;
use liveqa_application::AgentProgressNotifier;
use liveqa_domain::util::preview;
use std::sync::Arc;

/// Longest thought / observation preview, in bytes
const PREVIEW_BYTES: usize = 160;

/// Prints each reasoning step to stderr as it happens.
pub struct StepReporter {
    indicator: Arc<WorkingIndicator>,
}

impl StepReporter {
    pub fn new(indicator: Arc<WorkingIndicator>) -> Self {
        Self { indicator }
    }

    pub fn format_step_start(step: usize, max_steps: usize) -> String {
        format!("{}", format!("── step {}/{} ──", step, max_steps).dimmed())
    }

    pub fn format_thought(thought: &str) -> String {
        format!("  {} {}", "💭".dimmed(), preview(thought, PREVIEW_BYTES).italic())
    }

    pub fn format_tool_call(tool_name: &str, input: &str) -> String {
        format!("  {} {}({})", "🔍".cyan(), tool_name.cyan().bold(), input)
    }

    pub fn format_tool_result(tool_name: &str, success: bool, duration_ms: Option<u64>) -> String {
        let timing = duration_ms
            .map(|ms| format!(" in {}ms", ms))
            .unwrap_or_default();
        if success {
            format!("  {} {} returned{}", "✓".green(), tool_name, timing)
        } else {
            format!("  {} {} failed{}", "✗".red(), tool_name, timing)
        }
    }
}

impl AgentProgressNotifier for StepReporter {
    fn on_step_start(&self, step: usize, max_steps: usize) {
        self.indicator
            .println(&Self::format_step_start(step, max_steps));
    }

    fn on_thought(&self, thought: &str) {
        self.indicator.println(&Self::format_thought(thought));
    }

    fn on_tool_call(&self, tool_name: &str, input: &str) {
        self.indicator
            .println(&Self::format_tool_call(tool_name, input));
    }

    fn on_tool_result(&self, tool_name: &str, success: bool, duration_ms: Option<u64>) {
        self.indicator
            .println(&Self::format_tool_result(tool_name, success, duration_ms));
    }

    fn on_tool_not_found(&self, tool_name: &str, available_tools: &[&str]) {
        self.indicator.println(&format!(
            "  {} unknown tool '{}' (available: {})",
            "?".yellow(),
            tool_name,
            available_tools.join(", ")
        ));
    }

    fn on_format_error(&self, message: &str) {
        self.indicator
            .println(&format!("  {} {}", "!".yellow(), message.yellow()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_tool_result() {
        colored::control::set_override(false);
        assert_eq!(
            StepReporter::format_tool_result("web_search", true, Some(420)),
            "  ✓ web_search returned in 420ms"
        );
        assert_eq!(
            StepReporter::format_tool_result("web_search", false, None),
            "  ✗ web_search failed"
        );
    }

    #[test]
    fn test_format_tool_call() {
        colored::control::set_override(false);
        assert_eq!(
            StepReporter::format_tool_call("web_search", "IPL result"),
            "  🔍 web_search(IPL result)"
        );
    }

    #[test]
    fn test_long_thought_is_previewed() {
        colored::control::set_override(false);
        let thought = "word ".repeat(100);
        let line = StepReporter::format_thought(&thought);
        assert!(line.len() < thought.len());
        assert!(line.ends_with('…'));
    }
}
