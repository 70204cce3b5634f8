//! Console answer surface.
//!
//! [`ConsoleSurface`] is the terminal implementation of [`AnswerSurface`]:
//! the spinner is the status area, stdout carries answers, stderr carries
//! warnings and errors.

use crate::cli::commands::OutputFormat;
use crate::progress::indicator::WorkingIndicator;
use colored::Colorize;
use liveqa_application::{AnswerSurface, ErrorCategory};
use std::sync::Arc;

/// Formats page elements for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Turn colors off globally (`output.color = false`). When enabled,
    /// `colored` still decides based on the terminal.
    pub fn set_color(enabled: bool) {
        if !enabled {
            colored::control::set_override(false);
        }
    }

    /// Title block shown at the top of the page
    pub fn header(title: &str, subtitle: &str, examples: &[&str]) -> String {
        let line = "─".repeat(60);
        let mut output = format!(
            "{}\n{}\n{}\n\n{}\n",
            line.cyan(),
            title.bold(),
            line.cyan(),
            subtitle
        );
        if !examples.is_empty() {
            output.push_str(&format!("\n{}\n", "Examples:".dimmed()));
            for example in examples {
                output.push_str(&format!("  • {}\n", example.italic()));
            }
        }
        output
    }

    pub fn warning(message: &str) -> String {
        format!("{} {}", "⚠".yellow(), message.yellow())
    }

    pub fn success(headline: &str, answer: &str) -> String {
        format!("{} {}\n\n{}\n", "✓".green(), headline.green().bold(), answer)
    }

    /// Apology, optional category hint, then the raw detail.
    pub fn error(apology: &str, category: ErrorCategory, detail: &str) -> String {
        let mut output = format!("{} {}", "✗".red(), apology.red().bold());
        if let Some(hint) = category.hint() {
            output.push_str(&format!("\n  {}", hint));
        }
        output.push_str(&format!("\n  {}", detail.dimmed()));
        output
    }
}

/// Terminal [`AnswerSurface`].
///
/// In JSON mode nothing is printed here; the caller serializes the
/// [`SubmitOutcome`](liveqa_application::SubmitOutcome) instead.
pub struct ConsoleSurface {
    indicator: Arc<WorkingIndicator>,
    format: OutputFormat,
}

impl ConsoleSurface {
    pub fn new(indicator: Arc<WorkingIndicator>, format: OutputFormat) -> Self {
        Self { indicator, format }
    }

    fn is_text(&self) -> bool {
        self.format == OutputFormat::Text
    }
}

impl AnswerSurface for ConsoleSurface {
    fn show_warning(&self, message: &str) {
        if self.is_text() {
            eprintln!("{}", ConsoleFormatter::warning(message));
        }
    }

    fn start_working(&self, message: &str) {
        self.indicator.start(message);
    }

    fn stop_working(&self) {
        self.indicator.stop();
    }

    fn show_success(&self, headline: &str, answer: &str) {
        if self.is_text() {
            println!("{}", ConsoleFormatter::success(headline, answer));
        }
    }

    fn show_error(&self, apology: &str, category: ErrorCategory, detail: &str) {
        if self.is_text() {
            eprintln!("{}", ConsoleFormatter::error(apology, category, detail));
        }
    }
}
