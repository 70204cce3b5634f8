//! UI surface port.
//!
//! The interaction loop talks to the user only through [`AnswerSurface`]:
//! one status area (warning, working indicator, success) and one error area.
//! The terminal page implements it in the presentation layer; tests record
//! the calls.

use super::agent::ErrorCategory;

/// Output side of the single-page UI
pub trait AnswerSurface: Send + Sync {
    /// Validation warning; no agent call was made.
    fn show_warning(&self, message: &str);

    /// Show a "working" indicator while the agent runs.
    fn start_working(&self, message: &str);

    /// Remove the working indicator.
    fn stop_working(&self);

    /// Success indicator followed by the answer, verbatim.
    fn show_success(&self, headline: &str, answer: &str);

    /// Error indicator, generic apology and diagnostic detail.
    fn show_error(&self, apology: &str, category: ErrorCategory, detail: &str);
}
