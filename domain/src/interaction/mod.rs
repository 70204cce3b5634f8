//! Session state for the interaction loop.
//!
//! The page may be redrawn without the user pressing the trigger (startup
//! with a prefilled question, `/clear`). [`SessionState`] records whether a
//! question already ran in this session so that such passive redraws do not
//! invoke the agent again.
//!
//! ```text
//!            explicit trigger, or
//!        non-empty input on first run
//!   Idle ──────────────────────────────▶ Answered
//!                                          │  ▲
//!                                          └──┘ explicit trigger only
//! ```

use serde::{Deserialize, Serialize};

/// Per-session re-invocation guard.
///
/// Each page owns one; it is never shared between sessions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    has_run: bool,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a submission has already been processed in this session.
    pub fn has_run(&self) -> bool {
        self.has_run
    }

    /// Decide whether a submission should be processed, marking the session
    /// as run when it is.
    ///
    /// Runs when `explicit_trigger` is set, or when `question` is non-empty
    /// and nothing has run yet. Note the emptiness check here is on the raw
    /// input: a whitespace-only question on first run still goes through so
    /// the caller can surface the validation warning.
    pub fn begin_submission(&mut self, question: &str, explicit_trigger: bool) -> bool {
        let first_run_with_input = !question.is_empty() && !self.has_run;
        if !(explicit_trigger || first_run_with_input) {
            return false;
        }
        self.has_run = true;
        true
    }
}
