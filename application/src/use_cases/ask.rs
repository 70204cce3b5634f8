//! Ask use case: the single-page interaction loop.
//!
//! One call to [`AskUseCase::handle_submit`] corresponds to one render of
//! the page. It decides whether the agent should run at all (via the
//! [`SessionState`] guard), validates the question, drives the surface
//! through working → success/error, and never propagates a failure.

use crate::ports::agent::ErrorCategory;
use crate::ports::answer_surface::AnswerSurface;
use crate::use_cases::agent_builder::AgentBuilder;
use liveqa_domain::util::preview;
use liveqa_domain::{Question, SessionState, ValidationError};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Shown while the agent is running.
pub const WORKING_MESSAGE: &str = "Thinking…";

/// Shown above a successful answer.
pub const SUCCESS_HEADLINE: &str = "Here's what I found:";

/// Generic apology for every agent failure.
pub const APOLOGY: &str = "Sorry, something went wrong!";

/// What a single submission ended up doing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Passive re-render; nothing happened.
    Skipped,
    /// Input rejected before any agent call.
    ValidationFailed(ValidationError),
    /// Agent answered; the text is exactly what was displayed.
    Answered(String),
    /// Agent failed; the apology and detail were displayed.
    Failed {
        category: ErrorCategory,
        detail: String,
    },
}

impl SubmitOutcome {
    /// Whether the agent produced an answer.
    pub fn is_answered(&self) -> bool {
        matches!(self, SubmitOutcome::Answered(_))
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, SubmitOutcome::Skipped)
    }
}

/// Use case driving one question from input to displayed answer.
#[derive(Clone)]
pub struct AskUseCase {
    builder: Arc<AgentBuilder>,
}

impl AskUseCase {
    pub fn new(builder: Arc<AgentBuilder>) -> Self {
        Self { builder }
    }

    /// Handle one render of the page.
    ///
    /// `explicit_trigger` is true when the user pressed the trigger (Enter);
    /// false for passive renders such as the first draw with a prefilled
    /// question or a `/clear` redraw.
    pub async fn handle_submit(
        &self,
        session: &mut SessionState,
        question: &str,
        explicit_trigger: bool,
        surface: &dyn AnswerSurface,
    ) -> SubmitOutcome {
        if !session.begin_submission(question, explicit_trigger) {
            debug!("Passive render, skipping submission");
            return SubmitOutcome::Skipped;
        }

        let question = match Question::try_new(question) {
            Ok(q) => q,
            Err(e) => {
                debug!("Rejected submission: {}", e);
                surface.show_warning(&e.to_string());
                return SubmitOutcome::ValidationFailed(e);
            }
        };

        info!("Submitting question: {}", preview(question.content(), 100));
        surface.start_working(WORKING_MESSAGE);

        let result = match self.builder.build().await {
            Ok(agent) => agent.answer(&question).await,
            Err(e) => Err(e.into()),
        };

        surface.stop_working();

        match result {
            Ok(answer) => {
                surface.show_success(SUCCESS_HEADLINE, &answer);
                SubmitOutcome::Answered(answer)
            }
            Err(e) => {
                let category = e.category();
                let detail = e.to_string();
                warn!("Question failed ({}): {}", category, detail);
                surface.show_error(APOLOGY, category, &detail);
                SubmitOutcome::Failed { category, detail }
            }
        }
    }
}
