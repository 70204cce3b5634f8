//! Interactive ask page on top of `reedline`.
//!
//! The page mirrors a single-screen web form: a title block, one input
//! ("Your question"), Enter as the trigger, a spinner while the agent works,
//! and the answer or error underneath.
//!
//! Renders that are not the user pressing Enter (the first draw with a
//! prefilled question, `/clear`) are submitted with `explicit_trigger =
//! false`; the session guard in [`AskUseCase`] decides whether they run.

use crate::output::console::ConsoleFormatter;
use liveqa_application::{AnswerSurface, AskUseCase, SubmitOutcome};
use liveqa_domain::SessionState;
use reedline::{DefaultPrompt, DefaultPromptSegment, FileBackedHistory, Reedline, Signal};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, warn};

pub const TITLE: &str = "🌐 Real-Time Q&A with Gemini + DuckDuckGo 🔍";

pub const SUBTITLE: &str = "Ask about anything happening right now: news events, fresh facts, \
or recent releases. I'll combine Google Gemini's reasoning with live DuckDuckGo results.";

pub const EXAMPLES: [&str; 2] = [
    "Who won yesterday's IPL match?",
    "Latest iPhone 16 specs leak?",
];

const INPUT_LABEL: &str = "💬 Your question";
const HISTORY_CAPACITY: usize = 500;

/// What a line typed at the prompt means
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageCommand {
    /// Submit the line as a question (explicit trigger)
    Ask(String),
    /// Redraw the page
    Clear,
    Help,
    Quit,
    Unknown(String),
}

impl PageCommand {
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        if !trimmed.starts_with('/') {
            return PageCommand::Ask(line.to_string());
        }
        match trimmed {
            "/clear" | "/c" => PageCommand::Clear,
            "/help" | "/h" | "/?" => PageCommand::Help,
            "/quit" | "/exit" | "/q" => PageCommand::Quit,
            other => PageCommand::Unknown(other.to_string()),
        }
    }
}

/// The interactive page.
pub struct AskPage {
    use_case: AskUseCase,
    surface: Arc<dyn AnswerSurface>,
    session: SessionState,
    /// Text currently in the input field (last submitted or prefilled)
    current_input: String,
    history_path: Option<PathBuf>,
}

impl AskPage {
    pub fn new(use_case: AskUseCase, surface: Arc<dyn AnswerSurface>) -> Self {
        Self {
            use_case,
            surface,
            session: SessionState::new(),
            current_input: String::new(),
            history_path: None,
        }
    }

    pub fn with_history(mut self, path: Option<PathBuf>) -> Self {
        self.history_path = path;
        self
    }

    /// Pre-fill the input field; it is submitted on the first render.
    pub fn with_prefill(mut self, question: impl Into<String>) -> Self {
        self.current_input = question.into();
        self
    }

    /// Run the page until `/quit` or Ctrl-D.
    pub async fn run(&mut self) -> std::io::Result<()> {
        let mut line_editor = self.line_editor();
        let prompt = DefaultPrompt::new(
            DefaultPromptSegment::Basic(INPUT_LABEL.to_string()),
            DefaultPromptSegment::Empty,
        );

        self.render().await;

        loop {
            match line_editor.read_line(&prompt) {
                Ok(Signal::Success(line)) => match PageCommand::parse(&line) {
                    PageCommand::Ask(question) => {
                        self.submit(question).await;
                    }
                    PageCommand::Clear => {
                        print!("\x1B[2J\x1B[1;1H");
                        self.render().await;
                    }
                    PageCommand::Help => Self::print_help(),
                    PageCommand::Quit => {
                        println!("Bye!");
                        break;
                    }
                    PageCommand::Unknown(cmd) => {
                        println!("Unknown command: {}", cmd);
                        println!("Type /help for available commands");
                    }
                },
                Ok(Signal::CtrlC) => {
                    println!("^C");
                    continue;
                }
                Ok(_) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    warn!("Line editor error: {}", err);
                    return Err(err);
                }
            }
        }

        Ok(())
    }

    fn line_editor(&self) -> Reedline {
        let editor = Reedline::create();
        let Some(path) = &self.history_path else {
            return editor;
        };

        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        match FileBackedHistory::with_file(HISTORY_CAPACITY, path.clone()) {
            Ok(history) => editor.with_history(Box::new(history)),
            Err(e) => {
                warn!("Could not open history file {}: {}", path.display(), e);
                editor
            }
        }
    }

    /// Draw the page and pass the current input through the guard
    /// (a passive render).
    async fn render(&mut self) -> SubmitOutcome {
        println!();
        println!("{}", ConsoleFormatter::header(TITLE, SUBTITLE, &EXAMPLES));
        Self::print_help();

        if !self.current_input.is_empty() {
            println!("{}: {}", INPUT_LABEL, self.current_input);
        }

        let outcome = self
            .use_case
            .handle_submit(
                &mut self.session,
                &self.current_input,
                false,
                self.surface.as_ref(),
            )
            .await;
        debug!("Passive render outcome: {:?}", outcome);
        outcome
    }

    /// The user pressed Enter.
    async fn submit(&mut self, question: String) -> SubmitOutcome {
        self.current_input = question;
        let outcome = self
            .use_case
            .handle_submit(
                &mut self.session,
                &self.current_input,
                true,
                self.surface.as_ref(),
            )
            .await;
        println!();
        outcome
    }

    fn print_help() {
        println!("Press Enter to ask. Commands:");
        println!("  /clear, /c        - Redraw the page");
        println!("  /help, /h, /?     - Show this help");
        println!("  /quit, /exit, /q  - Exit");
        println!();
    }
}
