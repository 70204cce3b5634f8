//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for one-shot answers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Colored, human-readable text
    #[default]
    Text,
    /// One JSON object on stdout
    Json,
}

/// CLI arguments for live-qa
#[derive(Parser, Debug)]
#[command(name = "liveqa")]
#[command(author, version, about = "Real-time Q&A with Gemini + DuckDuckGo")]
#[command(long_about = r#"
Ask about anything happening right now: news events, fresh facts, or recent
releases. Answers combine Google Gemini's reasoning with live DuckDuckGo
search results.

With a QUESTION (and without --interactive) the question is answered once and
the process exits. Otherwise an interactive page is opened; a QUESTION given
together with --interactive is answered as soon as the page opens.

The API key is read from the environment variable named by model.api_key_env
(default: GEMINI_API_KEY).

Configuration files are loaded from (in priority order):
1. LIVEQA_<SECTION>__<KEY>               Environment overrides
2. --config <path>                       Explicit config file
3. ./liveqa.toml                         Project-level config
4. ~/.config/live-qa/config.toml         Global config

Example:
  liveqa "Who won yesterday's IPL match?"
  liveqa -o json "Latest iPhone 16 specs leak?"
  liveqa -i --show-steps
"#)]
pub struct Cli {
    /// The question to ask
    pub question: Option<String>,

    /// Open the interactive page (even when a question is given)
    #[arg(short, long)]
    pub interactive: bool,

    /// Output format for one-shot answers
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: OutputFormat,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Print each reasoning step (thoughts, searches, results)
    #[arg(long)]
    pub show_steps: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

impl Cli {
    /// One-shot mode: a question was given and the page was not requested.
    pub fn is_one_shot(&self) -> bool {
        self.question.is_some() && !self.interactive
    }

    /// Tracing filter directive for the `-v` count.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_shot_question() {
        let cli = Cli::parse_from(["liveqa", "Who won yesterday's IPL match?"]);
        assert!(cli.is_one_shot());
        assert_eq!(cli.output, OutputFormat::Text);
        assert_eq!(cli.log_level(), "warn");
    }

    #[test]
    fn test_interactive_with_prefill() {
        let cli = Cli::parse_from(["liveqa", "-i", "-vv", "--show-steps", "news?"]);
        assert!(!cli.is_one_shot());
        assert_eq!(cli.question.as_deref(), Some("news?"));
        assert!(cli.show_steps);
        assert_eq!(cli.log_level(), "debug");
    }

    #[test]
    fn test_no_question_is_interactive() {
        let cli = Cli::parse_from(["liveqa", "-o", "json", "-q"]);
        assert!(!cli.is_one_shot());
        assert_eq!(cli.output, OutputFormat::Json);
        assert!(cli.quiet);
    }

    #[test]
    fn test_verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
