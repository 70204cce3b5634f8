//! Presentation layer for live-qa
//!
//! This crate contains CLI definitions, the console answer surface,
//! reasoning step display, and the interactive ask page.

pub mod cli;
pub mod config;
pub mod output;
pub mod page;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormat};
pub use config::ReplConfig;
pub use output::console::{ConsoleFormatter, ConsoleSurface};
pub use output::formatter::format_outcome_json;
pub use page::AskPage;
pub use progress::indicator::WorkingIndicator;
pub use progress::reporter::StepReporter;
