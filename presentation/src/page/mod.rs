//! Interactive single-page UI

pub mod repl;

pub use repl::AskPage;
