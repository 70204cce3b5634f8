//! Output formatting for the terminal page and one-shot mode.

pub mod console;
pub mod formatter;
