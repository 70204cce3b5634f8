//! ReAct (reason + act) building blocks.
//!
//! Pure logic only: parsing model completions into [`step::ReactStep`]s and
//! keeping the per-question [`scratchpad::Scratchpad`]. The loop that drives
//! them lives in the application layer.

pub mod parsing;
pub mod scratchpad;
pub mod step;
