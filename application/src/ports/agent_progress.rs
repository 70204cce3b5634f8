//! Agent execution progress port.
//!
//! [`AgentProgressNotifier`] is an **output port** that the presentation layer
//! implements to display the reasoning loop as it runs. The interaction loop
//! does not need any of it; it only exists for `--show-steps` style output.
//!
//! All methods have default no-op implementations, so implementers only
//! need to override the callbacks they care about.

/// Progress notifier for the reasoning loop.
pub trait AgentProgressNotifier: Send + Sync {
    /// Called before each model completion (1-based).
    fn on_step_start(&self, _step: usize, _max_steps: usize) {}

    /// Called when the model records a reasoning step
    fn on_thought(&self, _thought: &str) {}

    /// Called when a tool is invoked
    fn on_tool_call(&self, _tool_name: &str, _input: &str) {}

    /// Called when a tool returns
    fn on_tool_result(&self, _tool_name: &str, _success: bool, _duration_ms: Option<u64>) {}

    /// Called when the model asked for a tool that does not exist
    fn on_tool_not_found(&self, _tool_name: &str, _available_tools: &[&str]) {}

    /// Called when a completion could not be parsed and feedback was sent back
    fn on_format_error(&self, _message: &str) {}

    /// Called once the model produced its final answer
    fn on_final_answer(&self, _answer: &str) {}
}

/// No-op progress notifier
pub struct NoAgentProgress;

impl AgentProgressNotifier for NoAgentProgress {}
