//! Zero-shot ReAct prompt

use crate::tool::entities::ToolDefinition;

/// Templates for the reasoning/acting loop
pub struct ReactPromptTemplate;

impl ReactPromptTemplate {
    /// Stop sequences that end a completion before the model invents an
    /// observation of its own.
    pub const STOP_SEQUENCES: [&'static str; 2] = ["\nObservation:", "\n\tObservation:"];

    fn prefix() -> &'static str {
        "Answer the following questions as best you can. You have access to the following tools:"
    }

    fn format_instructions(tool_names: &str) -> String {
        format!(
            r#"Use the following format:

Question: the input question you must answer
Thought: you should always think about what to do
Action: the action to take, should be one of [{}]
Action Input: the input to the action
Observation: the result of the action
... (this Thought/Action/Action Input/Observation can repeat N times)
Thought: I now know the final answer
Final Answer: the final answer to the original input question"#,
            tool_names
        )
    }

    /// Comma-separated tool names, as shown in format instructions and
    /// unknown-tool feedback.
    pub fn tool_names(tools: &[&ToolDefinition]) -> String {
        tools
            .iter()
            .map(|t| t.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Full prompt for one step.
    ///
    /// `scratchpad` is the rendered transcript of the previous steps and is
    /// appended directly after the final `Thought:`.
    pub fn render(question: &str, tools: &[&ToolDefinition], scratchpad: &str) -> String {
        let tool_lines = tools
            .iter()
            .map(|t| format!("{}: {}", t.name, t.description))
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            "{}\n\n{}\n\n{}\n\nBegin!\n\nQuestion: {}\nThought:{}",
            Self::prefix(),
            tool_lines,
            Self::format_instructions(&Self::tool_names(tools)),
            question,
            scratchpad
        )
    }

    /// Observation returned when the model names a tool that does not exist.
    pub fn invalid_tool(requested: &str, tools: &[&ToolDefinition]) -> String {
        format!(
            "{} is not a valid tool, try one of [{}].",
            requested,
            Self::tool_names(tools)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn search_tool() -> ToolDefinition {
        ToolDefinition::new("web_search", "Search the web for current events.")
    }

    #[test]
    fn test_render_contains_tools_and_question() {
        let tool = search_tool();
        let prompt = ReactPromptTemplate::render("Who won?", &[&tool], "");

        assert!(prompt.starts_with("Answer the following questions"));
        assert!(prompt.contains("web_search: Search the web for current events."));
        assert!(prompt.contains("should be one of [web_search]"));
        assert!(prompt.ends_with("Question: Who won?\nThought:"));
    }

    #[test]
    fn test_render_appends_scratchpad() {
        let tool = search_tool();
        let prompt = ReactPromptTemplate::render("q", &[&tool], " step\nObservation: x\nThought: ");
        assert!(prompt.ends_with("Thought: step\nObservation: x\nThought: "));
    }

    #[test]
    fn test_invalid_tool_message() {
        let tool = search_tool();
        assert_eq!(
            ReactPromptTemplate::invalid_tool("calculator", &[&tool]),
            "calculator is not a valid tool, try one of [web_search]."
        );
    }
}
