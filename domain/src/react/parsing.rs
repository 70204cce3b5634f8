//! Parsing of ReAct-formatted model completions.
//!
//! The model is prompted to answer in the zero-shot ReAct format:
//!
//! ```text
//! Thought: I need current results
//! Action: web_search
//! Action Input: IPL match result yesterday
//! ```
//!
//! or, once it is done:
//!
//! ```text
//! Thought: I now know the final answer
//! Final Answer: Mumbai Indians won by 6 wickets.
//! ```
//!
//! Labels tolerate whitespace and step numbers (`Action 1 :`,
//! `Action 1 Input 1:`). Pure text matching, no I/O.

use super::step::ReactStep;
use thiserror::Error;

/// Marker that introduces the final answer.
pub const FINAL_ANSWER_LABEL: &str = "Final Answer:";

/// Completions that cannot be turned into a step.
///
/// The `Display` text is what the model sees as the observation, so it is
/// phrased as an instruction.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid Format: Missing 'Action Input:' after 'Action:'")]
    MissingActionInput,

    #[error(
        "Parsing LLM output produced both a final answer and a parse-able action. Give either an Action or a Final Answer, not both."
    )]
    FinalAnswerAndAction,
}

/// Observation fed back when the model produced neither an action nor an answer.
pub const MISSING_ACTION_MESSAGE: &str = "Invalid Format: Missing 'Action:' after 'Thought:'";

/// Parse one model completion into a [`ReactStep`].
///
/// - action and input present, no final answer: [`ReactStep::Invoke`]
/// - final answer present, no action: [`ReactStep::Conclude`] with the text
///   after the last `Final Answer:`
/// - neither: [`ReactStep::Reason`]
pub fn parse_react_output(text: &str) -> Result<ReactStep, ParseError> {
    let includes_answer = text.contains(FINAL_ANSWER_LABEL);

    if let Some((action_start, action_end)) = find_label(text, 0, &["Action"]) {
        let Some((input_start, input_end)) = find_label(text, action_end, &["Action", "Input"])
        else {
            if includes_answer {
                return Ok(conclude(text));
            }
            return Err(ParseError::MissingActionInput);
        };

        if includes_answer {
            return Err(ParseError::FinalAnswerAndAction);
        }

        let tool = text[action_end..input_start].trim().to_string();
        let input = text[input_end..]
            .trim()
            .trim_matches('"')
            .to_string();

        return Ok(ReactStep::Invoke {
            thought: clean_thought(&text[..action_start]),
            tool,
            input,
        });
    }

    if includes_answer {
        return Ok(conclude(text));
    }

    Ok(ReactStep::Reason {
        thought: clean_thought(text),
    })
}

fn conclude(text: &str) -> ReactStep {
    let label_pos = text.rfind(FINAL_ANSWER_LABEL).unwrap_or(0);
    let first_pos = text.find(FINAL_ANSWER_LABEL).unwrap_or(0);
    ReactStep::Conclude {
        thought: clean_thought(&text[..first_pos]),
        answer: text[label_pos + FINAL_ANSWER_LABEL.len()..].trim().to_string(),
    }
}

/// Strip a leading `Thought:` label and surrounding whitespace.
fn clean_thought(text: &str) -> String {
    let trimmed = text.trim();
    trimmed
        .strip_prefix("Thought:")
        .unwrap_or(trimmed)
        .trim()
        .to_string()
}

/// Find the first occurrence of a label made of `words` (each optionally
/// followed by whitespace and a step number) and terminated by `:`.
///
/// Returns `(label_start, position_after_colon)`.
fn find_label(text: &str, from: usize, words: &[&str]) -> Option<(usize, usize)> {
    let first = words.first()?;
    text[from..]
        .match_indices(first)
        .map(|(offset, _)| from + offset)
        .find_map(|start| match_label_at(text, start, words).map(|end| (start, end)))
}

fn match_label_at(text: &str, start: usize, words: &[&str]) -> Option<usize> {
    let mut pos = start;
    for (n, word) in words.iter().enumerate() {
        if n > 0 {
            pos = skip_separator(text, pos);
        }
        if !text[pos..].starts_with(word) {
            return None;
        }
        pos += word.len();
    }
    pos = skip_separator(text, pos);
    text[pos..].starts_with(':').then_some(pos + 1)
}

/// Skip `\s*\d*\s*`.
fn skip_separator(text: &str, pos: usize) -> usize {
    let pos = skip_while(text, pos, char::is_whitespace);
    let pos = skip_while(text, pos, |c| c.is_ascii_digit());
    skip_while(text, pos, char::is_whitespace)
}

fn skip_while(text: &str, pos: usize, pred: impl Fn(char) -> bool) -> usize {
    text[pos..]
        .char_indices()
        .find(|(_, c)| !pred(*c))
        .map(|(offset, _)| pos + offset)
        .unwrap_or(text.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_action() {
        let text = " I need to look up the latest result.\nAction: web_search\nAction Input: IPL match result yesterday";
        let step = parse_react_output(text).unwrap();
        assert_eq!(
            step,
            ReactStep::Invoke {
                thought: "I need to look up the latest result.".to_string(),
                tool: "web_search".to_string(),
                input: "IPL match result yesterday".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_numbered_labels_and_quoted_input() {
        let text = "Thought: search\nAction 1: web_search\nAction 1 Input 1: \"rust 2024 edition\"\n";
        match parse_react_output(text).unwrap() {
            ReactStep::Invoke { thought, tool, input } => {
                assert_eq!(thought, "search");
                assert_eq!(tool, "web_search");
                assert_eq!(input, "rust 2024 edition");
            }
            other => panic!("Expected Invoke, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_final_answer() {
        let text = " I now know the final answer\nFinal Answer: Mumbai Indians won by 6 wickets.";
        let step = parse_react_output(text).unwrap();
        assert_eq!(
            step,
            ReactStep::Conclude {
                thought: "I now know the final answer".to_string(),
                answer: "Mumbai Indians won by 6 wickets.".to_string(),
            }
        );
    }

    #[test]
    fn test_final_answer_keeps_multiline_text() {
        let text = "Final Answer: Line one.\nLine two.";
        match parse_react_output(text).unwrap() {
            ReactStep::Conclude { answer, .. } => assert_eq!(answer, "Line one.\nLine two."),
            other => panic!("Expected Conclude, got {:?}", other),
        }
    }

    #[test]
    fn test_answer_and_action_is_error() {
        let text = "Action: web_search\nAction Input: foo\nFinal Answer: bar";
        assert_eq!(
            parse_react_output(text),
            Err(ParseError::FinalAnswerAndAction)
        );
    }

    #[test]
    fn test_missing_action_input() {
        let text = "Thought: hmm\nAction: web_search\n";
        assert_eq!(
            parse_react_output(text),
            Err(ParseError::MissingActionInput)
        );
    }

    #[test]
    fn test_thought_only_is_reason() {
        let step = parse_react_output("I am not sure what to do next.").unwrap();
        assert_eq!(
            step,
            ReactStep::Reason {
                thought: "I am not sure what to do next.".to_string()
            }
        );
    }

    #[test]
    fn test_action_word_inside_thought_is_not_a_label() {
        let text = "The Action plan is unclear\nAction: web_search\nAction Input: plan";
        match parse_react_output(text).unwrap() {
            ReactStep::Invoke { tool, input, .. } => {
                assert_eq!(tool, "web_search");
                assert_eq!(input, "plan");
            }
            other => panic!("Expected Invoke, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_error_messages_are_instructions() {
        assert!(ParseError::MissingActionInput
            .to_string()
            .starts_with("Invalid Format"));
        assert!(MISSING_ACTION_MESSAGE.contains("Missing 'Action:'"));
    }
}
