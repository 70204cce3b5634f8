//! Question value object

use super::error::ValidationError;
use serde::{Deserialize, Serialize};

/// A question to be answered by the agent (Value Object)
///
/// Always non-empty after trimming. The original text is kept as typed;
/// only the emptiness check looks at the trimmed form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Question {
    content: String,
}

impl Question {
    /// Try to create a new question, rejecting empty or whitespace-only input
    pub fn try_new(content: impl Into<String>) -> Result<Self, ValidationError> {
        let content = content.into();
        if content.trim().is_empty() {
            Err(ValidationError::EmptyQuestion)
        } else {
            Ok(Self { content })
        }
    }

    /// Get the question content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Consume and return the inner content
    pub fn into_content(self) -> String {
        self.content
    }
}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}

impl TryFrom<String> for Question {
    type Error = ValidationError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Question::try_new(s)
    }
}

impl From<Question> for String {
    fn from(q: Question) -> Self {
        q.content
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_creation() {
        let q = Question::try_new("Who won yesterday's IPL match?").unwrap();
        assert_eq!(q.content(), "Who won yesterday's IPL match?");
    }

    #[test]
    fn test_try_new_empty() {
        assert_eq!(Question::try_new(""), Err(ValidationError::EmptyQuestion));
        assert_eq!(
            Question::try_new("  \t\n "),
            Err(ValidationError::EmptyQuestion)
        );
    }

    #[test]
    fn test_content_is_not_trimmed() {
        let q = Question::try_new("  padded  ").unwrap();
        assert_eq!(q.content(), "  padded  ");
    }

    #[test]
    fn test_deserialize_rejects_empty() {
        assert!(serde_json::from_str::<Question>("\"What is Rust?\"").is_ok());
        assert!(serde_json::from_str::<Question>("\"   \"").is_err());
    }
}
