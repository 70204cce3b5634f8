//! Domain error types

use thiserror::Error;

/// Input validation errors, recovered locally by the interaction loop
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please type a question first.")]
    EmptyQuestion,
}

/// Domain-level errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid model: {0}")]
    InvalidModel(String),

    #[error("Temperature must be within [0.0, 1.0], got {0}")]
    InvalidTemperature(f32),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_question_message() {
        assert_eq!(
            ValidationError::EmptyQuestion.to_string(),
            "Please type a question first."
        );
    }

    #[test]
    fn test_temperature_error_message() {
        assert_eq!(
            DomainError::InvalidTemperature(1.5).to_string(),
            "Temperature must be within [0.0, 1.0], got 1.5"
        );
    }
}
