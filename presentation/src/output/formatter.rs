//! JSON output for one-shot mode

use liveqa_application::SubmitOutcome;
use serde_json::json;

/// Serialize a submission outcome as a single JSON object.
///
/// ```json
/// {"question":"...","status":"answered","answer":"..."}
/// {"question":"...","status":"failed","category":"network","hint":"...","error":"..."}
/// ```
pub fn format_outcome_json(question: &str, outcome: &SubmitOutcome) -> String {
    let value = match outcome {
        SubmitOutcome::Answered(answer) => json!({
            "question": question,
            "status": "answered",
            "answer": answer,
        }),
        SubmitOutcome::ValidationFailed(e) => json!({
            "question": question,
            "status": "invalid",
            "error": e.to_string(),
        }),
        SubmitOutcome::Failed { category, detail } => json!({
            "question": question,
            "status": "failed",
            "category": category,
            "hint": category.hint(),
            "error": detail,
        }),
        SubmitOutcome::Skipped => json!({
            "question": question,
            "status": "skipped",
        }),
    };
    serde_json::to_string_pretty(&value).unwrap_or_else(|_| "{}".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use liveqa_application::ErrorCategory;
    use liveqa_domain::ValidationError;

    fn parse(s: &str) -> serde_json::Value {
        serde_json::from_str(s).unwrap()
    }

    #[test]
    fn test_answered() {
        let value = parse(&format_outcome_json(
            "Who won?",
            &SubmitOutcome::Answered("MI".to_string()),
        ));
        assert_eq!(value["status"], "answered");
        assert_eq!(value["answer"], "MI");
        assert_eq!(value["question"], "Who won?");
    }

    #[test]
    fn test_failed_carries_category() {
        let value = parse(&format_outcome_json(
            "q",
            &SubmitOutcome::Failed {
                category: ErrorCategory::Authentication,
                detail: "bad key".to_string(),
            },
        ));
        assert_eq!(value["status"], "failed");
        assert_eq!(value["category"], "authentication");
        assert!(value["hint"].is_string());
        assert_eq!(value["error"], "bad key");
    }

    #[test]
    fn test_invalid() {
        let value = parse(&format_outcome_json(
            "",
            &SubmitOutcome::ValidationFailed(ValidationError::EmptyQuestion),
        ));
        assert_eq!(value["status"], "invalid");
        assert_eq!(value["error"], "Please type a question first.");
    }
}
