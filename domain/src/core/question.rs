//! Question value object

use super::error::QueryError;
use serde::Serialize;

/// A question to be sent to the answer service (Value Object)
///
/// Always holds trimmed, non-empty text. Serializes as the request body
/// expected by the service: `{"question": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    question: String,
}

impl Question {
    /// Parse raw input from the question field.
    ///
    /// Leading and trailing whitespace is removed. No other validation is
    /// applied: there is no length limit and no content sanitization.
    pub fn parse(raw: &str) -> Result<Self, QueryError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(QueryError::EmptyQuestion);
        }
        Ok(Self {
            question: trimmed.to_string(),
        })
    }

    /// Get the question text
    pub fn content(&self) -> &str {
        &self.question
    }

    /// A prefix of the question for log lines, cut on a char boundary.
    pub fn preview(&self, max_bytes: usize) -> &str {
        let s = self.question.as_str();
        if s.len() <= max_bytes {
            return s;
        }
        let mut end = max_bytes;
        while end > 0 && !s.is_char_boundary(end) {
            end -= 1;
        }
        &s[..end]
    }
}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.question)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims() {
        let q = Question::parse("  What is Rust?\n").unwrap();
        assert_eq!(q.content(), "What is Rust?");
    }

    #[test]
    fn test_parse_rejects_empty_and_whitespace() {
        for raw in ["", " ", "\t\n", "   \r\n  "] {
            assert!(matches!(
                Question::parse(raw),
                Err(QueryError::EmptyQuestion)
            ));
        }
    }

    #[test]
    fn test_serializes_as_request_body() {
        let q = Question::parse(" hello ").unwrap();
        let json = serde_json::to_value(&q).unwrap();
        assert_eq!(json, serde_json::json!({ "question": "hello" }));
    }

    #[test]
    fn test_inner_whitespace_is_kept() {
        let q = Question::parse("a  b").unwrap();
        assert_eq!(q.content(), "a  b");
    }

    #[test]
    fn test_preview_multibyte_boundary() {
        let q = Question::parse("あのね").unwrap();
        assert_eq!(q.preview(4), "あ");
        assert_eq!(q.preview(100), "あのね");
    }
}
