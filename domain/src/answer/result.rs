//! Response body of the answer service

use serde::{Deserialize, Serialize};

/// Loosely typed answer returned by the service.
///
/// Both fields are optional: a missing key and an explicit `null` both
/// deserialize to `None`. Unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerResult {
    /// Primary result text
    #[serde(default)]
    pub answer: Option<String>,
    /// Supplementary metadata or explanation
    #[serde(default)]
    pub info: Option<String>,
}

impl AnswerResult {
    pub fn new(answer: impl Into<String>, info: impl Into<String>) -> Self {
        Self {
            answer: Some(answer.into()),
            info: Some(info.into()),
        }
    }

    /// Parse a response body.
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_body() {
        let result = AnswerResult::from_json(r#"{"answer":"42","info":"because"}"#).unwrap();
        assert_eq!(result, AnswerResult::new("42", "because"));
    }

    #[test]
    fn test_empty_object() {
        let result = AnswerResult::from_json("{}").unwrap();
        assert_eq!(result.answer, None);
        assert_eq!(result.info, None);
    }

    #[test]
    fn test_null_fields_and_extra_keys() {
        let result =
            AnswerResult::from_json(r#"{"answer":null,"info":"x","sources":[1,2]}"#).unwrap();
        assert_eq!(result.answer, None);
        assert_eq!(result.info.as_deref(), Some("x"));
    }

    #[test]
    fn test_rejects_non_object_and_garbage() {
        assert!(AnswerResult::from_json("not json").is_err());
        assert!(AnswerResult::from_json("\"just a string\"").is_err());
        assert!(AnswerResult::from_json("null").is_err());
        assert!(AnswerResult::from_json("").is_err());
    }

    #[test]
    fn test_rejects_non_string_answer() {
        assert!(AnswerResult::from_json(r#"{"answer":42}"#).is_err());
    }
}
