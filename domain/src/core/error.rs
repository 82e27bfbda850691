//! Query error types

use std::time::Duration;
use thiserror::Error;

/// Everything that can go wrong while asking a question.
///
/// Only [`QueryError::EmptyQuestion`] is reported differently to the user;
/// every other variant is rendered the same way, with [`Display`] output as
/// the detail text.
///
/// [`Display`]: std::fmt::Display
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("Question is empty")]
    EmptyQuestion,

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Server returned {status}")]
    Server { status: u16 },

    #[error("Invalid response: {0}")]
    Parse(String),

    #[error("Request timed out after {}", format_limit(.0))]
    Timeout(Duration),

    #[error("Request cancelled")]
    Cancelled,
}

impl QueryError {
    /// Short machine-readable kind, used in log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            QueryError::EmptyQuestion => "validation",
            QueryError::Transport(_) => "transport",
            QueryError::Server { .. } => "server",
            QueryError::Parse(_) => "parse",
            QueryError::Timeout(_) => "timeout",
            QueryError::Cancelled => "cancelled",
        }
    }
}

/// Whole seconds as `30s`, anything finer as milliseconds.
fn format_limit(limit: &Duration) -> String {
    if limit.subsec_nanos() == 0 {
        format!("{}s", limit.as_secs())
    } else {
        format!("{}ms", limit.as_millis())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_error_mentions_status() {
        let error = QueryError::Server { status: 500 };
        assert_eq!(error.to_string(), "Server returned 500");
    }

    #[test]
    fn test_timeout_display() {
        let error = QueryError::Timeout(Duration::from_secs(30));
        assert_eq!(error.to_string(), "Request timed out after 30s");
    }

    #[test]
    fn test_sub_second_timeout_display() {
        let error = QueryError::Timeout(Duration::from_millis(250));
        assert_eq!(error.to_string(), "Request timed out after 250ms");

        let error = QueryError::Timeout(Duration::from_millis(1500));
        assert_eq!(error.to_string(), "Request timed out after 1500ms");
    }

    #[test]
    fn test_kind() {
        assert_eq!(QueryError::Parse("x".into()).kind(), "parse");
        assert_eq!(QueryError::Server { status: 502 }.kind(), "server");
    }
}
