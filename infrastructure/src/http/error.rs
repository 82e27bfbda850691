//! Error types for building the HTTP adapter

use thiserror::Error;

/// Errors raised while constructing an [`HttpAnswerService`](super::HttpAnswerService).
///
/// Request-time failures are not represented here; those are reported
/// through the port as `QueryError`.
#[derive(Error, Debug)]
pub enum HttpSetupError {
    #[error("Invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("Failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}
