//! Answer Service port
//!
//! Defines the interface for talking to the remote answer service.

use async_trait::async_trait;
use ragask_domain::{AnswerResult, Question, QueryError};
use serde::{Deserialize, Serialize};

/// Health report returned by the answer service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceHealth {
    pub status: String,
}

impl ServiceHealth {
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}

/// Gateway to the answer service
///
/// Implementations (adapters) live in the infrastructure layer. Every
/// failure is reported as a [`QueryError`] so the use case can render it
/// without knowing about the transport.
#[async_trait]
pub trait AnswerService: Send + Sync {
    /// Send one question and return the parsed answer.
    ///
    /// Issues exactly one request; no retries.
    async fn ask(&self, question: &Question) -> Result<AnswerResult, QueryError>;

    /// Query the service's health endpoint.
    async fn health(&self) -> Result<ServiceHealth, QueryError>;
}
