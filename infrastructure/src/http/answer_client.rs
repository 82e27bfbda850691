//! reqwest-backed answer service client

use super::error::HttpSetupError;
use crate::config::FileServiceConfig;
use async_trait::async_trait;
use ragask_application::{AnswerService, ServiceHealth};
use ragask_domain::{AnswerResult, Question, QueryError};
use std::time::Duration;
use tracing::debug;

const USER_AGENT: &str = concat!("ragask/", env!("CARGO_PKG_VERSION"));

/// Answer service reached over HTTP.
///
/// - `POST {base_url}/query` with `{"question": "..."}`
/// - `GET {base_url}/health`
///
/// Any non-2xx status is a [`QueryError::Server`], whatever the body says.
#[derive(Debug, Clone)]
pub struct HttpAnswerService {
    client: reqwest::Client,
    base_url: String,
    health_timeout: Option<Duration>,
}

impl HttpAnswerService {
    /// Create a client with default connection settings.
    pub fn new(base_url: &str) -> Result<Self, HttpSetupError> {
        let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
        Self::with_client(client, base_url)
    }

    /// Create a client from the `[service]` config section.
    ///
    /// The connect timeout is applied to the client. The request timeout
    /// bounds `health` here; for `ask` it is enforced by the use case.
    pub fn from_config(config: &FileServiceConfig) -> Result<Self, HttpSetupError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .connect_timeout(config.connect_timeout())
            .build()?;
        Ok(Self::with_client(client, &config.base_url)?.with_health_timeout(config.timeout()))
    }

    /// Wrap an existing `reqwest::Client`.
    pub fn with_client(client: reqwest::Client, base_url: &str) -> Result<Self, HttpSetupError> {
        let invalid = |reason: String| HttpSetupError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason,
        };

        let url = reqwest::Url::parse(base_url).map_err(|e| invalid(e.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(invalid(format!("unsupported scheme '{}'", url.scheme())));
        }

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            health_timeout: None,
        })
    }

    /// Upper bound on a whole `GET /health` exchange. `None` waits forever.
    pub fn with_health_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.health_timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }
}

#[async_trait]
impl AnswerService for HttpAnswerService {
    async fn ask(&self, question: &Question) -> Result<AnswerResult, QueryError> {
        let url = self.endpoint("query");
        debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .json(question)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        debug!("POST {} -> {}", url, status.as_u16());
        if !status.is_success() {
            return Err(QueryError::Server {
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(transport_error)?;
        AnswerResult::from_json(&body).map_err(|e| QueryError::Parse(e.to_string()))
    }

    async fn health(&self) -> Result<ServiceHealth, QueryError> {
        let url = self.endpoint("health");
        debug!("GET {}", url);

        let mut request = self.client.get(&url);
        if let Some(limit) = self.health_timeout {
            request = request.timeout(limit);
        }

        let response = request.send().await.map_err(|e| match self.health_timeout {
            Some(limit) if e.is_timeout() => QueryError::Timeout(limit),
            _ => transport_error(e),
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(QueryError::Server {
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(|e| match self.health_timeout {
            Some(limit) if e.is_timeout() => QueryError::Timeout(limit),
            _ => transport_error(e),
        })?;
        serde_json::from_str(&body).map_err(|e| QueryError::Parse(e.to_string()))
    }
}

/// Flatten a reqwest error and its source chain into one detail string.
fn transport_error(error: reqwest::Error) -> QueryError {
    let mut detail = error.to_string();
    let mut source = std::error::Error::source(&error);
    while let Some(cause) = source {
        detail.push_str(": ");
        detail.push_str(&cause.to_string());
        source = cause.source();
    }
    QueryError::Transport(detail)
}
