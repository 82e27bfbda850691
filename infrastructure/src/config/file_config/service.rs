//! Answer service configuration from TOML (`[service]` section)

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw service configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileServiceConfig {
    /// Base URL of the answer service; `/query` and `/health` are appended.
    pub base_url: String,
    /// Upper bound on one request, in seconds. `0` disables the timeout.
    pub timeout_seconds: u64,
    /// TCP connect timeout in seconds.
    pub connect_timeout_seconds: u64,
}

impl Default for FileServiceConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".to_string(),
            timeout_seconds: 60,
            connect_timeout_seconds: 10,
        }
    }
}

impl FileServiceConfig {
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_seconds > 0).then(|| Duration::from_secs(self.timeout_seconds))
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_timeout_disables() {
        let config = FileServiceConfig {
            timeout_seconds: 0,
            ..Default::default()
        };
        assert_eq!(config.timeout(), None);
        assert_eq!(
            FileServiceConfig::default().timeout(),
            Some(Duration::from_secs(60))
        );
    }
}
