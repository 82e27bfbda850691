//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod output;
mod service;

pub use output::FileOutputConfig;
pub use service::FileServiceConfig;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("service.base_url is not a valid URL: {0}")]
    InvalidBaseUrl(String),

    #[error("service.base_url must use http or https, got '{0}'")]
    UnsupportedScheme(String),

    #[error("service.connect_timeout_seconds cannot be 0")]
    InvalidConnectTimeout,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Answer service connection settings
    pub service: FileServiceConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the configuration, stopping at the first problem.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        let url = reqwest::Url::parse(&self.service.base_url)
            .map_err(|e| ConfigValidationError::InvalidBaseUrl(e.to_string()))?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigValidationError::UnsupportedScheme(
                url.scheme().to_string(),
            ));
        }

        if self.service.connect_timeout_seconds == 0 {
            return Err(ConfigValidationError::InvalidConnectTimeout);
        }

        Ok(())
    }

    /// Render the effective configuration as TOML.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ragask_domain::OutputFormat;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[service]
base_url = "https://answers.example.com/api"
timeout_seconds = 15
connect_timeout_seconds = 3

[output]
format = "json"
color = false
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.service.base_url, "https://answers.example.com/api");
        assert_eq!(config.service.timeout_seconds, 15);
        assert_eq!(config.service.connect_timeout_seconds, 3);
        assert_eq!(config.output.format, Some(OutputFormat::Json));
        assert!(!config.output.color);
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[service]
timeout_seconds = 0
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.service.timeout_seconds, 0);
        // Defaults should apply
        assert_eq!(config.service.base_url, "http://127.0.0.1:8000");
        assert!(config.output.color);
        assert!(config.output.format.is_none());
    }

    #[test]
    fn test_validate_default_config() {
        assert_eq!(FileConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_validate_rejects_bad_urls() {
        let mut config = FileConfig::default();
        config.service.base_url = "not a url".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::InvalidBaseUrl(_))
        ));

        config.service.base_url = "ftp://example.com".to_string();
        assert_eq!(
            config.validate(),
            Err(ConfigValidationError::UnsupportedScheme("ftp".to_string()))
        );
    }

    #[test]
    fn test_validate_rejects_zero_connect_timeout() {
        let mut config = FileConfig::default();
        config.service.connect_timeout_seconds = 0;
        assert_eq!(
            config.validate(),
            Err(ConfigValidationError::InvalidConnectTimeout)
        );
    }

    #[test]
    fn test_toml_round_trip_of_defaults() {
        let rendered = FileConfig::default().to_toml_string().unwrap();
        assert!(rendered.contains("[service]"));
        let parsed: FileConfig = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed, FileConfig::default());
    }
}
