use serde::{Deserialize, Serialize};
use std::env;
use tracing::{debug, error, info, warn};

use crate::config::ConfigError;

/// Settings for the (stubbed) submission transport.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionConfig {
    /// Artificial latency of the stub, in milliseconds.
    pub stub_delay_ms: u64,
    /// Optional answer deadline, in milliseconds. `None` means wait forever.
    pub timeout_ms: Option<u64>,
}

impl SubmissionConfig {
    /// Create SubmissionConfig from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        info!("Loading submission configuration from environment variables");

        let stub_delay_ms = env::var("SUBMIT_STUB_DELAY_MS")
            .unwrap_or_else(|_| {
                warn!("SUBMIT_STUB_DELAY_MS not set, defaulting to 1500");
                "1500".to_string()
            })
            .parse::<u64>()
            .map_err(|_| {
                error!("Invalid SUBMIT_STUB_DELAY_MS value");
                ConfigError::ParseError("Invalid SUBMIT_STUB_DELAY_MS value".to_string())
            })?;
        debug!("Stub delay: {} ms", stub_delay_ms);

        let timeout_ms = match env::var("SUBMIT_TIMEOUT_MS") {
            Ok(raw) => Some(raw.parse::<u64>().map_err(|_| {
                error!("Invalid SUBMIT_TIMEOUT_MS value");
                ConfigError::ParseError("Invalid SUBMIT_TIMEOUT_MS value".to_string())
            })?),
            Err(_) => None,
        };
        debug!("Timeout: {:?} ms", timeout_ms);

        let config = SubmissionConfig {
            stub_delay_ms,
            timeout_ms,
        };
        config.validate()?;
        info!("Submission configuration loaded successfully");
        Ok(config)
    }

    /// Create SubmissionConfig for testing
    pub fn from_test_env() -> Self {
        SubmissionConfig {
            stub_delay_ms: 10,
            timeout_ms: None,
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.stub_delay_ms > 60_000 {
            error!("Stub delay exceeds one minute");
            return Err(ConfigError::ValidationError(
                "Stub delay cannot exceed 60000 ms".to_string(),
            ));
        }
        if self.timeout_ms == Some(0) {
            error!("Timeout is 0");
            return Err(ConfigError::ValidationError(
                "Timeout cannot be 0 ms".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for SubmissionConfig {
    fn default() -> Self {
        SubmissionConfig {
            stub_delay_ms: 1500,
            timeout_ms: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SubmissionConfig::default();
        assert_eq!(config.stub_delay_ms, 1500);
        assert_eq!(config.timeout_ms, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_test_config() {
        let config = SubmissionConfig::from_test_env();
        assert_eq!(config.stub_delay_ms, 10);
        assert_eq!(config.timeout_ms, None);
    }

    #[test]
    fn test_validate_rejects_excessive_delay() {
        let config = SubmissionConfig {
            stub_delay_ms: 120_000,
            timeout_ms: None,
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let config = SubmissionConfig {
            stub_delay_ms: 1500,
            timeout_ms: Some(0),
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_timeout() {
        let config = SubmissionConfig {
            stub_delay_ms: 1500,
            timeout_ms: Some(5_000),
        };
        assert!(config.validate().is_ok());
    }
}
