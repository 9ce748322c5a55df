//! ADK backend configuration

use secrecy::Secret;
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Connection settings for the ADK API server
#[derive(Debug, Clone, Deserialize)]
pub struct AdkConfig {
    /// Base URL of the ADK API server
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Agent application whose sessions are listed
    #[serde(default = "default_app_name")]
    pub app_name: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Optional bearer token
    pub api_key: Option<Secret<String>>,
}

impl AdkConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate ADK configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ValidationError::InvalidAdkUrl);
        }
        if self.app_name.trim().is_empty() {
            return Err(ValidationError::MissingRequired("ADK__APP_NAME"));
        }
        if self.timeout_secs == 0 || self.timeout_secs > 300 {
            return Err(ValidationError::InvalidAdkTimeout);
        }
        Ok(())
    }
}

impl Default for AdkConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            app_name: default_app_name(),
            timeout_secs: default_timeout(),
            api_key: None,
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_app_name() -> String {
    "app".to_string()
}

fn default_timeout() -> u64 {
    30
}
