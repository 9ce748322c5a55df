//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `CHAT_SESSIONS` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use chat_sessions::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("ADK backend at {}", config.adk.base_url);
//! ```

mod adk;
mod error;
mod server;

pub use adk::AdkConfig;
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a runnable
/// development setup.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// ADK backend connection
    #[serde(default)]
    pub adk: AdkConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `CHAT_SESSIONS` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `CHAT_SESSIONS__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `CHAT_SESSIONS__ADK__BASE_URL=...` -> `adk.base_url = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("CHAT_SESSIONS")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.adk.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Env vars are process-global
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn clear_env() {
        env::remove_var("CHAT_SESSIONS__SERVER__PORT");
        env::remove_var("CHAT_SESSIONS__SERVER__ENVIRONMENT");
        env::remove_var("CHAT_SESSIONS__ADK__BASE_URL");
        env::remove_var("CHAT_SESSIONS__ADK__APP_NAME");
        env::remove_var("CHAT_SESSIONS__ADK__TIMEOUT_SECS");
    }

    #[test]
    fn test_load_with_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.adk.base_url, "http://localhost:8000");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("CHAT_SESSIONS__ADK__BASE_URL", "https://adk.example.com");
        env::set_var("CHAT_SESSIONS__ADK__APP_NAME", "support_agent");
        env::set_var("CHAT_SESSIONS__ADK__TIMEOUT_SECS", "10");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.adk.base_url, "https://adk.example.com");
        assert_eq!(config.adk.app_name, "support_agent");
        assert_eq!(config.adk.timeout_secs, 10);
    }

    #[test]
    fn test_is_production() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("CHAT_SESSIONS__SERVER__ENVIRONMENT", "production");
        let result = AppConfig::load();
        clear_env();

        assert!(result.unwrap().is_production());
    }

    #[test]
    fn test_custom_server_port() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("CHAT_SESSIONS__SERVER__PORT", "3000");
        let result = AppConfig::load();
        clear_env();

        assert_eq!(result.unwrap().server.port, 3000);
    }

    #[test]
    fn test_validate_rejects_bad_adk_url() {
        let config = AppConfig {
            adk: AdkConfig {
                base_url: "localhost:8000".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidAdkUrl));
    }
}
