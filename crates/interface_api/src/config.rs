//! API configuration

use serde::Deserialize;

use core_kernel::CoreError;

/// API configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// JWT secret for session tokens
    pub jwt_secret: String,
    /// Session token lifetime in seconds
    pub jwt_expiration_secs: u64,
    /// Log level
    pub log_level: String,
    /// Largest accepted request body, uploads included
    pub max_upload_bytes: usize,
    /// Username accepted by the demo login
    pub demo_username: String,
    /// Password accepted by the demo login
    pub demo_password: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            jwt_secret: "change-me-in-production".to_string(),
            jwt_expiration_secs: 3600,
            log_level: "info".to_string(),
            max_upload_bytes: 10 * 1024 * 1024,
            demo_username: "demo".to_string(),
            demo_password: "demo".to_string(),
        }
    }
}

impl ApiConfig {
    /// Loads configuration from `API_`-prefixed environment variables.
    ///
    /// Variables that are not set keep their default value.
    /// Any variable that fails to parse fails the whole load; the caller
    /// must not fall back to defaults for the remaining settings.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        Self::from_environment(config::Environment::with_prefix("API"))
    }

    /// Same as [`ApiConfig::from_env`], reading the given variables instead
    /// of the process environment
    pub fn from_vars(vars: config::Map<String, String>) -> Result<Self, config::ConfigError> {
        Self::from_environment(config::Environment::with_prefix("API").source(Some(vars)))
    }

    fn from_environment(environment: config::Environment) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(environment)
            .build()?
            .try_deserialize()
    }

    /// Checks values that would make the server unusable
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.jwt_secret.is_empty() {
            return Err(CoreError::configuration("jwt_secret must not be empty"));
        }
        if self.jwt_expiration_secs == 0 {
            return Err(CoreError::configuration("jwt_expiration_secs must be positive"));
        }
        if self.max_upload_bytes == 0 {
            return Err(CoreError::configuration("max_upload_bytes must be positive"));
        }
        Ok(())
    }

    /// Returns the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
