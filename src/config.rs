//! Breach checker configuration.

use std::time::Duration;
use thiserror::Error;

/// Default range endpoint. The prefix is appended as a path segment.
pub const DEFAULT_API_URL: &str = "https://api.pwnedpasswords.com/range";

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(5000);

pub const API_URL_VAR: &str = "PWD_RANGE_API_URL";
pub const TIMEOUT_VAR: &str = "PWD_RANGE_TIMEOUT_MS";
pub const PADDING_VAR: &str = "PWD_RANGE_PADDING";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid range API URL: {0}")]
    InvalidUrl(String),
    #[error("Invalid value for {var}: {value}")]
    InvalidValue { var: &'static str, value: String },
}

/// Settings for the HTTP range source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckerConfig {
    /// Base URL without a trailing slash.
    pub api_url: String,
    pub timeout: Duration,
    /// Ask the service to pad responses with zero-count records.
    pub add_padding: bool,
    pub user_agent: String,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            add_padding: true,
            user_agent: concat!("pwd-guard/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl CheckerConfig {
    /// Builds a configuration from environment variables, falling back to
    /// defaults for anything unset.
    ///
    /// # Environment Variables
    ///
    /// - `PWD_RANGE_API_URL`: range endpoint (default: `https://api.pwnedpasswords.com/range`)
    /// - `PWD_RANGE_TIMEOUT_MS`: request timeout in milliseconds (default: 5000)
    /// - `PWD_RANGE_PADDING`: `true` or `false` (default: `true`)
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to a value that cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Ok(url) = std::env::var(API_URL_VAR) {
            config = config.with_api_url(url)?;
        }

        if let Ok(value) = std::env::var(TIMEOUT_VAR) {
            let millis = value
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|ms| *ms > 0)
                .ok_or_else(|| ConfigError::InvalidValue {
                    var: TIMEOUT_VAR,
                    value: value.clone(),
                })?;
            config.timeout = Duration::from_millis(millis);
        }

        if let Ok(value) = std::env::var(PADDING_VAR) {
            config.add_padding = parse_bool(PADDING_VAR, &value)?;
        }

        Ok(config)
    }

    /// Replaces the endpoint. The URL must be http(s); a trailing `/` is dropped.
    pub fn with_api_url(mut self, url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let trimmed = url.trim().trim_end_matches('/');
        let has_scheme = trimmed.starts_with("https://") || trimmed.starts_with("http://");
        let has_host = trimmed.split_once("://").is_some_and(|(_, rest)| !rest.is_empty());
        if !has_scheme || !has_host {
            return Err(ConfigError::InvalidUrl(url));
        }
        self.api_url = trimmed.to_string();
        Ok(self)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

fn parse_bool(var: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            var,
            value: value.to_string(),
        }),
    }
}
