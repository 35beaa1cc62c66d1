//! Client configuration: API key, base URL, timeout.

use cogmem_types::{CogmemError, Result};
use std::fmt;
use std::time::Duration;

/// Hosted CogmemAi service.
pub const DEFAULT_BASE_URL: &str = "https://hifriendbot.com/wp-json/hifriendbot/v1";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
/// Every issued API key starts with this prefix.
pub const API_KEY_PREFIX: &str = "cm_";

const API_NAMESPACE: &str = "cogmemai";

#[derive(Clone)]
pub struct ClientConfig {
    pub api_key: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Create from environment variables:
    /// `COGMEMAI_API_KEY` (required), `COGMEMAI_BASE_URL`, `COGMEMAI_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let api_key = lookup("COGMEMAI_API_KEY").ok_or_else(|| {
            CogmemError::Configuration("COGMEMAI_API_KEY is not set".to_string())
        })?;
        let mut config = Self::new(api_key);
        if let Some(url) = lookup("COGMEMAI_BASE_URL") {
            config.base_url = url;
        }
        if let Some(secs) = lookup("COGMEMAI_TIMEOUT_SECS") {
            let secs: u64 = secs.trim().parse().map_err(|_| {
                CogmemError::Configuration(format!(
                    "COGMEMAI_TIMEOUT_SECS must be a whole number of seconds, got {:?}",
                    secs
                ))
            })?;
            config.timeout = Duration::from_secs(secs);
        }
        Ok(config)
    }

    pub(crate) fn validate(&self) -> Result<()> {
        let key = self.api_key.trim();
        if key.is_empty() {
            return Err(CogmemError::Configuration(
                "API key must not be empty".to_string(),
            ));
        }
        if !key.starts_with(API_KEY_PREFIX) {
            return Err(CogmemError::Configuration(format!(
                "API key must start with '{}'",
                API_KEY_PREFIX
            )));
        }
        let url = reqwest::Url::parse(self.base_url.trim()).map_err(|e| {
            CogmemError::Configuration(format!("invalid base URL {:?}: {}", self.base_url, e))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(CogmemError::Configuration(format!(
                "base URL must use http or https, got {:?}",
                url.scheme()
            )));
        }
        if self.timeout.is_zero() {
            return Err(CogmemError::Configuration(
                "timeout must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Root every endpoint path is appended to.
    pub(crate) fn api_root(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim().trim_end_matches('/'),
            API_NAMESPACE
        )
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}
