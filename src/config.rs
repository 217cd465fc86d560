//! Client configuration
//!
//! A small YAML file describing where the API lives and how to reach it:
//!
//! ```yaml
//! base_url: https://api.artik.cloud/v1.1
//! timeout_secs: 30
//! token: 1a2b3c...
//! rate_limit:
//!   requests_per_minute: 100
//!   burst: 10
//! ```

use crate::auth::AccessToken;
use crate::error::{Error, Result, ResultExt};
use crate::http::{HttpClientConfig, RateLimiterConfig, DEFAULT_BASE_URL};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;
use url::Url;

/// Settings for building an [`HttpClient`](crate::http::HttpClient)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClientConfig {
    /// API root, including the version segment
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Custom user agent
    #[serde(default)]
    pub user_agent: Option<String>,

    /// User access token
    #[serde(default)]
    pub token: Option<String>,

    /// Client-side rate limit
    #[serde(default)]
    pub rate_limit: Option<RateLimiterConfig>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            user_agent: None,
            token: None,
            rate_limit: None,
        }
    }
}

impl ClientConfig {
    /// Load and validate a config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file '{}'", path.display()))?;
        Self::from_yaml(&content)
    }

    /// Parse and validate YAML
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every field
    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.base_url)?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::invalid_value(
                "base_url",
                format!("unsupported scheme '{}'", url.scheme()),
            ));
        }

        if self.timeout_secs == 0 {
            return Err(Error::invalid_value("timeout_secs", "must be greater than 0"));
        }

        if matches!(&self.token, Some(token) if token.trim().is_empty()) {
            return Err(Error::invalid_value("token", "cannot be empty"));
        }

        if let Some(rate_limit) = &self.rate_limit {
            rate_limit.validate()?;
        }

        Ok(())
    }

    /// HTTP client settings for this config
    pub fn http_config(&self) -> HttpClientConfig {
        let mut builder = HttpClientConfig::builder()
            .base_url(&self.base_url)
            .timeout(Duration::from_secs(self.timeout_secs));

        if let Some(agent) = &self.user_agent {
            builder = builder.user_agent(agent);
        }
        if let Some(token) = &self.token {
            builder = builder.token(AccessToken::user(token));
        }
        if let Some(rate_limit) = self.rate_limit {
            builder = builder.rate_limit(rate_limit);
        }

        builder.build()
    }
}
