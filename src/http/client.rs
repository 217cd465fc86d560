//! reqwest-backed transport
//!
//! Provides the HTTP client every resource API runs on:
//! - Base URL joining
//! - Query-string or JSON body encoding of request parameters
//! - Bearer authentication
//! - Optional client-side rate limiting
//! - Status and body classification into crate errors
//!
//! No retries: a failed call fails the operation.

use super::rate_limit::{RateLimiter, RateLimiterConfig};
use super::transport::Transport;
use crate::auth::{AccessToken, Authenticator};
use crate::error::{Error, Result};
use crate::types::{Encoding, JsonObject, JsonValue, Method};
use async_trait::async_trait;
use reqwest::Client;
use std::collections::HashMap;
use std::time::Duration;
use tracing::debug;

/// Production API root
pub const DEFAULT_BASE_URL: &str = "https://api.artik.cloud/v1.1";

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Base URL for relative paths
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
    /// Rate limiter configuration
    pub rate_limit: Option<RateLimiterConfig>,
    /// Default headers for all requests
    pub default_headers: HashMap<String, String>,
    /// User agent string
    pub user_agent: String,
    /// Token sent with every request
    pub token: Option<AccessToken>,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            rate_limit: None,
            default_headers: HashMap::new(),
            user_agent: format!("artik-cloud/{}", env!("CARGO_PKG_VERSION")),
            token: None,
        }
    }
}

impl HttpClientConfig {
    /// Create a new config builder
    pub fn builder() -> HttpClientConfigBuilder {
        HttpClientConfigBuilder::default()
    }
}

/// Builder for HTTP client config
#[derive(Default)]
pub struct HttpClientConfigBuilder {
    config: HttpClientConfig,
}

impl HttpClientConfigBuilder {
    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set rate limiter
    pub fn rate_limit(mut self, config: RateLimiterConfig) -> Self {
        self.config.rate_limit = Some(config);
        self
    }

    /// Add a default header
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.default_headers.insert(key.into(), value.into());
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Set the access token
    pub fn token(mut self, token: AccessToken) -> Self {
        self.config.token = Some(token);
        self
    }

    /// Build the config
    pub fn build(self) -> HttpClientConfig {
        self.config
    }
}

/// HTTP client for the ARTIK Cloud API
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    config: HttpClientConfig,
    authenticator: Authenticator,
    rate_limiter: Option<RateLimiter>,
}

impl HttpClient {
    /// Create a client against the production API without a token
    pub fn new() -> Result<Self> {
        Self::with_config(HttpClientConfig::default())
    }

    /// Create a new HTTP client with custom configuration
    pub fn with_config(config: HttpClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        let rate_limiter = config
            .rate_limit
            .as_ref()
            .map(RateLimiter::new)
            .transpose()?;

        let authenticator = config
            .token
            .clone()
            .map(Authenticator::new)
            .unwrap_or_default();

        Ok(Self {
            client,
            config,
            authenticator,
            rate_limiter,
        })
    }

    /// Authenticator shared by this client and its clones
    pub fn authenticator(&self) -> &Authenticator {
        &self.authenticator
    }

    /// Check if rate limiting is enabled
    pub fn has_rate_limiter(&self) -> bool {
        self.rate_limiter.is_some()
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Build full URL from path
    fn build_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }

        let base = self.config.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }

    fn classify_send_error(&self, e: reqwest::Error) -> Error {
        if e.is_timeout() {
            return Error::Timeout {
                timeout_ms: self.config.timeout.as_millis() as u64,
            };
        }
        Error::Http(e)
    }
}

#[async_trait]
impl Transport for HttpClient {
    async fn request(
        &self,
        method: Method,
        path: &str,
        params: JsonObject,
        encoding: Encoding,
    ) -> Result<JsonObject> {
        let url = self.build_url(path);

        if let Some(ref limiter) = self.rate_limiter {
            limiter.wait().await;
        }

        let mut req = self.client.request(method.into(), &url);

        for (key, value) in &self.config.default_headers {
            req = req.header(key.as_str(), value.as_str());
        }

        match encoding {
            Encoding::Query => {
                let query = query_pairs(&params);
                if !query.is_empty() {
                    req = req.query(&query);
                }
            }
            Encoding::Json => {
                if !params.is_empty() {
                    req = req.json(&params);
                }
            }
        }

        req = self.authenticator.apply(req).await?;

        debug!("{} {}", method, url);
        let response = req.send().await.map_err(|e| self.classify_send_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            debug!("{} {} failed with {}", method, url, status.as_u16());
            return Err(Error::http_status(status.as_u16(), body));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| self.classify_send_error(e))?;
        parse_object(&body)
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("config", &self.config)
            .field("has_rate_limiter", &self.rate_limiter.is_some())
            .finish_non_exhaustive()
    }
}

/// Flatten parameters into query pairs
///
/// Nulls are dropped and arrays become comma-separated lists.
pub(crate) fn query_pairs(params: &JsonObject) -> Vec<(String, String)> {
    params
        .iter()
        .filter_map(|(key, value)| {
            let rendered = match value {
                JsonValue::Null => return None,
                JsonValue::Array(items) => items
                    .iter()
                    .map(scalar_to_string)
                    .collect::<Vec<_>>()
                    .join(","),
                other => scalar_to_string(other),
            };
            Some((key.clone(), rendered))
        })
        .collect()
}

fn scalar_to_string(value: &JsonValue) -> String {
    match value {
        JsonValue::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn parse_object(body: &[u8]) -> Result<JsonObject> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(JsonObject::new());
    }

    match serde_json::from_slice::<JsonValue>(body) {
        Ok(JsonValue::Object(object)) => Ok(object),
        Ok(other) => Err(Error::unexpected_format(format!(
            "expected a JSON object, got {}",
            json_kind(&other)
        ))),
        Err(e) => Err(Error::unexpected_format(format!(
            "response is not JSON: {e}"
        ))),
    }
}

fn json_kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "a boolean",
        JsonValue::Number(_) => "a number",
        JsonValue::String(_) => "a string",
        JsonValue::Array(_) => "an array",
        JsonValue::Object(_) => "an object",
    }
}
