//! Client-side request throttling
//!
//! ARTIK Cloud enforces per-minute quotas; fetch-all walks can burn through
//! them quickly. A governor token bucket spaces requests out locally.

use crate::error::{Error, Result};
use governor::clock::DefaultClock;
use governor::middleware::NoOpMiddleware;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter as Governor};
use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;
use std::sync::Arc;

/// Configuration for rate limiting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateLimiterConfig {
    /// Sustained requests per minute
    pub requests_per_minute: u32,
    /// Requests allowed back to back before throttling kicks in
    #[serde(default = "default_burst")]
    pub burst: u32,
}

fn default_burst() -> u32 {
    10
}

impl Default for RateLimiterConfig {
    fn default() -> Self {
        Self {
            requests_per_minute: 100,
            burst: default_burst(),
        }
    }
}

impl RateLimiterConfig {
    /// Create a new rate limiter config
    pub fn new(requests_per_minute: u32, burst: u32) -> Self {
        Self {
            requests_per_minute,
            burst,
        }
    }

    fn quota(&self) -> Result<Quota> {
        let rate = NonZeroU32::new(self.requests_per_minute).ok_or_else(|| {
            Error::invalid_value("rate_limit.requests_per_minute", "must be greater than 0")
        })?;
        let burst = NonZeroU32::new(self.burst)
            .ok_or_else(|| Error::invalid_value("rate_limit.burst", "must be greater than 0"))?;
        Ok(Quota::per_minute(rate).allow_burst(burst))
    }

    /// Check the values without building a limiter
    pub fn validate(&self) -> Result<()> {
        self.quota().map(|_| ())
    }
}

/// Token bucket shared by every clone of a client
#[derive(Clone)]
pub struct RateLimiter {
    limiter: Arc<Governor<NotKeyed, InMemoryState, DefaultClock, NoOpMiddleware>>,
}

impl RateLimiter {
    /// Create a new rate limiter with the given config
    pub fn new(config: &RateLimiterConfig) -> Result<Self> {
        Ok(Self {
            limiter: Arc::new(Governor::direct(config.quota()?)),
        })
    }

    /// Wait until a request may be sent
    pub async fn wait(&self) {
        self.limiter.until_ready().await;
    }

    /// Take a permit if one is available right now
    pub fn try_acquire(&self) -> bool {
        self.limiter.check().is_ok()
    }
}

impl std::fmt::Debug for RateLimiter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RateLimiter").finish()
    }
}
