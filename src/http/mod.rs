//! HTTP module
//!
//! The [`Transport`] trait every API call goes through, and [`HttpClient`],
//! its reqwest implementation.
//!
//! # Features
//!
//! - **Parameter encoding**: query string or JSON body per call
//! - **Authentication**: bearer tokens via the auth module
//! - **Rate Limiting**: optional token bucket using governor
//! - **Error classification**: status codes, timeouts, malformed bodies

mod client;
mod rate_limit;
mod transport;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder, DEFAULT_BASE_URL};
pub use rate_limit::{RateLimiter, RateLimiterConfig};
pub use transport::Transport;

#[cfg(test)]
mod tests;
