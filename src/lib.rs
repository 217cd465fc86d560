// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::unused_self)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # ARTIK Cloud client
//!
//! Typed access to the ARTIK Cloud IoT REST API.
//!
//! ## Features
//!
//! - **Resource APIs**: rules, devices, device types, tags and messages
//! - **Fetch-all pagination**: walks `{total, offset, count, data}` pages until the collection is complete
//! - **Strict validation**: declared counts and every item are checked before a page is merged
//! - **Bearer auth**: user, application and device tokens
//! - **Client-side rate limiting**: optional governor token bucket
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use artik_cloud::api::rules::{self, RuleFilter};
//! use artik_cloud::config::ClientConfig;
//! use artik_cloud::http::HttpClient;
//!
//! #[tokio::main]
//! async fn main() -> artik_cloud::Result<()> {
//!     let config = ClientConfig::load("artik.yaml")?;
//!     let client = HttpClient::with_config(config.http_config())?;
//!
//!     let page = rules::list_all(&client, "my-user-id", &RuleFilter::default()).await?;
//!     for rule in &page {
//!         println!("{:?}", rule.name);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  api::{rules, devices, device_types, tags, messages}        │
//! └───────────────┬──────────────────────────────┬──────────────┘
//!                 │ single calls                 │ list / list_all
//!                 │                ┌─────────────┴──────────────┐
//!                 │                │ ListEndpoint → PagedFetcher │
//!                 │                │ Envelope → Page<T>          │
//!                 │                └─────────────┬──────────────┘
//! ┌───────────────┴──────────────────────────────┴──────────────┐
//! │  http::Transport  (HttpClient: reqwest, auth, rate limit)   │
//! └─────────────────────────────────────────────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the client
pub mod error;

/// Common types and type aliases
pub mod types;

/// Access tokens
pub mod auth;

/// HTTP transport with rate limiting
pub mod http;

/// Offset/count pagination
pub mod pagination;

/// Resource models
pub mod models;

/// Resource APIs
pub mod api;

/// Client configuration
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::ClientConfig;
pub use error::{Error, Result};
pub use http::{HttpClient, Transport};
pub use pagination::{Page, PagedFetcher};
pub use types::*;
