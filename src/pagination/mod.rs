//! Pagination module
//!
//! Offset/count pagination over the `{total, offset, count, data}` envelope.
//!
//! # Overview
//!
//! - [`Page`] holds an ordered run of items plus offset/total bookkeeping
//! - [`Envelope`] validates a raw list response
//! - [`PagedFetcher`] drives repeated page calls until the total is reached
//! - [`ListEndpoint`] binds a resource path and its filters to a transport

mod endpoint;
mod envelope;
mod fetcher;
mod types;

pub use endpoint::ListEndpoint;
pub use envelope::Envelope;
pub use fetcher::PagedFetcher;
pub use types::{Page, PageRequest, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

#[cfg(test)]
mod tests;
