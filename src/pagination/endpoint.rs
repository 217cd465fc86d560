//! Paged list endpoints bound to a transport

use super::envelope::Envelope;
use super::fetcher::PagedFetcher;
use super::types::{Page, PageRequest};
use crate::error::Result;
use crate::http::Transport;
use crate::types::{Encoding, JsonObject, JsonValue, Method};
use serde::de::DeserializeOwned;

/// A list resource: its path, its filters and where its items live
#[derive(Debug, Clone, PartialEq)]
pub struct ListEndpoint {
    path: String,
    filters: JsonObject,
    items_key: Option<&'static str>,
}

impl ListEndpoint {
    /// Create an endpoint for `path`
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            filters: JsonObject::new(),
            items_key: None,
        }
    }

    /// Add a query filter; `null` filters are not sent
    #[must_use]
    pub fn filter(mut self, key: impl Into<String>, value: impl Into<JsonValue>) -> Self {
        self.filters.insert(key.into(), value.into());
        self
    }

    /// Items are found at `data.<key>` instead of `data`
    #[must_use]
    pub fn nested(mut self, key: &'static str) -> Self {
        self.items_key = Some(key);
        self
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn filters(&self) -> &JsonObject {
        &self.filters
    }

    fn params(&self, request: PageRequest) -> JsonObject {
        let mut params = self.filters.clone();
        params.insert("count".to_string(), request.count.into());
        params.insert("offset".to_string(), request.offset.into());
        params
    }

    /// Fetch and parse one envelope
    pub async fn fetch_page<C>(&self, transport: &C, request: PageRequest) -> Result<Envelope>
    where
        C: Transport + ?Sized,
    {
        let response = transport
            .request(Method::GET, &self.path, self.params(request), Encoding::Query)
            .await?;
        Envelope::from_response(response, self.items_key)
    }

    /// Fetch one typed page
    pub async fn fetch_page_items<T, C>(&self, transport: &C, request: PageRequest) -> Result<Page<T>>
    where
        T: DeserializeOwned,
        C: Transport + ?Sized,
    {
        self.fetch_page(transport, request).await?.into_page()
    }

    /// Fetch every item of the collection
    pub async fn fetch_all<T, C>(&self, transport: &C, fetcher: &PagedFetcher) -> Result<Page<T>>
    where
        T: DeserializeOwned,
        C: Transport + ?Sized,
    {
        fetcher
            .fetch_all(|request| self.fetch_page(transport, request))
            .await
    }
}
