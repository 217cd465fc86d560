//! The transport seam
//!
//! Resource APIs and list endpoints only ever talk to a `Transport`, so tests
//! and alternative HTTP stacks can stand in for [`HttpClient`](super::HttpClient).

use crate::error::Result;
use crate::types::{Encoding, JsonObject, Method};
use async_trait::async_trait;
use std::sync::Arc;

/// Issues one API call and returns the decoded JSON object
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send `params` to `path` with the given method and encoding
    ///
    /// An empty response body yields an empty object.
    async fn request(
        &self,
        method: Method,
        path: &str,
        params: JsonObject,
        encoding: Encoding,
    ) -> Result<JsonObject>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn request(
        &self,
        method: Method,
        path: &str,
        params: JsonObject,
        encoding: Encoding,
    ) -> Result<JsonObject> {
        (**self).request(method, path, params, encoding).await
    }
}
