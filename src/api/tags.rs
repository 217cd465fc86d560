//! Tags API
//!
//! Neither call is paginated; the server returns the whole list under
//! `data.tags`.

use super::data_list;
use crate::error::Result;
use crate::http::Transport;
use crate::models::Tag;
use crate::types::{Encoding, JsonObject, Method};

async fn fetch<C: Transport + ?Sized>(transport: &C, path: &str) -> Result<Vec<Tag>> {
    let response = transport
        .request(Method::GET, path, JsonObject::new(), Encoding::Query)
        .await?;
    data_list(response, "tags")
}

/// All tags
pub async fn list<C: Transport + ?Sized>(transport: &C) -> Result<Vec<Tag>> {
    fetch(transport, "/tags").await
}

/// Tag categories
pub async fn categories<C: Transport + ?Sized>(transport: &C) -> Result<Vec<Tag>> {
    fetch(transport, "/tags/categories").await
}
