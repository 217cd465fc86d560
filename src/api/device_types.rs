//! Device types API

use super::get_data;
use crate::error::Result;
use crate::http::Transport;
use crate::models::DeviceType;
use crate::pagination::{ListEndpoint, Page, PageRequest, PagedFetcher};
use crate::types::JsonObject;

/// Filters for listing device types
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeviceTypeFilter {
    /// Name substring
    pub name: Option<String>,
    /// Only device types carrying all of these tags
    pub tags: Vec<String>,
}

fn device_types(filter: &DeviceTypeFilter) -> ListEndpoint {
    let mut endpoint = ListEndpoint::new("/devicetypes").nested("deviceTypes");
    if let Some(name) = &filter.name {
        endpoint = endpoint.filter("name", name.as_str());
    }
    if !filter.tags.is_empty() {
        endpoint = endpoint.filter("tags", filter.tags.clone());
    }
    endpoint
}

/// Get a device type by id
pub async fn get<C: Transport + ?Sized>(transport: &C, id: &str) -> Result<DeviceType> {
    get_data(transport, &format!("/devicetypes/{id}"), JsonObject::new()).await
}

/// One page of device types
pub async fn list<C: Transport + ?Sized>(
    transport: &C,
    count: u32,
    offset: u64,
    filter: &DeviceTypeFilter,
) -> Result<Page<DeviceType>> {
    let request = PageRequest::new(offset, count)?;
    device_types(filter)
        .fetch_page_items(transport, request)
        .await
}

/// Every device type matching `filter`
pub async fn list_all<C: Transport + ?Sized>(
    transport: &C,
    filter: &DeviceTypeFilter,
) -> Result<Page<DeviceType>> {
    device_types(filter)
        .fetch_all(transport, &PagedFetcher::default())
        .await
}
