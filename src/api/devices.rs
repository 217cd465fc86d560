//! Devices API
//!
//! Device lookup, listing, registration and sharing.

use super::{body, delete_at, get_data, send_data};
use crate::error::Result;
use crate::http::Transport;
use crate::models::{Device, DeviceShare, ManifestVersionPolicy};
use crate::pagination::{ListEndpoint, Page, PageRequest, PagedFetcher};
use crate::types::{JsonObject, JsonValue, Method};
use serde::Serialize;

/// Filters for listing a user's devices
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeviceFilter {
    /// Include devices shared with the user
    pub include_shared_devices: bool,
    /// Include the `properties` object of each device
    pub include_properties: bool,
    /// Only devices owned by this user
    pub owner: Option<String>,
    /// Only devices of these device types
    pub dtids: Vec<String>,
}

/// A device to register
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDevice {
    pub uid: String,
    pub dtid: String,
    pub name: String,
    pub manifest_version: Option<i64>,
    pub manifest_version_policy: Option<ManifestVersionPolicy>,
}

impl NewDevice {
    pub fn new(uid: impl Into<String>, dtid: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            dtid: dtid.into(),
            name: name.into(),
            manifest_version: None,
            manifest_version_policy: None,
        }
    }
}

/// Fields to change on a device
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceUpdate {
    pub name: Option<String>,
    pub manifest_version: Option<i64>,
    pub manifest_version_policy: Option<ManifestVersionPolicy>,
}

fn user_devices(uid: &str, filter: &DeviceFilter) -> ListEndpoint {
    let mut endpoint = ListEndpoint::new(format!("/users/{uid}/devices"))
        .nested("devices")
        .filter("includeSharedDevices", filter.include_shared_devices)
        .filter("includeProperties", filter.include_properties);
    if let Some(owner) = &filter.owner {
        endpoint = endpoint.filter("owner", owner.as_str());
    }
    if !filter.dtids.is_empty() {
        endpoint = endpoint.filter("dtid", filter.dtids.clone());
    }
    endpoint
}

fn shares(id: &str) -> ListEndpoint {
    ListEndpoint::new(format!("/devices/{id}/shares")).nested("shares")
}

/// Get a device by id
pub async fn get<C: Transport + ?Sized>(
    transport: &C,
    id: &str,
    include_properties: bool,
) -> Result<Device> {
    let mut params = JsonObject::new();
    if include_properties {
        params.insert("includeProperties".to_string(), JsonValue::Bool(true));
    }
    get_data(transport, &format!("/devices/{id}"), params).await
}

/// One page of a user's devices
pub async fn list<C: Transport + ?Sized>(
    transport: &C,
    uid: &str,
    count: u32,
    offset: u64,
    filter: &DeviceFilter,
) -> Result<Page<Device>> {
    let request = PageRequest::new(offset, count)?;
    user_devices(uid, filter)
        .fetch_page_items(transport, request)
        .await
}

/// Every device of a user
pub async fn list_all<C: Transport + ?Sized>(
    transport: &C,
    uid: &str,
    filter: &DeviceFilter,
) -> Result<Page<Device>> {
    user_devices(uid, filter)
        .fetch_all(transport, &PagedFetcher::default())
        .await
}

/// Register a device
pub async fn create<C: Transport + ?Sized>(transport: &C, device: &NewDevice) -> Result<Device> {
    send_data(transport, Method::POST, "/devices", body(device)?).await
}

/// Update a device
pub async fn update<C: Transport + ?Sized>(
    transport: &C,
    id: &str,
    update: &DeviceUpdate,
) -> Result<Device> {
    send_data(transport, Method::PUT, &format!("/devices/{id}"), body(update)?).await
}

/// Delete a device
pub async fn delete<C: Transport + ?Sized>(transport: &C, id: &str) -> Result<()> {
    delete_at(transport, &format!("/devices/{id}")).await
}

/// One page of a device's shares
pub async fn list_shares<C: Transport + ?Sized>(
    transport: &C,
    id: &str,
    count: u32,
    offset: u64,
) -> Result<Page<DeviceShare>> {
    let request = PageRequest::new(offset, count)?;
    shares(id).fetch_page_items(transport, request).await
}

/// Every share of a device
pub async fn list_all_shares<C: Transport + ?Sized>(
    transport: &C,
    id: &str,
) -> Result<Page<DeviceShare>> {
    shares(id)
        .fetch_all(transport, &PagedFetcher::default())
        .await
}

/// Share a device with the user owning `email`
pub async fn share<C: Transport + ?Sized>(
    transport: &C,
    id: &str,
    email: &str,
) -> Result<DeviceShare> {
    let mut params = JsonObject::new();
    params.insert("email".to_string(), JsonValue::from(email));
    send_data(transport, Method::POST, &format!("/devices/{id}/shares"), params).await
}

/// Get one share of a device
pub async fn get_share<C: Transport + ?Sized>(
    transport: &C,
    id: &str,
    share_id: &str,
) -> Result<DeviceShare> {
    get_data(
        transport,
        &format!("/devices/{id}/shares/{share_id}"),
        JsonObject::new(),
    )
    .await
}

/// Revoke a share
pub async fn unshare<C: Transport + ?Sized>(transport: &C, id: &str, share_id: &str) -> Result<()> {
    delete_at(transport, &format!("/devices/{id}/shares/{share_id}")).await
}
