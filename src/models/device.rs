//! Devices and device shares

use crate::types::{JsonObject, Timestamp};
use serde::{Deserialize, Serialize};

/// Which manifest version a device follows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ManifestVersionPolicy {
    /// Always the newest manifest of the device type
    Latest,
    /// The version pinned in `manifest_version`
    Default,
    /// A policy this client does not know
    #[serde(other)]
    Unknown,
}

/// Cloud connector authorization state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CloudAuthorization {
    NoAuthorization,
    Unauthorized,
    Authorized,
    #[serde(other)]
    Unknown,
}

/// A device registered to a user
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
    /// Device type id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dtid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manifest_version: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manifest_version_policy: Option<ManifestVersionPolicy>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub need_provider_auth: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cloud_authorization: Option<CloudAuthorization>,
    /// Only present when requested with `includeProperties`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<JsonObject>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_on: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connected: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certificate_info: Option<JsonObject>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certificate_signature: Option<String>,
    /// External id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider_credentials: Option<JsonObject>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_type_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_type_is_published: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_type_is_protected: Option<bool>,
    /// Share id when another user shared this device with the caller
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shared_with_me: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shared_with_others: Option<bool>,
}

impl Device {
    /// False only when the cloud connector explicitly reports `UNAUTHORIZED`
    pub fn is_cloud_authorized(&self) -> bool {
        self.cloud_authorization != Some(CloudAuthorization::Unauthorized)
    }

    /// Published device type, and not a device someone else shared with us
    pub fn is_sharable(&self) -> bool {
        self.device_type_is_published.unwrap_or(false) && self.shared_with_me.is_none()
    }
}

/// State of a device share invitation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShareStatus {
    Pending,
    Accepted,
    Rejected,
    #[serde(other)]
    Unknown,
}

/// A device shared with another user
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceShare {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ShareStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shared_on: Option<Timestamp>,
}
