//! Messages and message exports

use crate::types::{JsonObject, Timestamp};
use serde::{Deserialize, Serialize};

/// A stored message
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mid: Option<String>,
    /// Source device id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sdid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ts: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cts: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none", rename = "type")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<JsonObject>,
}

/// A message to post for a device
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutgoingMessage {
    pub sdid: String,
    pub data: JsonObject,
    /// Defaults to the time of receipt on the server
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ts: Option<Timestamp>,
    #[serde(default = "default_message_type", rename = "type")]
    pub kind: String,
}

fn default_message_type() -> String {
    "message".to_string()
}

impl OutgoingMessage {
    /// Message of type `message` from device `sdid`
    pub fn new(sdid: impl Into<String>, data: JsonObject) -> Self {
        Self {
            sdid: sdid.into(),
            data,
            ts: None,
            kind: default_message_type(),
        }
    }

    #[must_use]
    pub fn at(mut self, ts: Timestamp) -> Self {
        self.ts = Some(ts);
        self
    }
}

/// Id the server assigned to a posted message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageId {
    pub mid: String,
}

/// Parameters of a message export
///
/// List-valued filters are comma separated, as the API expects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportRequest {
    pub start_date: Timestamp,
    pub end_date: Timestamp,
    /// `json` or `csv`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    /// `asc` or `desc`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sdids: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sdtids: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trial_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uids: Option<String>,
}

/// Handle on a queued export
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportTicket {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<Timestamp>,
}

/// Progress of an export
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportStatus {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export_id: Option<String>,
    /// `Requested`, `Started`, `Success`, `Failed` or `Expired`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub md5: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_messages: Option<u64>,
}

impl ExportStatus {
    /// The export file is ready to download
    pub fn is_ready(&self) -> bool {
        self.status.as_deref() == Some("Success")
    }
}
