//! Messages API

use super::{body, get_data, send_data};
use crate::error::Result;
use crate::http::Transport;
use crate::models::{ExportRequest, ExportStatus, ExportTicket, MessageId, OutgoingMessage};
use crate::types::{JsonObject, Method};

/// Post a message, returning the id the server assigned
pub async fn send<C: Transport + ?Sized>(
    transport: &C,
    message: &OutgoingMessage,
) -> Result<MessageId> {
    send_data(transport, Method::POST, "/messages", body(message)?).await
}

/// Queue an export of stored messages
pub async fn export<C: Transport + ?Sized>(
    transport: &C,
    request: &ExportRequest,
) -> Result<ExportTicket> {
    send_data(transport, Method::POST, "/messages/export", body(request)?).await
}

/// Check on a queued export
pub async fn export_status<C: Transport + ?Sized>(
    transport: &C,
    export_id: &str,
) -> Result<ExportStatus> {
    get_data(
        transport,
        &format!("/messages/export/{export_id}/status"),
        JsonObject::new(),
    )
    .await
}
