//! Resource models
//!
//! Plain serde types mirroring the JSON the API returns. The API omits fields
//! freely, so nearly everything is optional.

mod device;
mod device_type;
mod message;
mod rule;
mod tag;

pub use device::{CloudAuthorization, Device, DeviceShare, ManifestVersionPolicy, ShareStatus};
pub use device_type::DeviceType;
pub use message::{ExportRequest, ExportStatus, ExportTicket, Message, MessageId, OutgoingMessage};
pub use rule::{Rule, RuleIssue, RuleStatistics};
pub use tag::Tag;
