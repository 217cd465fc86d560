//! Access token types
//!
//! ARTIK Cloud issues user, application and device tokens. All three travel
//! as a bearer header; the kind only changes what the token may access.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Who a token was issued to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    /// Token obtained through a user login
    #[default]
    User,
    /// Client-credentials token of an application
    Application,
    /// Token bound to a single device
    Device,
}

/// A bearer token with optional expiry
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessToken {
    /// Kind of token
    #[serde(default)]
    pub kind: TokenKind,
    /// The token value
    pub value: String,
    /// When the token stops being accepted
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
}

impl AccessToken {
    /// Create a token that never expires client-side
    pub fn new(kind: TokenKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
            expires_at: None,
        }
    }

    /// Create a user token
    pub fn user(value: impl Into<String>) -> Self {
        Self::new(TokenKind::User, value)
    }

    /// Create an application token
    pub fn application(value: impl Into<String>) -> Self {
        Self::new(TokenKind::Application, value)
    }

    /// Create a device token
    pub fn device(value: impl Into<String>) -> Self {
        Self::new(TokenKind::Device, value)
    }

    /// Set the expiry from an `expires_in` value in seconds
    #[must_use]
    pub fn expiring_in(mut self, seconds: i64) -> Self {
        self.expires_at = Some(Utc::now() + Duration::seconds(seconds));
        self
    }

    /// Expired, or within 30 seconds of expiring
    pub fn is_expired(&self) -> bool {
        match self.expires_at {
            Some(expires_at) => Utc::now() + Duration::seconds(30) >= expires_at,
            None => false,
        }
    }
}

impl std::fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessToken")
            .field("kind", &self.kind)
            .field("value", &"<redacted>")
            .field("expires_at", &self.expires_at)
            .finish()
    }
}
