//! Authenticator implementation
//!
//! Holds the current access token and applies it to outgoing requests.

use super::types::{AccessToken, TokenKind};
use crate::error::{Error, Result};
use reqwest::RequestBuilder;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Applies the current token to HTTP requests
///
/// Clones share the same token slot, so replacing the token on one clone is
/// seen by every request issued afterwards.
#[derive(Clone, Default)]
pub struct Authenticator {
    token: Arc<RwLock<Option<AccessToken>>>,
}

impl Authenticator {
    /// Create an authenticator holding `token`
    pub fn new(token: AccessToken) -> Self {
        Self {
            token: Arc::new(RwLock::new(Some(token))),
        }
    }

    /// Swap in a new token, e.g. after a refresh done by the caller
    pub async fn replace(&self, token: AccessToken) {
        *self.token.write().await = Some(token);
    }

    /// Forget the current token
    pub async fn clear(&self) {
        *self.token.write().await = None;
    }

    /// Kind of the current token, if any
    pub async fn kind(&self) -> Option<TokenKind> {
        self.token.read().await.as_ref().map(|t| t.kind)
    }

    /// Add the bearer header, refusing to send an expired token
    pub async fn apply(&self, req: RequestBuilder) -> Result<RequestBuilder> {
        let guard = self.token.read().await;
        match guard.as_ref() {
            None => Ok(req),
            Some(token) if token.is_expired() => Err(Error::auth(format!(
                "{:?} token expired",
                token.kind
            ))),
            Some(token) => Ok(req.bearer_auth(&token.value)),
        }
    }
}

impl std::fmt::Debug for Authenticator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Authenticator").finish_non_exhaustive()
    }
}
