//! Authentication module
//!
//! Bearer tokens (user, application, device) and the `Authenticator` that
//! attaches them to requests.

mod authenticator;
mod types;

pub use authenticator::Authenticator;
pub use types::{AccessToken, TokenKind};
