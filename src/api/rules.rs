//! Rules API
//!
//! Lookup, paged listing and management of a user's rules.

use super::{body, delete_at, get_data, send_data};
use crate::error::{Error, Result};
use crate::http::Transport;
use crate::models::{Rule, RuleStatistics};
use crate::pagination::{ListEndpoint, Page, PageRequest, PagedFetcher};
use crate::types::{Encoding, JsonObject, Method};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::debug;

/// Which applications' rules a call covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RuleScope {
    /// Rules visible to every application
    #[serde(rename = "allApplications")]
    Public,
    /// Public rules plus the calling application's own
    #[default]
    #[serde(rename = "allApplications,thisApplication")]
    PublicOrOwned,
    /// Private to the calling application
    #[serde(rename = "thisApplication")]
    Owned,
    /// Private to some other application
    #[serde(rename = "otherApplications")]
    Unowned,
}

impl RuleScope {
    /// Wire value
    pub fn as_str(self) -> &'static str {
        match self {
            RuleScope::Public => "allApplications",
            RuleScope::PublicOrOwned => "allApplications,thisApplication",
            RuleScope::Owned => "thisApplication",
            RuleScope::Unowned => "otherApplications",
        }
    }

    /// Only `Owned` and `Public` can be set on a rule
    pub fn is_assignable(self) -> bool {
        matches!(self, RuleScope::Owned | RuleScope::Public)
    }

    fn ensure_assignable(self) -> Result<Self> {
        if self.is_assignable() {
            Ok(self)
        } else {
            Err(Error::InvalidScope {
                scope: self.as_str().to_string(),
            })
        }
    }
}

impl std::fmt::Display for RuleScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RuleScope {
    type Err = Error;

    /// Accepts the wire value or a short name (`public`, `public-or-owned`, `owned`, `unowned`)
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "public" | "allApplications" => Ok(RuleScope::Public),
            "public-or-owned" | "allApplications,thisApplication" => Ok(RuleScope::PublicOrOwned),
            "owned" | "thisApplication" => Ok(RuleScope::Owned),
            "unowned" | "otherApplications" => Ok(RuleScope::Unowned),
            other => Err(Error::InvalidScope {
                scope: other.to_string(),
            }),
        }
    }
}

/// Filters for listing a user's rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RuleFilter {
    pub scope: RuleScope,
    pub exclude_disabled: bool,
}

/// A rule to create
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewRule {
    pub name: String,
    /// Owner, defaults to the token's user
    pub uid: Option<String>,
    pub description: Option<String>,
    /// The `if`/`then` body
    pub rule: JsonObject,
    pub scope: RuleScope,
    pub enabled: bool,
}

impl NewRule {
    /// Enabled rule owned by the calling application
    pub fn new(name: impl Into<String>, rule: JsonObject) -> Self {
        Self {
            name: name.into(),
            uid: None,
            description: None,
            rule,
            scope: RuleScope::Owned,
            enabled: true,
        }
    }
}

/// Fields to change on an existing rule; `None` leaves a field untouched
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RuleUpdate {
    pub name: Option<String>,
    pub uid: Option<String>,
    pub description: Option<String>,
    pub rule: Option<JsonObject>,
    pub scope: Option<RuleScope>,
    pub enabled: Option<bool>,
}

fn user_rules(uid: &str, filter: &RuleFilter) -> ListEndpoint {
    ListEndpoint::new(format!("/users/{uid}/rules"))
        .filter("excludeDisabled", filter.exclude_disabled)
        .filter("scope", filter.scope.as_str())
}

/// Get a rule by id
pub async fn get<C: Transport + ?Sized>(transport: &C, id: &str) -> Result<Rule> {
    get_data(transport, &format!("/rules/{id}"), JsonObject::new()).await
}

/// One page of a user's rules
pub async fn list<C: Transport + ?Sized>(
    transport: &C,
    uid: &str,
    count: u32,
    offset: u64,
    filter: &RuleFilter,
) -> Result<Page<Rule>> {
    let request = PageRequest::new(offset, count)?;
    user_rules(uid, filter)
        .fetch_page_items(transport, request)
        .await
}

/// Every rule of a user
pub async fn list_all<C: Transport + ?Sized>(
    transport: &C,
    uid: &str,
    filter: &RuleFilter,
) -> Result<Page<Rule>> {
    user_rules(uid, filter)
        .fetch_all(transport, &PagedFetcher::default())
        .await
}

/// Create a rule
///
/// Fails with `InvalidScope` before any request unless the scope is `Owned`
/// or `Public`.
pub async fn create<C: Transport + ?Sized>(transport: &C, rule: &NewRule) -> Result<Rule> {
    rule.scope.ensure_assignable()?;
    send_data(transport, Method::POST, "/rules", body(rule)?).await
}

/// Update a rule
///
/// An update with no fields set sends nothing and returns the current rule.
pub async fn update<C: Transport + ?Sized>(
    transport: &C,
    id: &str,
    update: &RuleUpdate,
) -> Result<Rule> {
    if let Some(scope) = update.scope {
        scope.ensure_assignable()?;
    }

    let params = body(update)?;
    if params.is_empty() {
        debug!(id, "empty rule update, fetching instead");
        return get(transport, id).await;
    }
    send_data(transport, Method::PUT, &format!("/rules/{id}"), params).await
}

/// Delete a rule
pub async fn remove<C: Transport + ?Sized>(transport: &C, id: &str) -> Result<()> {
    delete_at(transport, &format!("/rules/{id}")).await
}

/// Execution statistics of a rule
pub async fn statistics<C: Transport + ?Sized>(transport: &C, id: &str) -> Result<RuleStatistics> {
    get_data(transport, &format!("/rules/{id}/executions"), JsonObject::new()).await
}

/// Trigger the rule's actions as a test
///
/// The server answers 400 when one of the actions cannot be tested.
pub async fn test_actions<C: Transport + ?Sized>(transport: &C, id: &str) -> Result<()> {
    let result = transport
        .request(
            Method::POST,
            &format!("/rules/{id}/actions"),
            JsonObject::new(),
            Encoding::Query,
        )
        .await;

    match result {
        Ok(_) => Ok(()),
        Err(e) if e.status() == Some(400) => Err(Error::ActionsNotTestable { id: id.to_string() }),
        Err(e) => Err(e),
    }
}
