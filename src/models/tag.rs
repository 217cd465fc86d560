//! Tags and tag categories

use serde::{Deserialize, Serialize};

/// A tag, or a tag category when returned by `/tags/categories`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_category: Option<bool>,
}
