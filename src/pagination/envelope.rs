//! List response envelope
//!
//! Every list endpoint answers with `{total, offset, count, data}`. Some nest
//! the array one level down (`data.devices`, `data.deviceTypes`, ...).

use super::types::Page;
use crate::error::{Error, Result};
use crate::types::{JsonObject, JsonValue};
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// A parsed but not yet typed page of results
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope {
    /// Collection size as reported with this page
    pub total: u64,
    /// Offset the server actually served
    pub offset: u64,
    /// Number of items the server claims to have returned
    pub count: u64,
    /// Raw items
    pub data: Vec<JsonValue>,
}

#[derive(Deserialize)]
struct RawEnvelope {
    total: u64,
    offset: u64,
    count: u64,
    data: JsonValue,
}

impl Envelope {
    /// Parse a response object, looking for items under `data` or `data.<items_key>`
    pub fn from_response(response: JsonObject, items_key: Option<&str>) -> Result<Self> {
        let raw: RawEnvelope = serde_json::from_value(JsonValue::Object(response))
            .map_err(|e| Error::unexpected_format(format!("list envelope: {e}")))?;

        let data = match (raw.data, items_key) {
            (JsonValue::Array(items), None) => items,
            (JsonValue::Object(mut nested), Some(key)) => match nested.remove(key) {
                Some(JsonValue::Array(items)) => items,
                _ => {
                    return Err(Error::unexpected_format(format!(
                        "`data.{key}` is not an array"
                    )))
                }
            },
            (_, None) => return Err(Error::unexpected_format("`data` is not an array")),
            (_, Some(key)) => {
                return Err(Error::unexpected_format(format!(
                    "`data` is not an object holding `{key}`"
                )))
            }
        };

        Ok(Self {
            total: raw.total,
            offset: raw.offset,
            count: raw.count,
            data,
        })
    }

    /// Number of raw items actually present
    pub fn received(&self) -> usize {
        self.data.len()
    }

    /// Check the declared count and parse every item
    ///
    /// Fails on the first item that is not an object or does not fit `T`.
    pub fn into_items<T: DeserializeOwned>(self) -> Result<Vec<T>> {
        if self.data.len() as u64 != self.count {
            return Err(Error::CountMismatch {
                declared: self.count,
                received: self.data.len(),
            });
        }

        self.data
            .into_iter()
            .enumerate()
            .map(|(index, raw)| {
                if !raw.is_object() {
                    return Err(Error::invalid_item(index, "expected a JSON object"));
                }
                serde_json::from_value(raw).map_err(|e| Error::invalid_item(index, e.to_string()))
            })
            .collect()
    }

    /// Turn this single envelope into a typed page
    pub fn into_page<T: DeserializeOwned>(self) -> Result<Page<T>> {
        let mut page = Page::new(self.offset, self.total);
        page.append(self.into_items()?);
        Ok(page)
    }
}
