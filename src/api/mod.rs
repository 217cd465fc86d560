//! Resource APIs
//!
//! Stateless functions over an injected [`Transport`](crate::http::Transport).
//! Each module covers one resource family; single objects come back under
//! `data`, lists go through [`ListEndpoint`](crate::pagination::ListEndpoint).
//!
//! ```rust,ignore
//! use artik_cloud::api::rules::{self, RuleFilter};
//! use artik_cloud::http::HttpClient;
//!
//! let client = HttpClient::new()?;
//! let page = rules::list_all(&client, "user-id", &RuleFilter::default()).await?;
//! println!("{} rules", page.total());
//! ```

pub mod device_types;
pub mod devices;
pub mod messages;
pub mod rules;
pub mod tags;

use crate::error::{Error, Result};
use crate::http::Transport;
use crate::types::{Encoding, JsonObject, JsonValue, Method};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Parse the object found under `data`
pub(crate) fn data_object<T: DeserializeOwned>(mut response: JsonObject) -> Result<T> {
    match response.remove("data") {
        Some(data @ JsonValue::Object(_)) => serde_json::from_value(data)
            .map_err(|e| Error::unexpected_format(format!("`data`: {e}"))),
        Some(_) => Err(Error::unexpected_format("`data` is not an object")),
        None => Err(Error::unexpected_format("missing `data`")),
    }
}

/// Parse the array found under `data.<key>`
pub(crate) fn data_list<T: DeserializeOwned>(mut response: JsonObject, key: &str) -> Result<Vec<T>> {
    let items = match response.remove("data") {
        Some(JsonValue::Object(mut data)) => data.remove(key),
        _ => None,
    };
    match items {
        Some(items @ JsonValue::Array(_)) => serde_json::from_value(items)
            .map_err(|e| Error::unexpected_format(format!("`data.{key}`: {e}"))),
        _ => Err(Error::unexpected_format(format!("`data.{key}` is not an array"))),
    }
}

/// Serialize a request body into the parameter object, dropping nulls
pub(crate) fn body<B: Serialize>(value: &B) -> Result<JsonObject> {
    match serde_json::to_value(value)? {
        JsonValue::Object(object) => Ok(crate::types::remove_nulls(object)),
        _ => Err(Error::Other("request body must serialize to an object".to_string())),
    }
}

pub(crate) async fn get_data<T, C>(transport: &C, path: &str, params: JsonObject) -> Result<T>
where
    T: DeserializeOwned,
    C: Transport + ?Sized,
{
    let response = transport
        .request(Method::GET, path, params, Encoding::Query)
        .await?;
    data_object(response)
}

pub(crate) async fn send_data<T, C>(
    transport: &C,
    method: Method,
    path: &str,
    body: JsonObject,
) -> Result<T>
where
    T: DeserializeOwned,
    C: Transport + ?Sized,
{
    let response = transport.request(method, path, body, Encoding::Json).await?;
    data_object(response)
}

pub(crate) async fn delete_at<C>(transport: &C, path: &str) -> Result<()>
where
    C: Transport + ?Sized,
{
    transport
        .request(Method::DELETE, path, JsonObject::new(), Encoding::Query)
        .await?;
    Ok(())
}
