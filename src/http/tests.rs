//! Tests for the HTTP client module

use super::client::query_pairs;
use super::*;
use crate::auth::AccessToken;
use crate::error::Error;
use crate::types::{Encoding, JsonObject, Method};
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn params(value: serde_json::Value) -> JsonObject {
    value.as_object().cloned().unwrap()
}

async fn client_for(server: &MockServer) -> HttpClient {
    let config = HttpClientConfig::builder().base_url(server.uri()).build();
    HttpClient::with_config(config).unwrap()
}

#[test]
fn test_http_client_config_default() {
    let config = HttpClientConfig::default();
    assert_eq!(config.base_url, DEFAULT_BASE_URL);
    assert_eq!(config.timeout, Duration::from_secs(30));
    assert!(config.rate_limit.is_none());
    assert!(config.token.is_none());
    assert!(config.user_agent.starts_with("artik-cloud/"));
}

#[test]
fn test_http_client_config_builder() {
    let config = HttpClientConfig::builder()
        .base_url("https://api.example.com/v1.1")
        .timeout(Duration::from_secs(5))
        .rate_limit(RateLimiterConfig::new(60, 5))
        .header("X-Custom", "value")
        .user_agent("test-agent/1.0")
        .token(AccessToken::device("dev"))
        .build();

    assert_eq!(config.base_url, "https://api.example.com/v1.1");
    assert_eq!(config.timeout, Duration::from_secs(5));
    assert_eq!(config.rate_limit, Some(RateLimiterConfig::new(60, 5)));
    assert_eq!(
        config.default_headers.get("X-Custom"),
        Some(&"value".to_string())
    );
    assert_eq!(config.user_agent, "test-agent/1.0");
    assert!(config.token.is_some());
}

#[test]
fn test_http_client_rejects_bad_rate_limit() {
    let config = HttpClientConfig::builder()
        .rate_limit(RateLimiterConfig::new(0, 1))
        .build();
    assert!(matches!(
        HttpClient::with_config(config),
        Err(Error::InvalidConfigValue { .. })
    ));
}

#[test]
fn test_query_pairs_flattening() {
    let pairs = query_pairs(&params(json!({
        "count": 100,
        "excludeDisabled": false,
        "scope": "allApplications,thisApplication",
        "tags": ["a", "b", 3],
        "dtid": null
    })));

    let get = |key: &str| {
        pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    };
    assert_eq!(pairs.len(), 4);
    assert_eq!(get("count"), Some("100"));
    assert_eq!(get("excludeDisabled"), Some("false"));
    assert_eq!(get("scope"), Some("allApplications,thisApplication"));
    assert_eq!(get("tags"), Some("a,b,3"));
    assert_eq!(get("dtid"), None);
}

#[tokio::test]
async fn test_get_with_query_params() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/u1/rules"))
        .and(query_param("count", "100"))
        .and(query_param("offset", "0"))
        .and(query_param("excludeDisabled", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"total": 0})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server).await;
    let response = client
        .request(
            Method::GET,
            "/users/u1/rules",
            params(json!({"count": 100, "offset": 0, "excludeDisabled": true})),
            Encoding::Query,
        )
        .await
        .unwrap();

    assert_eq!(response["total"], 0);
}

#[tokio::test]
async fn test_post_json_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/rules"))
        .and(body_json(json!({"name": "r", "enabled": true})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {"id": "r1"}})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server).await;
    let response = client
        .request(
            Method::POST,
            "rules",
            params(json!({"name": "r", "enabled": true})),
            Encoding::Json,
        )
        .await
        .unwrap();

    assert_eq!(response["data"]["id"], "r1");
}

#[tokio::test]
async fn test_bearer_token_and_default_headers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/self"))
        .and(header("Authorization", "Bearer tok"))
        .and(header("X-Trace", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {}})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder()
        .base_url(mock_server.uri())
        .header("X-Trace", "1")
        .token(AccessToken::user("tok"))
        .build();
    let client = HttpClient::with_config(config).unwrap();

    client
        .request(Method::GET, "/users/self", JsonObject::new(), Encoding::Query)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_empty_body_is_empty_object() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/rules/r1"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server).await;
    let response = client
        .request(Method::DELETE, "/rules/r1", JsonObject::new(), Encoding::Query)
        .await
        .unwrap();

    assert!(response.is_empty());
}

#[tokio::test]
async fn test_non_object_body_is_unexpected_format() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/tags"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([1, 2, 3])))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/html"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html></html>"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server).await;
    for route in ["/tags", "/html"] {
        let result = client
            .request(Method::GET, route, JsonObject::new(), Encoding::Query)
            .await;
        assert!(matches!(result, Err(Error::UnexpectedFormat { .. })));
    }
}

#[tokio::test]
async fn test_error_status_is_not_retried() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rules/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not found"))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/rules/flaky"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server).await;

    let err = client
        .request(Method::GET, "/rules/missing", JsonObject::new(), Encoding::Query)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::HttpStatus { status: 404, ref body } if body == "Not found"));
    assert!(err.is_transport());

    let err = client
        .request(Method::GET, "/rules/flaky", JsonObject::new(), Encoding::Query)
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(503));
}

#[tokio::test]
async fn test_timeout() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_millis(500)))
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder()
        .base_url(mock_server.uri())
        .timeout(Duration::from_millis(50))
        .build();
    let client = HttpClient::with_config(config).unwrap();

    let err = client
        .request(Method::GET, "/slow", JsonObject::new(), Encoding::Query)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Timeout { timeout_ms: 50 }));
}

#[tokio::test]
async fn test_full_url_bypasses_base() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1.1/devices/d1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {"id": "d1"}})))
        .mount(&mock_server)
        .await;

    let client = HttpClient::new().unwrap();
    let response = client
        .request(
            Method::GET,
            &format!("{}/v1.1/devices/d1", mock_server.uri()),
            JsonObject::new(),
            Encoding::Query,
        )
        .await
        .unwrap();
    assert_eq!(response["data"]["id"], "d1");
}

#[tokio::test]
async fn test_rate_limited_client_still_sends() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/tags"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {"tags": []}})))
        .expect(3)
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder()
        .base_url(mock_server.uri())
        .rate_limit(RateLimiterConfig::new(600, 5))
        .build();
    let client = HttpClient::with_config(config).unwrap();
    assert!(client.has_rate_limiter());

    for _ in 0..3 {
        client
            .request(Method::GET, "/tags", JsonObject::new(), Encoding::Query)
            .await
            .unwrap();
    }
}

#[test]
fn test_http_client_debug() {
    let client = HttpClient::new().unwrap();
    let debug_str = format!("{client:?}");
    assert!(debug_str.contains("HttpClient"));
    assert!(debug_str.contains("config"));
}
