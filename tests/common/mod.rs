//! Shared helpers for the integration tests.

#![allow(dead_code)]

use serde_json::Value;
use webflow_api::{ApiToken, BaseUrl, Fields, Webflow, WebflowConfig};
use wiremock::MockServer;

/// Builds a gateway that talks to the mock server with token `foo`.
pub fn webflow_for(server: &MockServer) -> Webflow {
    let config = WebflowConfig::builder()
        .token(ApiToken::new("foo").unwrap())
        .base_url(BaseUrl::new(server.uri()).unwrap())
        .build()
        .unwrap();
    Webflow::new(config).unwrap()
}

/// Converts a `json!` object literal into [`Fields`].
pub fn fields(value: Value) -> Fields {
    match value {
        Value::Object(map) => map,
        other => panic!("expected a JSON object, got {other}"),
    }
}

/// Returns the JSON body of the only request the server received.
pub async fn only_request_body(server: &MockServer) -> Value {
    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1, "expected exactly one request");
    serde_json::from_slice(&requests[0].body).unwrap()
}

/// Returns the raw query string of the only request the server received.
pub async fn only_request_query(server: &MockServer) -> Option<String> {
    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1, "expected exactly one request");
    requests[0].url.query().map(str::to_string)
}

/// Asserts that the server saw no traffic at all.
pub async fn assert_no_requests(server: &MockServer) {
    let requests = server.received_requests().await.unwrap();
    assert!(requests.is_empty(), "expected no requests, got {}", requests.len());
}
