//! Integration tests for the transport layer.
//!
//! These tests verify default headers, status handling, body decoding and
//! the last-request/last-result slots against a local mock server.

mod common;

use std::time::Duration;

use serde_json::json;
use webflow_api::clients::{HttpClient, HttpMethod, HttpRequest, RateLimit, SDK_VERSION};
use webflow_api::{ApiToken, BaseUrl, DecodingError, Error, HttpError, Webflow, WebflowConfig};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> HttpClient {
    let config = WebflowConfig::builder()
        .token(ApiToken::new("foo").unwrap())
        .base_url(BaseUrl::new(server.uri()).unwrap())
        .user_agent_prefix("TestApp/0.1")
        .build()
        .unwrap();
    HttpClient::with_client(&config, reqwest::Client::new())
}

// ============================================================================
// Headers
// ============================================================================

#[tokio::test]
async fn test_every_request_carries_auth_accept_and_version_headers() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/sites"))
        .and(header("Authorization", "Bearer foo"))
        .and(header("Accept", "application/json"))
        .and(header("accept-version", "1.0.0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let body = client.get("/sites", Vec::new()).await.unwrap();

    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_user_agent_includes_prefix() {
    let mock_server = MockServer::start().await;
    let expected = format!("TestApp/0.1 | Webflow API Rust SDK v{SDK_VERSION}");
    Mock::given(method("GET"))
        .and(header("User-Agent", expected.as_str()))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    client.get("/user", Vec::new()).await.unwrap();
}

#[tokio::test]
async fn test_json_body_sets_content_type() {
    let mock_server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/sites/foo/orders/bar"))
        .and(header("Content-Type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let body = client
        .patch("/sites/foo/orders/bar", json!({"fields": {"comment": "hi"}}))
        .await
        .unwrap();

    assert_eq!(body, json!({"ok": true}));
}

// ============================================================================
// Status and body handling
// ============================================================================

#[tokio::test]
async fn test_empty_200_body_decodes_to_empty_object() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/sites/foo/publish"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let body = client
        .post("/sites/foo/publish", json!({"domains": []}))
        .await
        .unwrap();

    assert_eq!(body, json!({}));
    assert_eq!(client.last_result(), Some(json!({})));
}

#[tokio::test]
async fn test_non_200_status_is_api_error_with_reason_and_body() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/sites/missing"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({"msg": "Site not found", "code": 404})),
        )
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.get("/sites/missing", Vec::new()).await.unwrap_err();

    match err {
        HttpError::Api(api_error) => {
            assert_eq!(api_error.status, 404);
            assert_eq!(api_error.reason, "Not Found");
            assert_eq!(api_error.message(), Some("Site not found"));
            assert_eq!(api_error.to_string(), "Webflow API error: 404 Not Found");
        }
        other => panic!("expected ApiError, got {other:?}"),
    }

    // The failed body is still recorded.
    assert_eq!(
        client.last_result(),
        Some(json!({"msg": "Site not found", "code": 404}))
    );
}

#[tokio::test]
async fn test_other_2xx_statuses_are_failures() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"_id": "new"})))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.post("/sites/foo/webhooks", json!({})).await.unwrap_err();

    assert!(matches!(err, HttpError::Api(ref e) if e.status == 201 && e.reason == "Created"));
}

#[tokio::test]
async fn test_non_json_error_body_is_recorded_as_null() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.get("/sites", Vec::new()).await.unwrap_err();

    assert!(matches!(err, HttpError::Api(ref e) if e.status == 502 && e.body.is_none()));
    assert_eq!(client.last_result(), Some(serde_json::Value::Null));
}

#[tokio::test]
async fn test_invalid_json_on_200_is_decoding_error() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not json"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.get("/sites", Vec::new()).await.unwrap_err();

    assert!(matches!(
        err,
        HttpError::Decoding(DecodingError::InvalidJson(_))
    ));
}

#[tokio::test]
async fn test_network_failure_is_network_error() {
    let config = WebflowConfig::builder()
        .token(ApiToken::new("foo").unwrap())
        .base_url(BaseUrl::new("http://127.0.0.1:9").unwrap())
        .build()
        .unwrap();
    let client = HttpClient::with_client(&config, reqwest::Client::new());

    let err = client.get("/sites", Vec::new()).await.unwrap_err();
    assert!(matches!(err, HttpError::Network(_)));
}

// ============================================================================
// Last request / last result / pagination
// ============================================================================

#[tokio::test]
async fn test_last_request_records_method_path_and_query() {
    let mock_server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    client
        .delete(
            "/collections/c/items/i",
            vec![("live".to_string(), "true".to_string())],
        )
        .await
        .unwrap();

    let last = client.last_request().unwrap();
    assert_eq!(last.http_method, HttpMethod::Delete);
    assert_eq!(last.path, "/collections/c/items/i");
    assert_eq!(last.query_string(), "live=true");
}

#[tokio::test]
async fn test_has_next_page_follows_last_result() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/more"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [], "total": 250, "limit": 100, "offset": 100
        })))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/last"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [], "total": 250, "limit": 100, "offset": 200
        })))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/bare"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);

    client.get("/more", Vec::new()).await.unwrap();
    assert!(client.has_next_page());
    assert_eq!(client.pagination().unwrap().total, 250);

    client.get("/last", Vec::new()).await.unwrap();
    assert!(!client.has_next_page());

    client.get("/bare", Vec::new()).await.unwrap();
    assert!(!client.has_next_page());
    assert!(client.pagination().is_none());
}

#[tokio::test]
async fn test_request_returns_rate_limit_headers() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("X-RateLimit-Limit", "60")
                .insert_header("X-RateLimit-Remaining", "58")
                .set_body_json(json!({})),
        )
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let request = HttpRequest::builder(HttpMethod::Get, "/info")
        .build()
        .unwrap();
    let response = client.request(request).await.unwrap();

    assert_eq!(
        response.rate_limit,
        Some(RateLimit {
            limit: 60,
            remaining: 58
        })
    );
}

#[tokio::test]
async fn test_invalid_request_is_rejected_before_sending() {
    let mock_server = MockServer::start().await;
    let client = client_for(&mock_server);

    let request = HttpRequest {
        http_method: HttpMethod::Get,
        path: "/sites".to_string(),
        body: Some(json!({"not": "allowed"})),
        query: Vec::new(),
    };
    let err = client.request(request).await.unwrap_err();

    assert!(matches!(err, HttpError::InvalidRequest(_)));
    common::assert_no_requests(&mock_server).await;
}

#[tokio::test]
async fn test_network_failure_clears_previous_result() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/collections/a/items"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [], "total": 250, "limit": 100, "offset": 0
        })))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/collections/b/items"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_secs(2))
                .set_body_json(json!({"items": []})),
        )
        .mount(&mock_server)
        .await;

    let config = WebflowConfig::builder()
        .token(ApiToken::new("foo").unwrap())
        .base_url(BaseUrl::new(mock_server.uri()).unwrap())
        .build()
        .unwrap();
    let http = reqwest::Client::builder()
        .timeout(Duration::from_millis(200))
        .build()
        .unwrap();
    let webflow = Webflow::with_client(config, http);

    webflow.list_items("a", 1).await.unwrap();
    assert!(webflow.has_next_page());

    let err = webflow.list_items("b", 1).await.unwrap_err();
    assert!(matches!(err, Error::Http(HttpError::Network(_))));
    assert_eq!(webflow.last_result(), None);
    assert!(!webflow.has_next_page());
    assert!(webflow.pagination().is_none());
    assert_eq!(
        webflow.last_request().unwrap().path,
        "/collections/b/items"
    );
}

#[tokio::test]
async fn test_reason_is_canonical_phrase_for_status() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/throttled"))
        .respond_with(ResponseTemplate::new(429).set_body_json(json!({"msg": "Slow down"})))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);

    let err = client.get("/throttled", Vec::new()).await.unwrap_err();
    assert!(matches!(
        err,
        HttpError::Api(ref e) if e.reason == "Too Many Requests" && e.message() == Some("Slow down")
    ));
}
