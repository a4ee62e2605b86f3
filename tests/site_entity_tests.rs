//! Integration tests for the site entity and its memoized child lists.

mod common;

use common::webflow_for;
use serde_json::json;
use webflow_api::{DecodingError, Site};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn site_json() -> serde_json::Value {
    json!({
        "_id": "580e63e98c9a982ac9b8b741",
        "createdOn": "2016-10-24T19:41:29.156Z",
        "name": "api_docs_sample_json",
        "shortName": "api-docs-sample-json",
        "timezone": "America/Los_Angeles",
        "database": "580e63fc8c9a982ac9b8b744"
    })
}

async fn count_requests(server: &MockServer, request_path: &str) -> usize {
    server
        .received_requests()
        .await
        .unwrap()
        .iter()
        .filter(|r| r.url.path() == request_path)
        .count()
}

#[tokio::test]
async fn test_hydrated_fields_match_record() {
    let mock_server = MockServer::start().await;
    let webflow = webflow_for(&mock_server);

    let site = Site::from_value(&webflow, &site_json()).unwrap();

    assert_eq!(site.id(), "580e63e98c9a982ac9b8b741");
    assert_eq!(site.name(), "api_docs_sample_json");
    assert_eq!(site.short_name(), "api-docs-sample-json");
    assert_eq!(site.timezone(), "America/Los_Angeles");
    assert_eq!(site.database(), Some("580e63fc8c9a982ac9b8b744"));
    assert_eq!(
        site.created_on().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
        "2016-10-24T19:41:29.156Z"
    );

    // Hydration is pure.
    assert!(site.cached_collections().is_none());
    assert!(mock_server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_collections_memoized_until_refresh() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/sites/580e63e98c9a982ac9b8b741/collections"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "_id": "c1",
            "lastUpdated": "2016-10-24T19:42:38.929Z",
            "createdOn": "2016-10-24T19:41:48.349Z",
            "name": "Blog Posts",
            "slug": "post",
            "singularName": "Blog Post"
        }])))
        .expect(2)
        .mount(&mock_server)
        .await;

    let webflow = webflow_for(&mock_server);
    let mut site = Site::from_value(&webflow, &site_json()).unwrap();

    assert_eq!(site.collections().await.unwrap().len(), 1);
    assert_eq!(site.cached_collections().unwrap()[0].id(), "c1");
    site.refresh_collections().await.unwrap();
    assert_eq!(site.collections().await.unwrap()[0].name(), "Blog Posts");

    assert_eq!(
        count_requests(&mock_server, "/sites/580e63e98c9a982ac9b8b741/collections").await,
        2
    );
}

#[tokio::test]
async fn test_domains_and_webhooks_are_cached_per_site() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/sites/580e63e98c9a982ac9b8b741/domains"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"_id": "d1", "name": "example.com"}
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/sites/580e63e98c9a982ac9b8b741/webhooks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let webflow = webflow_for(&mock_server);
    let mut site = Site::from_value(&webflow, &site_json()).unwrap();

    for _ in 0..3 {
        assert_eq!(site.domains().await.unwrap()[0].name(), "example.com");
        assert!(site.webhooks().await.unwrap().is_empty());
    }
    assert_eq!(site.cached_domains().map(<[_]>::len), Some(1));
    assert_eq!(site.cached_webhooks().map(<[_]>::len), Some(0));
}

#[tokio::test]
async fn test_orders_and_products_fetch_first_page() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/sites/580e63e98c9a982ac9b8b741/orders"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"orderId": "o1"}, {"orderId": "o2"}
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/sites/580e63e98c9a982ac9b8b741/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [{"product": {"_id": "p1"}, "skus": []}],
            "total": 1, "limit": 100, "offset": 0
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let webflow = webflow_for(&mock_server);
    let mut site = Site::from_value(&webflow, &site_json()).unwrap();

    assert_eq!(site.orders().await.unwrap()[1].order_id(), "o2");
    assert_eq!(site.products().await.unwrap()[0].id(), Some("p1"));
    assert_eq!(site.cached_orders().unwrap().len(), 2);
    assert_eq!(site.cached_products().unwrap().len(), 1);

    let requests = mock_server.received_requests().await.unwrap();
    for request in &requests {
        assert_eq!(request.url.query(), Some("limit=100&offset=0"));
    }
}

#[tokio::test]
async fn test_failed_refresh_keeps_cached_value() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/sites/580e63e98c9a982ac9b8b741/domains"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"_id": "d1", "name": "example.com"}
        ])))
        .up_to_n_times(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/sites/580e63e98c9a982ac9b8b741/domains"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let webflow = webflow_for(&mock_server);
    let mut site = Site::from_value(&webflow, &site_json()).unwrap();

    site.domains().await.unwrap();
    let err = site.refresh_domains().await.unwrap_err();

    assert_eq!(err.status(), Some(500));
    assert_eq!(site.cached_domains().unwrap()[0].id(), "d1");
}

#[tokio::test]
async fn test_publish_through_entity() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/sites/580e63e98c9a982ac9b8b741/publish"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"queued": true})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let webflow = webflow_for(&mock_server);
    let site = Site::from_value(&webflow, &site_json()).unwrap();

    assert_eq!(site.publish(&[]).await.unwrap()["queued"], true);
}

#[tokio::test]
async fn test_timezone_must_be_a_known_zone() {
    let mock_server = MockServer::start().await;
    let webflow = webflow_for(&mock_server);

    let site = Site::from_value(&webflow, &site_json()).unwrap();
    assert_eq!(site.tz(), chrono_tz::America::Los_Angeles);

    let mut record = site_json();
    record["timezone"] = json!("Not/AZone");
    let err = Site::from_value(&webflow, &record).unwrap_err();

    assert!(matches!(
        err,
        DecodingError::InvalidTimezone { ref value } if value == "Not/AZone"
    ));
}
