//! Search results endpoint tests.
//!
//! # Invariants
//! - The page's query string is forwarded verbatim
//! - An absent or empty query sends no query string

mod common;

use chrono::{TimeZone, Utc};
use common::*;
use securelog_client::{FieldValue, SearchResultFilter};
use wiremock::matchers::{method, path, query_param};

#[tokio::test]
async fn test_get_search_results() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/user/get_search_results"))
        .respond_with(ResponseTemplate::new(200).set_body_json(load_fixture(
            "search_results/get_search_results.json",
        )))
        .mount(&mock_server)
        .await;

    let results = endpoints::get_search_results(&http_client(), &mock_server.uri(), None, None)
        .await
        .unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].search_id, Some(FieldValue::Integer(3)));
    assert_eq!(results[0].search_name, Some(FieldValue::from("ssh-fail")));
    assert_eq!(
        results[0].found,
        vec![Some(FieldValue::from("line A")), Some(FieldValue::from("line B"))]
    );
}

#[tokio::test]
async fn test_get_search_results_forwards_query() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/user/get_search_results"))
        .and(query_param("client", "7"))
        .and(query_param("after", "2024-05-01"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let results = endpoints::get_search_results(
        &http_client(),
        &mock_server.uri(),
        None,
        Some("?client=7&after=2024-05-01"),
    )
    .await
    .unwrap();

    assert!(results.is_empty());
}

#[tokio::test]
async fn test_get_search_results_with_filter() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/user/get_search_results"))
        .and(query_param("client", "web 01"))
        .and(query_param("before", "2024-06-01T00:00:00Z"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let filter = SearchResultFilter {
        client: Some("web 01".to_string()),
        before: Some(Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap()),
        after: None,
    };
    let query = filter.to_query_string();

    let result =
        endpoints::get_search_results(&http_client(), &mock_server.uri(), None, Some(&query))
            .await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_client_get_search_results_forwards_query() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/user/get_search_results"))
        .and(query_param("client", "web-01"))
        .respond_with(ResponseTemplate::new(200).set_body_json(load_fixture(
            "search_results/get_search_results.json",
        )))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = securelog_client::SecurelogClient::builder()
        .base_url(mock_server.uri())
        .build()
        .unwrap();

    let results = client
        .get_search_results(Some("?client=web-01"))
        .await
        .unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].search_name, Some(FieldValue::from("ssh-fail")));
}
