//! Graph client tests against a mock content graph gateway

mod common;

use common::*;
use graph_preview::{
    classify, fetch_with_retry, ContentSource, ErrorKind, FetchOutcome, HttpGraphClient,
    PreviewParams, RetryPolicy,
};
use serde_json::json;
use std::time::{Duration, Instant};
use wiremock::{
    matchers::{body_partial_json, header, method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

#[tokio::test]
async fn test_preview_uses_single_key_auth() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GRAPH_PATH))
        .and(query_param("auth", "test-single-key"))
        .and(body_partial_json(json!({ "variables": { "key": "abc", "loc": ["en"] } })))
        .respond_with(ResponseTemplate::new(200).set_body_json(preview_body(article_item("abc"))))
        .expect(1)
        .mount(&server)
        .await;

    let mut params = PreviewParams::for_key("abc");
    params.loc = Some("en".to_string());

    let content = client_for(&server).get_preview_content(&params).await.unwrap();
    assert_eq!(content.content_type.as_deref(), Some("ArticlePage"));
    assert_eq!(content.key.as_deref(), Some("abc"));
    assert_eq!(content.version.as_deref(), Some("3"));
}

#[tokio::test]
async fn test_preview_token_uses_bearer_auth() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GRAPH_PATH))
        .and(header("authorization", "Bearer draft-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(preview_body(article_item("abc"))))
        .expect(1)
        .mount(&server)
        .await;

    let mut params = PreviewParams::for_key("abc");
    params.preview_token = Some("draft-token".to_string());

    assert!(client_for(&server).get_preview_content(&params).await.is_ok());
}

#[tokio::test]
async fn test_graphql_errors_are_content_failures() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "errors": [
                { "message": "Unknown type \"Foo\"", "locations": [{ "line": 2, "column": 3 }] }
            ]
        })))
        .mount(&server)
        .await;

    let failure = client_for(&server)
        .get_preview_content(&PreviewParams::for_key("abc"))
        .await
        .unwrap_err();

    let classified = classify(&failure);
    assert_eq!(classified.kind, ErrorKind::GraphContentResponse);
    assert_eq!(classified.message, "GraphQL error: Unknown type \"Foo\"");
    assert_eq!(classified.http_status, Some(200));
    assert!(classified.error_locations.contains(&2));
    assert!(classified.request.unwrap().query.contains("GetPreviewContent"));
}

#[tokio::test]
async fn test_unauthorized_is_http_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(401).set_body_string("unauthorized"))
        .mount(&server)
        .await;

    let failure = client_for(&server)
        .get_preview_content(&PreviewParams::for_key("abc"))
        .await
        .unwrap_err();

    let classified = classify(&failure);
    assert_eq!(classified.kind, ErrorKind::GraphHttpResponse);
    assert_eq!(classified.http_status, Some(401));
    assert_eq!(classified.message, "HTTP 401: Unauthorized");
    assert!(classified
        .troubleshooting_tips()
        .iter()
        .any(|tip| tip.contains("OPTIMIZELY_GRAPH_SINGLE_KEY")));
}

#[tokio::test]
async fn test_missing_item_retries_until_indexed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(preview_body(json!(null))))
        .up_to_n_times(2)
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(preview_body(article_item("abc"))))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let policy = RetryPolicy::new(4, Duration::from_millis(5));
    let outcome = fetch_with_retry(&client, &PreviewParams::for_key("abc"), policy).await;

    assert!(outcome.is_success());
}

#[tokio::test]
async fn test_missing_item_gives_up_after_policy() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(preview_body(json!(null))))
        .expect(3)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let policy = RetryPolicy::new(3, Duration::from_millis(5));
    let outcome = fetch_with_retry(&client, &PreviewParams::for_key("abc"), policy).await;

    match outcome {
        FetchOutcome::Failure(failure) => {
            let classified = classify(&failure);
            assert_eq!(classified.kind, ErrorKind::GraphResponse);
            assert_eq!(classified.message, "No content found for key abc");
        }
        FetchOutcome::Success(_) => panic!("expected failure"),
    }
}

#[tokio::test]
async fn test_unregistered_content_type() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(preview_body(article_item("abc"))))
        .mount(&server)
        .await;

    let mut config = config_for(&server);
    config.content_types = vec!["LandingPage".to_string()];
    let client = HttpGraphClient::new(&config).unwrap();

    let failure = client
        .get_preview_content(&PreviewParams::for_key("abc"))
        .await
        .unwrap_err();

    let classified = classify(&failure);
    assert_eq!(classified.kind, ErrorKind::MissingContentType);
    assert_eq!(classified.content_type_key.as_deref(), Some("ArticlePage"));
}

#[tokio::test]
async fn test_network_error_is_not_retried() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let gateway = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let mut config = graph_preview::PreviewConfig::default();
    config.graph.gateway = Some(gateway);
    let client = HttpGraphClient::new(&config).unwrap();

    // A single retry would pause for a full second
    let policy = RetryPolicy::new(4, Duration::from_secs(1));
    let start = Instant::now();
    let outcome = fetch_with_retry(&client, &PreviewParams::for_key("abc"), policy).await;

    assert!(start.elapsed() < Duration::from_millis(900));
    match outcome {
        FetchOutcome::Failure(failure) => {
            assert_eq!(classify(&failure).kind, ErrorKind::Unknown);
        }
        FetchOutcome::Success(_) => panic!("expected failure"),
    }
}

#[tokio::test]
async fn test_graphql_not_indexed_error_is_retried() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "errors": [{ "message": "No content found for key abc" }]
        })))
        .expect(4)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let policy = RetryPolicy::new(4, Duration::from_millis(5));
    let outcome = fetch_with_retry(&client, &PreviewParams::for_key("abc"), policy).await;

    match outcome {
        FetchOutcome::Failure(failure) => {
            let classified = classify(&failure);
            assert_eq!(classified.kind, ErrorKind::GraphContentResponse);
            assert_eq!(classified.message, "GraphQL error: No content found for key abc");
        }
        FetchOutcome::Success(_) => panic!("expected failure"),
    }
}

#[tokio::test]
async fn test_content_by_path() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_partial_json(json!({ "variables": { "path": "/en/articles/hello/" } })))
        .respond_with(ResponseTemplate::new(200).set_body_json(path_body(vec![article_item("abc")])))
        .expect(1)
        .mount(&server)
        .await;

    let items = client_for(&server)
        .get_content_by_path("en/articles/hello")
        .await
        .unwrap();

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].key.as_deref(), Some("abc"));
}
