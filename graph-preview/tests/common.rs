//! Shared helpers for graph-preview integration tests
#![allow(dead_code)]

use graph_preview::{HttpGraphClient, PreviewConfig};
use serde_json::{json, Value};
use wiremock::MockServer;

/// Graph path the mock gateway serves
pub const GRAPH_PATH: &str = "/content/v2";

/// Configuration pointing at a mock gateway
pub fn config_for(server: &MockServer) -> PreviewConfig {
    let mut config = PreviewConfig::default();
    config.graph.gateway = Some(server.uri());
    config.graph.single_key = Some("test-single-key".to_string());
    config.graph.timeout_seconds = Some(5);
    config.retry.delay_ms = 5;
    config
}

pub fn client_for(server: &MockServer) -> HttpGraphClient {
    HttpGraphClient::new(&config_for(server)).expect("client should build")
}

/// A preview item as the graph returns it
pub fn article_item(key: &str) -> Value {
    json!({
        "__typename": "ArticlePage",
        "_metadata": {
            "key": key,
            "version": "3",
            "locale": "en",
            "displayName": "Hello",
            "url": { "default": "/en/articles/hello/" }
        }
    })
}

/// `{"data": {"_Content": {"item": ...}}}`
pub fn preview_body(item: Value) -> Value {
    json!({ "data": { "_Content": { "item": item } } })
}

/// `{"data": {"_Content": {"items": [...]}}}`
pub fn path_body(items: Vec<Value>) -> Value {
    json!({ "data": { "_Content": { "items": items } } })
}
