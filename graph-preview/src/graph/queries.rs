//! GraphQL documents sent to the content graph

use crate::types::PreviewParams;
use serde_json::{json, Map, Value};

pub const PREVIEW_QUERY: &str = r#"query GetPreviewContent($key: String!, $ver: String, $loc: [Locales]) {
  _Content(
    where: { _metadata: { key: { eq: $key }, version: { eq: $ver } } }
    locale: $loc
  ) {
    item {
      __typename
      _metadata {
        key
        version
        locale
        displayName
        url {
          default
        }
      }
    }
  }
}"#;

pub const CONTENT_BY_PATH_QUERY: &str = r#"query GetContentByPath($path: String!) {
  _Content(where: { _metadata: { url: { default: { eq: $path } } } }) {
    items {
      __typename
      _metadata {
        key
        version
        locale
        displayName
        url {
          default
        }
      }
    }
  }
}"#;

/// Variables for [`PREVIEW_QUERY`]
pub fn preview_variables(key: &str, params: &PreviewParams) -> Map<String, Value> {
    let mut variables = Map::new();
    variables.insert("key".to_string(), json!(key));
    if let Some(ver) = &params.ver {
        variables.insert("ver".to_string(), json!(ver));
    }
    if let Some(loc) = &params.loc {
        variables.insert("loc".to_string(), json!([loc]));
    }
    variables
}

/// Variables for [`CONTENT_BY_PATH_QUERY`]
pub fn path_variables(path: &str) -> Map<String, Value> {
    let mut variables = Map::new();
    variables.insert("path".to_string(), json!(normalize_content_path(path)));
    variables
}

/// Content URLs in the graph start and end with a slash
pub fn normalize_content_path(path: &str) -> String {
    let trimmed = path.trim_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        format!("/{}/", trimmed)
    }
}
