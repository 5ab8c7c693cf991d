use crate::config::PreviewConfig;
use crate::error::Result;
use crate::graph::failure::{GraphFailure, GraphQlError, GraphRequest};
use crate::graph::queries::{self, CONTENT_BY_PATH_QUERY, PREVIEW_QUERY};
use crate::graph::FetchResult;
use crate::traits::ContentSource;
use crate::types::{PreviewContent, PreviewParams};
use crate::url_builder::GraphUrlBuilder;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::{json, Value};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, warn};

/// Body of a GraphQL response
#[derive(Debug, Deserialize)]
struct GraphResponseBody {
    #[serde(default)]
    data: Option<Value>,
    #[serde(default)]
    errors: Option<Vec<GraphQlError>>,
}

/// Content graph client over HTTP
#[derive(Clone)]
pub struct HttpGraphClient {
    client: Client,
    graph_url: String,
    single_key: Option<String>,
    content_types: Arc<HashSet<String>>,
}

impl HttpGraphClient {
    /// Create a new graph client with configuration
    pub fn new(config: &PreviewConfig) -> Result<Self> {
        let graph_url = config.graph_url()?;
        let client = Client::builder().timeout(config.timeout()).build()?;

        debug!("Graph client targeting {}", graph_url);

        Ok(Self {
            client,
            graph_url,
            single_key: config.graph.single_key.clone(),
            content_types: Arc::new(config.content_types.iter().cloned().collect()),
        })
    }

    /// Resolved endpoint this client posts to
    pub fn graph_url(&self) -> &str {
        &self.graph_url
    }

    /// POST a query and return the `data` object of the response
    async fn execute(
        &self,
        request: &GraphRequest,
        preview_token: Option<&str>,
    ) -> FetchResult<Value> {
        // Preview tokens replace the single key for draft content.
        let single_key = match preview_token {
            Some(_) => None,
            None => self.single_key.as_deref(),
        };
        let url = GraphUrlBuilder::new(&self.graph_url)
            .single_key(single_key)
            .build()
            .map_err(|e| GraphFailure::graph(format!("Invalid graph URL: {}", e)))?;

        let mut builder = self.client.post(url).json(&json!({
            "query": request.query,
            "variables": request.variables,
        }));
        if let Some(token) = preview_token {
            builder = builder.bearer_auth(token);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| GraphFailure::fetch(format!("Request to content graph failed: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| GraphFailure::fetch(format!("Failed to read graph response: {}", e)))?;

        debug!("Graph responded with {} ({} bytes)", status, body.len());
        interpret_response(status, &body, request)
    }

    fn check_registered(&self, content: &PreviewContent) -> FetchResult<()> {
        if self.content_types.is_empty() {
            return Ok(());
        }
        match &content.content_type {
            Some(content_type) if !self.content_types.contains(content_type) => {
                warn!("Content type {} is not registered", content_type);
                Err(GraphFailure::missing_content_type(content_type.clone()))
            }
            _ => Ok(()),
        }
    }
}

/// Map a raw graph response to its `data` object or a failure
pub fn interpret_response(
    status: StatusCode,
    body: &str,
    request: &GraphRequest,
) -> FetchResult<Value> {
    let parsed = serde_json::from_str::<GraphResponseBody>(body);

    if let Ok(GraphResponseBody {
        errors: Some(errors),
        ..
    }) = &parsed
    {
        if !errors.is_empty() {
            return Err(GraphFailure::content(
                status.as_u16(),
                errors.clone(),
                request.clone(),
            ));
        }
    }

    if !status.is_success() {
        let message = match status.canonical_reason() {
            Some(reason) => format!("HTTP {}: {}", status.as_u16(), reason),
            None => format!("HTTP {}", status.as_u16()),
        };
        return Err(GraphFailure::http(status.as_u16(), message, request.clone()));
    }

    match parsed {
        Ok(GraphResponseBody {
            data: Some(data), ..
        }) => Ok(data),
        Ok(_) => Err(GraphFailure::response(
            "Graph response did not include data",
            request.clone(),
        )),
        Err(e) => Err(GraphFailure::response(
            format!("Invalid JSON in graph response: {}", e),
            request.clone(),
        )),
    }
}

fn is_empty_item(item: Option<&Value>) -> bool {
    match item {
        None | Some(Value::Null) => true,
        Some(Value::Object(fields)) => fields.is_empty(),
        Some(_) => false,
    }
}

impl ContentSource for HttpGraphClient {
    async fn get_preview_content(&self, params: &PreviewParams) -> FetchResult<PreviewContent> {
        let key = params
            .key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| GraphFailure::graph("Preview parameters do not include a content key"))?;

        let request = GraphRequest::new(PREVIEW_QUERY, queries::preview_variables(key, params));
        let data = self
            .execute(&request, params.preview_token.as_deref())
            .await?;

        let item = data.pointer("/_Content/item");
        if is_empty_item(item) {
            return Err(GraphFailure::response(
                format!("No content found for key {}", key),
                request,
            ));
        }

        let content = PreviewContent::from_item(item.cloned().unwrap_or(Value::Null));
        self.check_registered(&content)?;
        Ok(content)
    }

    async fn get_content_by_path(&self, path: &str) -> FetchResult<Vec<PreviewContent>> {
        let request = GraphRequest::new(CONTENT_BY_PATH_QUERY, queries::path_variables(path));
        let data = self.execute(&request, None).await?;

        let items = data
            .pointer("/_Content/items")
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default();

        let contents: Vec<PreviewContent> = items
            .into_iter()
            .filter(|item| !is_empty_item(Some(item)))
            .map(PreviewContent::from_item)
            .collect();

        for content in &contents {
            self.check_registered(content)?;
        }
        Ok(contents)
    }
}
