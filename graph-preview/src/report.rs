//! Structured preview error report
//!
//! Everything a renderer shows is computed here, so the HTML, terminal and
//! JSON outputs stay in agreement.

use crate::analysis::{classify, Badge, ClassifiedError, ErrorKind};
use crate::formatter::{format_locations, highlight_lines, pretty_json, QueryLine};
use crate::graph::GraphFailure;
use crate::types::PreviewParams;
use serde::Serialize;
use serde_json::json;

/// One GraphQL error prepared for display
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphQlErrorView {
    pub message: String,
    /// Label is plural when there is more than one location
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locations_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locations: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extensions: Option<String>,
}

/// The query that was sent, prepared for display and copying
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequestView {
    pub query: String,
    pub lines: Vec<QueryLine>,
    /// `{query, variables}` as pretty JSON
    pub full_request: String,
}

/// Everything needed to render one failed preview
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreviewReport {
    pub kind: ErrorKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<Badge>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_status: Option<u16>,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub missing_content_type: Option<String>,
    pub graphql_errors: Vec<GraphQlErrorView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request: Option<RequestView>,
    /// Shown whenever a request was sent, even one with an empty query
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<String>,
    pub tips: Vec<String>,
    pub params: String,
    pub full_error: String,
}

impl PreviewReport {
    /// Classify `failure` and build its report
    pub fn build(failure: &GraphFailure, params: &PreviewParams) -> Self {
        Self::from_classified(&classify(failure), failure, params)
    }

    /// Build a report from an existing classification
    pub fn from_classified(
        classified: &ClassifiedError,
        failure: &GraphFailure,
        params: &PreviewParams,
    ) -> Self {
        let graphql_errors = classified
            .graphql_errors
            .iter()
            .flatten()
            .map(|error| GraphQlErrorView {
                message: error.message.clone(),
                locations_label: match error.locations.len() {
                    0 => None,
                    1 => Some("Location".to_string()),
                    _ => Some("Locations".to_string()),
                },
                locations: if error.locations.is_empty() {
                    None
                } else {
                    Some(format_locations(&error.locations))
                },
                extensions: if error.extensions.is_empty() {
                    None
                } else {
                    Some(pretty_json(&error.extensions))
                },
            })
            .collect();

        let request = classified
            .request
            .as_ref()
            .filter(|request| !request.query.is_empty())
            .map(|request| RequestView {
                query: request.query.clone(),
                lines: highlight_lines(&request.query, &classified.error_locations),
                full_request: pretty_json(&json!({
                    "query": request.query,
                    "variables": request.variables,
                })),
            });
        let variables = classified
            .request
            .as_ref()
            .map(|request| pretty_json(&request.variables));

        Self {
            kind: classified.kind,
            badge: classified.badge(),
            http_status: classified.http_status,
            message: classified.message.clone(),
            missing_content_type: classified.content_type_key.clone(),
            graphql_errors,
            request,
            variables,
            tips: classified.troubleshooting_tips(),
            params: pretty_json(params),
            full_error: pretty_json(failure),
        }
    }
}
