//! Troubleshooting tips and badges keyed by failure kind

use super::classifier::{ClassifiedError, ErrorKind};
use serde::Serialize;

/// Color family of a badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeTone {
    Orange,
    Red,
    Yellow,
}

impl BadgeTone {
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Orange => "badge-orange",
            Self::Red => "badge-red",
            Self::Yellow => "badge-yellow",
        }
    }
}

/// Short label shown next to the report title
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Badge {
    pub label: String,
    pub tone: BadgeTone,
}

impl Badge {
    fn new<S: Into<String>>(label: S, tone: BadgeTone) -> Self {
        Self {
            label: label.into(),
            tone,
        }
    }
}

const SCHEMA_SYNC_TIPS: [&str; 4] = [
    "The GraphQL schema does not match your content type definitions.",
    "Push your content type definitions to the CMS so the schema is regenerated.",
    "After syncing, wait a few seconds for the content graph to re-index the schema.",
    "Copy the query below into GraphiQL to test it directly against the Graph endpoint.",
];

const SYNTAX_ERROR_TIPS: [&str; 3] = [
    "The generated GraphQL query has a syntax error. This is likely a client bug.",
    "Copy the query below into GraphiQL to see exact error details.",
    "If the error persists, contact Optimizely support.",
];

const NO_CONTENT_TIPS: [&str; 3] = [
    "The requested content was not found in the Graph index.",
    "Content may not be published yet, or the index may be stale.",
    "The preview page retries automatically, but you can also try refreshing.",
];

const CONTENT_FALLBACK_TIPS: [&str; 2] = [
    "Copy the query and variables below into GraphiQL to debug the request.",
    "Verify that the content exists and is published in the CMS.",
];

const GENERIC_TIPS: [&str; 4] = [
    "Verify that content types are synced with the CMS.",
    "Check that the content exists in the CMS and is published.",
    "Ensure environment variables are correctly configured.",
    "Verify the preview token is valid.",
];

impl ClassifiedError {
    /// Badge for the failure kind, `None` for unknown failures
    pub fn badge(&self) -> Option<Badge> {
        match self.kind {
            ErrorKind::MissingContentType => {
                Some(Badge::new("Missing Content Type", BadgeTone::Orange))
            }
            ErrorKind::GraphContentResponse => Some(Badge::new("GraphQL Error", BadgeTone::Red)),
            ErrorKind::GraphHttpResponse => Some(Badge::new(
                match self.http_status {
                    Some(status) => format!("HTTP {}", status),
                    None => "HTTP".to_string(),
                },
                BadgeTone::Red,
            )),
            ErrorKind::GraphResponse => Some(Badge::new("Graph Response Error", BadgeTone::Red)),
            ErrorKind::GenericGraphError => Some(Badge::new("Graph Error", BadgeTone::Yellow)),
            ErrorKind::Unknown => None,
        }
    }

    /// Troubleshooting tips selected by kind and message content
    pub fn troubleshooting_tips(&self) -> Vec<String> {
        match self.kind {
            ErrorKind::MissingContentType => missing_content_type_tips(
                self.content_type_key.as_deref().unwrap_or_default(),
            ),
            ErrorKind::GraphContentResponse => {
                content_response_tips(self.graphql_errors.as_deref().unwrap_or_default())
            }
            ErrorKind::GraphHttpResponse => http_response_tips(self.http_status.unwrap_or(0)),
            _ => owned_tips(&GENERIC_TIPS),
        }
    }
}

fn owned_tips(tips: &[&str]) -> Vec<String> {
    tips.iter().map(|tip| tip.to_string()).collect()
}

fn missing_content_type_tips(content_type: &str) -> Vec<String> {
    vec![
        format!(
            "The content type \"{}\" is not registered with the preview gateway.",
            content_type
        ),
        "Ensure the content type is defined in the CMS and listed under `content_types` in preview.toml.".to_string(),
        "Check that the registry list has no typo in the content type key.".to_string(),
        "Push your content type definitions to the CMS to keep the schema in sync.".to_string(),
    ]
}

fn content_response_tips(errors: &[crate::graph::GraphQlError]) -> Vec<String> {
    let has_schema_mismatch = any_message(errors, |m| {
        m.starts_with("Unknown type") || m.starts_with("Cannot query field")
    });
    let has_syntax_error = any_message(errors, |m| m.starts_with("Syntax Error"));
    let has_no_content = any_message(errors, |m| m.contains("No content found"));

    let mut tips = Vec::new();
    if has_schema_mismatch {
        tips.extend(owned_tips(&SCHEMA_SYNC_TIPS));
    }
    if has_syntax_error {
        tips.extend(owned_tips(&SYNTAX_ERROR_TIPS));
    }
    if has_no_content {
        tips.extend(owned_tips(&NO_CONTENT_TIPS));
    }
    if tips.is_empty() {
        tips.extend(owned_tips(&CONTENT_FALLBACK_TIPS));
    }
    tips
}

fn any_message(errors: &[crate::graph::GraphQlError], check: impl Fn(&str) -> bool) -> bool {
    errors.iter().any(|error| check(&error.message))
}

fn http_response_tips(status: u16) -> Vec<String> {
    match status {
        401 => owned_tips(&[
            "Authentication failed. Check that OPTIMIZELY_GRAPH_SINGLE_KEY is correct.",
            "The key may have been rotated or expired.",
        ]),
        404 => owned_tips(&[
            "The Graph endpoint returned 404.",
            "Verify OPTIMIZELY_GRAPH_GATEWAY and OPTIMIZELY_CMS_URL environment variables.",
        ]),
        status if status >= 500 => owned_tips(&[
            "The Optimizely Graph service returned a server error.",
            "This is usually temporary, try again in a few moments.",
            "If persistent, check the Optimizely status page.",
        ]),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::classify;
    use crate::graph::{GraphFailure, GraphQlError, GraphRequest};
    use serde_json::Map;

    fn request() -> GraphRequest {
        GraphRequest::new("query { item }", Map::new())
    }

    fn content_tips(messages: &[&str]) -> Vec<String> {
        let errors = messages.iter().map(|m| GraphQlError::new(*m)).collect();
        classify(&GraphFailure::content(200, errors, request())).troubleshooting_tips()
    }

    #[test]
    fn test_missing_content_type_tips() {
        let classified = classify(&GraphFailure::missing_content_type("HeroBlock"));
        let tips = classified.troubleshooting_tips();

        assert_eq!(tips.len(), 4);
        assert!(tips[0].contains("\"HeroBlock\""));
        assert_eq!(
            classified.badge(),
            Some(Badge::new("Missing Content Type", BadgeTone::Orange))
        );
    }

    #[test]
    fn test_tip_groups_concatenate() {
        let tips = content_tips(&["Unknown type Foo", "Syntax Error: Expected Name"]);

        let mut expected = owned_tips(&SCHEMA_SYNC_TIPS);
        expected.extend(owned_tips(&SYNTAX_ERROR_TIPS));
        assert_eq!(tips, expected);
    }

    #[test]
    fn test_all_content_tip_groups() {
        let tips = content_tips(&[
            "Cannot query field \"title\" on type \"ArticlePage\"",
            "Syntax Error: Unexpected }",
            "No content found for key abc",
        ]);
        assert_eq!(tips.len(), 10);
    }

    #[test]
    fn test_duplicate_matches_add_group_once() {
        let tips = content_tips(&["Unknown type Foo", "Cannot query field bar"]);
        assert_eq!(tips, owned_tips(&SCHEMA_SYNC_TIPS));
    }

    #[test]
    fn test_content_fallback_tips() {
        let tips = content_tips(&["Something else entirely"]);
        assert_eq!(tips, owned_tips(&CONTENT_FALLBACK_TIPS));
    }

    #[test]
    fn test_http_tips_by_status() {
        let tips_for = |status| {
            classify(&GraphFailure::http(status, "HTTP error", request())).troubleshooting_tips()
        };

        let unauthorized = tips_for(401);
        assert!(unauthorized.iter().any(|t| t.contains("rotated or expired")));

        let not_found = tips_for(404);
        assert!(not_found.iter().any(|t| t.contains("OPTIMIZELY_GRAPH_GATEWAY")));
        assert!(not_found.iter().any(|t| t.contains("OPTIMIZELY_CMS_URL")));

        let unavailable = tips_for(503);
        assert!(unavailable.iter().any(|t| t.contains("server error")));
        assert!(unavailable.iter().any(|t| t.contains("try again")));

        assert!(tips_for(418).is_empty());
    }

    #[test]
    fn test_http_badge_label() {
        let classified = classify(&GraphFailure::http(503, "HTTP error", request()));
        assert_eq!(classified.badge().map(|b| b.label), Some("HTTP 503".to_string()));
    }

    #[test]
    fn test_badges_for_remaining_kinds() {
        let label = |failure: GraphFailure| classify(&failure).badge().map(|b| b.label);

        assert_eq!(
            label(GraphFailure::content(200, vec![GraphQlError::new("x")], request())),
            Some("GraphQL Error".to_string())
        );
        assert_eq!(
            label(GraphFailure::response("x", request())),
            Some("Graph Response Error".to_string())
        );
        assert_eq!(label(GraphFailure::graph("x")), Some("Graph Error".to_string()));
        assert_eq!(label(GraphFailure::fetch("x")), None);
    }

    #[test]
    fn test_generic_tips_for_other_kinds() {
        let tips = classify(&GraphFailure::fetch("boom")).troubleshooting_tips();
        assert_eq!(tips, owned_tips(&GENERIC_TIPS));

        let tips = classify(&GraphFailure::response("bad", request())).troubleshooting_tips();
        assert_eq!(tips.len(), 4);
    }
}
