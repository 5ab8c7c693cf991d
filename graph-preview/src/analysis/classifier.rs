//! Pure classification of graph failures
//! No presentation concerns - returns structured data only

use crate::graph::{GraphFailure, GraphQlError, GraphRequest};
use serde::Serialize;
use std::collections::BTreeSet;

/// Message shown when a failure carries no message of its own
pub const UNKNOWN_ERROR_MESSAGE: &str = "Unknown error occurred";

/// Closed set of failure kinds, most specific first.
///
/// `GraphContentResponse` is a kind of `GraphHttpResponse`, which is a kind
/// of `GraphResponse`, which is a kind of `GenericGraphError`.
/// `MissingContentType` is a separate graph error branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ErrorKind {
    MissingContentType,
    GraphResponse,
    GraphHttpResponse,
    GraphContentResponse,
    GenericGraphError,
    Unknown,
}

impl ErrorKind {
    /// Whether this kind belongs to the `GraphResponse` family
    pub fn is_graph_response(self) -> bool {
        matches!(
            self,
            Self::GraphResponse | Self::GraphHttpResponse | Self::GraphContentResponse
        )
    }

    /// Whether this kind belongs to the `GraphHttpResponse` family
    pub fn is_http_response(self) -> bool {
        matches!(self, Self::GraphHttpResponse | Self::GraphContentResponse)
    }
}

/// Read-only view over a failure, built once per failed request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassifiedError {
    pub kind: ErrorKind,
    pub message: String,
    /// Whether `message` came from the failure rather than the fallback text
    #[serde(skip)]
    pub has_own_message: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_status: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request: Option<GraphRequest>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub graphql_errors: Option<Vec<GraphQlError>>,
    pub error_locations: BTreeSet<u32>,
}

/// Determine the most specific kind a failure exposes
pub fn determine_kind(failure: &GraphFailure) -> ErrorKind {
    if failure.errors.as_ref().is_some_and(|errors| !errors.is_empty()) {
        ErrorKind::GraphContentResponse
    } else if failure.status.is_some() {
        ErrorKind::GraphHttpResponse
    } else if failure.request.is_some() {
        ErrorKind::GraphResponse
    } else if failure.content_type.is_some() {
        ErrorKind::MissingContentType
    } else if failure.name.starts_with("Graph") || failure.name == crate::graph::names::GRAPH_ERROR {
        ErrorKind::GenericGraphError
    } else {
        ErrorKind::Unknown
    }
}

/// Classify a failure into a [`ClassifiedError`]
pub fn classify(failure: &GraphFailure) -> ClassifiedError {
    let kind = determine_kind(failure);

    let graphql_errors = match kind {
        ErrorKind::GraphContentResponse => failure.errors.clone(),
        _ => None,
    };
    let error_locations = graphql_errors
        .as_deref()
        .map(error_locations)
        .unwrap_or_default();

    ClassifiedError {
        kind,
        message: failure
            .message
            .clone()
            .unwrap_or_else(|| UNKNOWN_ERROR_MESSAGE.to_string()),
        has_own_message: failure.message.is_some(),
        content_type_key: match kind {
            ErrorKind::MissingContentType => failure.content_type.clone(),
            _ => None,
        },
        http_status: if kind.is_http_response() {
            failure.status
        } else {
            None
        },
        request: if kind.is_graph_response() {
            failure.request.clone()
        } else {
            None
        },
        graphql_errors,
        error_locations,
    }
}

/// Deduplicated line numbers of every location across GraphQL errors
pub fn error_locations(errors: &[GraphQlError]) -> BTreeSet<u32> {
    errors
        .iter()
        .flat_map(|error| error.locations.iter().map(|location| location.line))
        .collect()
}
