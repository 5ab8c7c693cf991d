//! Failure values produced by the content graph client
//!
//! The graph SDK reports failures through a small hierarchy of error classes,
//! each tagged with a `name`. A [`GraphFailure`] carries that tag together with
//! every field the hierarchy can expose, filled in once where the failure is
//! created. Nothing downstream probes for fields; it reads the options.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Name tags used by the graph client's failure hierarchy
pub mod names {
    pub const GRAPH_ERROR: &str = "OptimizelyGraphError";
    pub const MISSING_CONTENT_TYPE: &str = "GraphMissingContentTypeError";
    pub const RESPONSE: &str = "GraphResponseError";
    pub const HTTP_RESPONSE: &str = "GraphHttpResponseError";
    pub const CONTENT_RESPONSE: &str = "GraphContentResponseError";
    pub const FETCH: &str = "FetchError";
}

/// The GraphQL request that was dispatched when a failure happened
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphRequest {
    pub query: String,
    #[serde(default)]
    pub variables: Map<String, Value>,
}

impl GraphRequest {
    pub fn new<S: Into<String>>(query: S, variables: Map<String, Value>) -> Self {
        Self {
            query: query.into(),
            variables,
        }
    }
}

/// Position of a GraphQL error inside the query text, 1-indexed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceLocation {
    pub line: u32,
    pub column: u32,
}

/// One entry of a GraphQL response's `errors` array
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphQlError {
    pub message: String,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub locations: Vec<SourceLocation>,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Map::is_empty"
    )]
    pub extensions: Map<String, Value>,
}

/// Servers may send `null` instead of leaving the field out
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl GraphQlError {
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self {
            message: message.into(),
            locations: Vec::new(),
            extensions: Map::new(),
        }
    }

    pub fn at(mut self, line: u32, column: u32) -> Self {
        self.locations.push(SourceLocation { line, column });
        self
    }

    pub fn with_extension<K: Into<String>>(mut self, key: K, value: Value) -> Self {
        self.extensions.insert(key.into(), value);
        self
    }
}

/// A failed content fetch.
///
/// Serializing a failure writes every field it carries, `name` and `message`
/// included, so the full error can be shown for diagnostics.
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
#[error("{name}: {}", .message.as_deref().unwrap_or("(no message)"))]
pub struct GraphFailure {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, rename = "contentType", skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request: Option<GraphRequest>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<GraphQlError>>,
}

impl GraphFailure {
    /// A failure with only a name tag and message
    pub fn named<N: Into<String>, M: Into<String>>(name: N, message: M) -> Self {
        Self {
            name: name.into(),
            message: Some(message.into()),
            content_type: None,
            request: None,
            status: None,
            errors: None,
        }
    }

    /// Base graph error without any response details
    pub fn graph<M: Into<String>>(message: M) -> Self {
        Self::named(names::GRAPH_ERROR, message)
    }

    /// Content type returned by the graph is not in the registry
    pub fn missing_content_type<S: Into<String>>(content_type: S) -> Self {
        let content_type = content_type.into();
        let mut failure = Self::named(
            names::MISSING_CONTENT_TYPE,
            format!("Content type \"{}\" is not included in the registry", content_type),
        );
        failure.content_type = Some(content_type);
        failure
    }

    /// The graph answered, but the answer could not be used
    pub fn response<M: Into<String>>(message: M, request: GraphRequest) -> Self {
        let mut failure = Self::named(names::RESPONSE, message);
        failure.request = Some(request);
        failure
    }

    /// The graph answered with a non-success HTTP status
    pub fn http<M: Into<String>>(status: u16, message: M, request: GraphRequest) -> Self {
        let mut failure = Self::named(names::HTTP_RESPONSE, message);
        failure.status = Some(status);
        failure.request = Some(request);
        failure
    }

    /// The graph answered with GraphQL errors in the body
    pub fn content(status: u16, errors: Vec<GraphQlError>, request: GraphRequest) -> Self {
        let message = match errors.first() {
            Some(first) => format!("GraphQL error: {}", first.message),
            None => "GraphQL error".to_string(),
        };
        let mut failure = Self::named(names::CONTENT_RESPONSE, message);
        failure.status = Some(status);
        failure.errors = Some(errors);
        failure.request = Some(request);
        failure
    }

    /// The request never produced a usable HTTP response
    pub fn fetch<M: Into<String>>(message: M) -> Self {
        Self::named(names::FETCH, message)
    }

    /// Drop the message, leaving only the name tag and fields
    pub fn without_message(mut self) -> Self {
        self.message = None;
        self
    }
}
