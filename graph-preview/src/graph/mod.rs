//! Content graph access: the HTTP client and the failures it reports

pub mod client;
pub mod failure;
pub mod queries;

pub use client::{interpret_response, HttpGraphClient};
pub use failure::{names, GraphFailure, GraphQlError, GraphRequest, SourceLocation};

/// Result of a single call to the content graph
pub type FetchResult<T> = std::result::Result<T, GraphFailure>;
