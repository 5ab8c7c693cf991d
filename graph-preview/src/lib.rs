//! Graph Preview - CMS preview gateway for a headless content graph
//!
//! This crate fetches draft content from the content graph for the CMS
//! editor preview, rides out the short delay before a fresh save becomes
//! visible in the graph index, and turns every other failure into a
//! diagnostic report with troubleshooting tips.

// Core modules
pub mod config;
pub mod error;
pub mod types;

// Shared utility modules
pub mod formatter;
pub mod url_builder;

// Main functionality modules
pub mod analysis;
pub mod fetch;
pub mod graph;
pub mod renderers;
pub mod report;
pub mod server;
pub mod traits;

#[cfg(test)]
mod testing;

// Re-export main types for convenience
pub use analysis::{classify, Badge, BadgeTone, ClassifiedError, ErrorKind};
pub use config::{ConfigLoader, DefaultConfigLoader, EnvironmentReport, PreviewConfig};
pub use error::{PreviewError, Result};
pub use fetch::{fetch_with_retry, is_not_yet_indexed, FetchOutcome, RetryPolicy};
pub use graph::{FetchResult, GraphFailure, GraphQlError, GraphRequest, HttpGraphClient};
pub use renderers::{CliRenderer, HtmlRenderer, JsonRenderer, ReportRenderer};
pub use report::PreviewReport;
pub use server::{create_app, run_server, AppState};
pub use traits::ContentSource;
pub use types::{ParamValue, PreviewContent, PreviewParams};

/// Validate the configuration, then serve previews from the content graph
pub async fn serve(config: PreviewConfig) -> Result<()> {
    config.validate()?;
    let addr = config.bind_addr()?;
    let client = HttpGraphClient::new(&config)?;

    tracing::info!("Using content graph at {}", client.graph_url());
    let app = create_app(AppState::new(client, config));
    run_server(app, addr).await
}

/// Fetch preview content once, with the configured index-lag retries
pub async fn preview_once(config: &PreviewConfig, params: &PreviewParams) -> Result<FetchOutcome> {
    let client = HttpGraphClient::new(config)?;
    Ok(fetch_with_retry(&client, params, config.retry_policy()).await)
}
