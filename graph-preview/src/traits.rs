use crate::graph::FetchResult;
use crate::types::{PreviewContent, PreviewParams};
use std::future::Future;

/// Trait for content graph clients
pub trait ContentSource: Send + Sync {
    /// Fetch the draft or versioned content identified by preview parameters
    fn get_preview_content(
        &self,
        params: &PreviewParams,
    ) -> impl Future<Output = FetchResult<PreviewContent>> + Send;

    /// Fetch published content whose URL matches `path`
    fn get_content_by_path(
        &self,
        path: &str,
    ) -> impl Future<Output = FetchResult<Vec<PreviewContent>>> + Send;
}
