// Shared state for the preview server
use crate::config::PreviewConfig;
use crate::fetch::RetryPolicy;
use std::sync::Arc;

pub struct AppState<S> {
    pub source: Arc<S>,
    pub config: Arc<PreviewConfig>,
    pub retry_policy: RetryPolicy,
}

impl<S> AppState<S> {
    pub fn new(source: S, config: PreviewConfig) -> Self {
        Self {
            source: Arc::new(source),
            retry_policy: config.retry_policy(),
            config: Arc::new(config),
        }
    }

    /// CMS base URL used for the editor communication script
    pub fn cms_url(&self) -> Option<&str> {
        self.config.cms.url.as_deref().filter(|url| !url.is_empty())
    }
}

// Derived Clone would require `S: Clone`
impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
            config: Arc::clone(&self.config),
            retry_policy: self.retry_policy,
        }
    }
}
