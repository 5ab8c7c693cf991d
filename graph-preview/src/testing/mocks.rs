use crate::graph::{FetchResult, GraphFailure};
use crate::traits::ContentSource;
use crate::types::{PreviewContent, PreviewParams};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use tokio::time::Instant;

/// Mock content source that replays scripted results
pub struct MockContentSource {
    scripted: Mutex<VecDeque<FetchResult<PreviewContent>>>,
    fallback: FetchResult<PreviewContent>,
    by_path: FetchResult<Vec<PreviewContent>>,
    attempts: AtomicUsize,
    call_times: Mutex<Vec<Instant>>,
}

impl MockContentSource {
    /// Replay `results` in order, then keep failing
    pub fn scripted(results: Vec<FetchResult<PreviewContent>>) -> Self {
        Self {
            scripted: Mutex::new(results.into()),
            fallback: Err(GraphFailure::graph("Mock script exhausted")),
            by_path: Ok(Vec::new()),
            attempts: AtomicUsize::new(0),
            call_times: Mutex::new(Vec::new()),
        }
    }

    /// Fail every call with the same failure
    pub fn failing_with(failure: GraphFailure) -> Self {
        let mut source = Self::scripted(Vec::new());
        source.fallback = Err(failure);
        source
    }

    /// Succeed every call with the same content
    pub fn succeeding_with(content: PreviewContent) -> Self {
        let mut source = Self::scripted(Vec::new());
        source.fallback = Ok(content);
        source
    }

    pub fn with_path_result(mut self, result: FetchResult<Vec<PreviewContent>>) -> Self {
        self.by_path = result;
        self
    }

    /// Number of preview fetches made so far
    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }

    /// When each preview fetch was made
    pub fn call_times(&self) -> Vec<Instant> {
        self.call_times.lock().unwrap().clone()
    }
}

impl ContentSource for MockContentSource {
    async fn get_preview_content(&self, _params: &PreviewParams) -> FetchResult<PreviewContent> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        self.call_times.lock().unwrap().push(Instant::now());

        let next = self.scripted.lock().unwrap().pop_front();
        next.unwrap_or_else(|| self.fallback.clone())
    }

    async fn get_content_by_path(&self, _path: &str) -> FetchResult<Vec<PreviewContent>> {
        self.by_path.clone()
    }
}
