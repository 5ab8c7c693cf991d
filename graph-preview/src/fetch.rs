//! Preview fetch with bounded retries on content graph indexing lag
//!
//! A freshly saved draft can take a moment to show up in the graph index.
//! Only that one failure signature is retried, with a fixed pause between
//! attempts; every other failure is returned on first occurrence.

use crate::analysis::{classify, ClassifiedError};
use crate::graph::GraphFailure;
use crate::traits::ContentSource;
use crate::types::{PreviewContent, PreviewParams};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Message fragment the graph client uses when an indexed write is not visible yet
pub const NOT_YET_INDEXED_SIGNATURE: &str = "No content found for key";

/// Outcome of a preview fetch after retries
#[derive(Debug, Clone)]
pub enum FetchOutcome {
    Success(PreviewContent),
    Failure(GraphFailure),
}

impl FetchOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}

/// Bounded, fixed-delay retry settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, first try included
    pub max_attempts: u32,
    /// Pause between attempts
    pub delay: Duration,
}

impl RetryPolicy {
    /// A policy with at least one attempt
    pub fn new(max_attempts: u32, delay: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            delay,
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(4, Duration::from_millis(200))
    }
}

/// Whether a failure means the content exists but is not indexed yet.
///
/// This is the only place that knows the graph's wording for index lag.
/// A failure without a message of its own never matches.
pub fn is_not_yet_indexed(classified: &ClassifiedError) -> bool {
    classified.kind.is_graph_response()
        && classified.has_own_message
        && classified.message.contains(NOT_YET_INDEXED_SIGNATURE)
}

/// Fetch preview content, retrying only while the content is not yet indexed
pub async fn fetch_with_retry<S>(
    source: &S,
    params: &PreviewParams,
    policy: RetryPolicy,
) -> FetchOutcome
where
    S: ContentSource,
{
    let max_attempts = policy.max_attempts.max(1);
    let mut attempt = 1;

    loop {
        debug!(
            "Fetching preview content for key {:?} (attempt {}/{})",
            params.key, attempt, max_attempts
        );

        let failure = match source.get_preview_content(params).await {
            Ok(content) => {
                if attempt > 1 {
                    info!("Preview content became available after {} attempts", attempt);
                }
                return FetchOutcome::Success(content);
            }
            Err(failure) => failure,
        };

        let retryable = is_not_yet_indexed(&classify(&failure));
        if !retryable || attempt >= max_attempts {
            if retryable {
                warn!(
                    "Preview content still not indexed after {} attempts: {}",
                    attempt, failure
                );
            } else {
                warn!("Preview fetch failed: {}", failure);
            }
            return FetchOutcome::Failure(failure);
        }

        debug!(
            "Content not indexed yet, retrying in {}ms",
            policy.delay.as_millis()
        );
        tokio::time::sleep(policy.delay).await;
        attempt += 1;
    }
}
