//! Semantic job matcher. Ranks postings by cosine similarity to the résumé embedding.
//!
//! Posting embeddings run on a bounded pool of tokio tasks. The output order only depends
//! on the scores and the input order (stable sort), never on which task finished first.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{debug, error, info, warn};

use crate::config::EngineConfig;
use crate::errors::{EmbeddingError, EngineError};
use crate::matching::embedding::{cosine_similarity, EmbeddingProvider};
use crate::models::{resume, JobPosting, MatchResult};

/// What to do when a single posting cannot be embedded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// Fail the whole call; a partially ranked list is never returned.
    #[default]
    AllOrNothing,
    /// Drop the failed posting, log a warning, rank the rest.
    SkipFailed,
}

impl FromStr for FailurePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all_or_nothing" => Ok(FailurePolicy::AllOrNothing),
            "skip_failed" => Ok(FailurePolicy::SkipFailed),
            other => Err(format!(
                "unknown failure policy '{other}' (expected all_or_nothing or skip_failed)"
            )),
        }
    }
}

impl fmt::Display for FailurePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailurePolicy::AllOrNothing => f.write_str("all_or_nothing"),
            FailurePolicy::SkipFailed => f.write_str("skip_failed"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchOptions {
    /// Maximum number of embedding calls in flight.
    pub concurrency: usize,
    /// Wrapped around every single embedding call.
    pub embed_timeout: Duration,
    pub failure_policy: FailurePolicy,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            concurrency: 4,
            embed_timeout: Duration::from_secs(30),
            failure_policy: FailurePolicy::AllOrNothing,
        }
    }
}

impl From<&EngineConfig> for MatchOptions {
    fn from(config: &EngineConfig) -> Self {
        Self {
            concurrency: config.match_concurrency.max(1),
            embed_timeout: config.embed_timeout,
            failure_policy: config.failure_policy,
        }
    }
}

/// Ranks job postings against a résumé.
///
/// Built without a provider, the matcher is degraded: `match_postings` returns an empty list
/// and `try_match` returns [`EngineError::ProviderUnavailable`].
pub struct SemanticJobMatcher {
    provider: Option<Arc<dyn EmbeddingProvider>>,
    options: MatchOptions,
}

impl fmt::Debug for SemanticJobMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SemanticJobMatcher")
            .field("provider", &self.provider.as_ref().map(|p| p.name().to_string()))
            .field("options", &self.options)
            .finish()
    }
}

impl SemanticJobMatcher {
    pub fn new(provider: Option<Arc<dyn EmbeddingProvider>>, options: MatchOptions) -> Self {
        match &provider {
            Some(p) => info!(
                "Semantic job matcher ready (provider: {}, concurrency: {}, policy: {})",
                p.name(),
                options.concurrency,
                options.failure_policy
            ),
            None => warn!(
                "No embedding provider available; semantic job matching is disabled and will return no results"
            ),
        }
        Self { provider, options }
    }

    pub fn with_provider(provider: Arc<dyn EmbeddingProvider>) -> Self {
        Self::new(Some(provider), MatchOptions::default())
    }

    pub fn degraded() -> Self {
        Self::new(None, MatchOptions::default())
    }

    pub fn is_degraded(&self) -> bool {
        self.provider.is_none()
    }

    pub fn options(&self) -> &MatchOptions {
        &self.options
    }

    /// Scores every posting and returns them by descending score, ties in input order.
    ///
    /// A degraded matcher returns an empty list instead of an error.
    pub async fn match_postings(
        &self,
        resume_text: &str,
        postings: &[JobPosting],
    ) -> Result<Vec<MatchResult>, EngineError> {
        match self.try_match(resume_text, postings).await {
            Err(EngineError::ProviderUnavailable) => Ok(Vec::new()),
            other => other,
        }
    }

    /// Strict form of [`match_postings`](Self::match_postings): a missing provider is an error.
    pub async fn try_match(
        &self,
        resume_text: &str,
        postings: &[JobPosting],
    ) -> Result<Vec<MatchResult>, EngineError> {
        let provider = self
            .provider
            .as_ref()
            .ok_or(EngineError::ProviderUnavailable)?;

        if postings.is_empty() {
            return Ok(Vec::new());
        }
        resume::validate(resume_text)?;

        let resume_vector =
            embed_with_timeout(provider.as_ref(), resume_text, self.options.embed_timeout)
                .await
                .map_err(|e| {
                    error!("Failed to embed resume text: {e}");
                    EngineError::resume_embedding(e)
                })?;

        let vectors = self.embed_postings(provider, postings).await?;

        let mut results = Vec::with_capacity(postings.len());
        for (index, (posting, vector)) in postings.iter().zip(vectors).enumerate() {
            let Some(vector) = vector else { continue };
            match cosine_similarity(&resume_vector, &vector) {
                Ok(similarity) => results.push(MatchResult {
                    job: posting.clone(),
                    score: similarity * 100.0,
                }),
                Err(e) => self.on_posting_failure(index, e)?,
            }
        }

        // sort_by is stable: equal scores keep their input order
        results.sort_by(|a, b| b.score.total_cmp(&a.score));

        debug!(
            "Matched {} of {} postings; best score {:?}",
            results.len(),
            postings.len(),
            results.first().map(|r| r.score)
        );
        Ok(results)
    }

    /// Embeds every posting's composite text, at most `concurrency` at a time.
    /// Slot `i` is `None` when posting `i` failed under [`FailurePolicy::SkipFailed`].
    /// Under [`FailurePolicy::AllOrNothing`] the lowest failing index is reported, whatever
    /// order the tasks finish in.
    async fn embed_postings(
        &self,
        provider: &Arc<dyn EmbeddingProvider>,
        postings: &[JobPosting],
    ) -> Result<Vec<Option<Vec<f32>>>, EngineError> {
        let permits = Arc::new(Semaphore::new(self.options.concurrency.max(1)));
        let mut tasks = JoinSet::new();

        for (index, posting) in postings.iter().enumerate() {
            let provider = Arc::clone(provider);
            let permits = Arc::clone(&permits);
            let text = posting.composite_text();
            let timeout = self.options.embed_timeout;

            tasks.spawn(async move {
                let result = match permits.acquire_owned().await {
                    Ok(_permit) => embed_with_timeout(provider.as_ref(), &text, timeout).await,
                    Err(_) => Err(EmbeddingError::Provider("worker pool closed".to_string())),
                };
                (index, result)
            });
        }

        let mut vectors: Vec<Option<Vec<f32>>> = vec![None; postings.len()];
        let mut first_failure: Option<(usize, EmbeddingError)> = None;
        while let Some(joined) = tasks.join_next().await {
            let (index, result) = match joined {
                Ok(pair) => pair,
                Err(e) => {
                    tasks.abort_all();
                    return Err(EngineError::MatchingFailure {
                        posting_index: None,
                        source: EmbeddingError::Provider(format!("embedding task failed: {e}")),
                    });
                }
            };

            match result {
                Ok(vector) => vectors[index] = Some(vector),
                Err(e) if self.options.failure_policy == FailurePolicy::AllOrNothing => {
                    if first_failure.as_ref().map_or(true, |(i, _)| index < *i) {
                        first_failure = Some((index, e));
                    }
                }
                Err(e) => self.on_posting_failure(index, e)?,
            }
        }

        if let Some((index, e)) = first_failure {
            self.on_posting_failure(index, e)?;
        }
        Ok(vectors)
    }

    fn on_posting_failure(&self, index: usize, e: EmbeddingError) -> Result<(), EngineError> {
        match self.options.failure_policy {
            FailurePolicy::AllOrNothing => {
                error!("Embedding failed for posting #{index}: {e}");
                Err(EngineError::posting_embedding(index, e))
            }
            FailurePolicy::SkipFailed => {
                warn!("Skipping posting #{index}, embedding failed: {e}");
                Ok(())
            }
        }
    }
}

async fn embed_with_timeout(
    provider: &dyn EmbeddingProvider,
    text: &str,
    timeout: Duration,
) -> Result<Vec<f32>, EmbeddingError> {
    let vector = tokio::time::timeout(timeout, provider.embed(text))
        .await
        .map_err(|_| EmbeddingError::Timeout(timeout))??;
    if vector.is_empty() {
        return Err(EmbeddingError::EmptyEmbedding);
    }
    if let Some(index) = vector.iter().position(|x| !x.is_finite()) {
        return Err(EmbeddingError::NonFinite { index });
    }
    Ok(vector)
}
