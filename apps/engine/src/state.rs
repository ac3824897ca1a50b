use std::sync::Arc;

use tracing::info;

use crate::config::EngineConfig;
use crate::errors::EngineError;
use crate::matching::{
    dedupe_postings, shortlist, EmbeddingProvider, HttpEmbeddingProvider, MatchOptions,
    SemanticJobMatcher,
};
use crate::models::{JobPosting, MatchResult};
use crate::quality::{Classification, ResumeAnalysis, ResumeQualityScorer};
use crate::taxonomy::Taxonomy;

/// Shared engine state: constructed once, cloned cheaply into every caller.
#[derive(Clone, Debug)]
pub struct Engine {
    pub config: EngineConfig,
    pub taxonomy: Arc<Taxonomy>,
    pub scorer: Arc<ResumeQualityScorer>,
    /// Degraded when no embedding provider is configured.
    pub matcher: Arc<SemanticJobMatcher>,
}

impl Engine {
    /// Builds the standard taxonomy and, when `EMBEDDING_API_URL` is set, an HTTP provider.
    pub fn from_config(config: EngineConfig) -> Result<Self, EngineError> {
        let provider = HttpEmbeddingProvider::from_config(&config)?
            .map(|p| Arc::new(p) as Arc<dyn EmbeddingProvider>);
        Ok(Self::with_provider(config, Arc::new(Taxonomy::standard()), provider))
    }

    pub fn with_provider(
        config: EngineConfig,
        taxonomy: Arc<Taxonomy>,
        provider: Option<Arc<dyn EmbeddingProvider>>,
    ) -> Self {
        let scorer = Arc::new(ResumeQualityScorer::new(Arc::clone(&taxonomy)));
        let matcher = Arc::new(SemanticJobMatcher::new(provider, MatchOptions::from(&config)));

        info!(
            "ATS engine initialised ({} categories, {} keywords, matching {})",
            taxonomy.categories().len(),
            taxonomy.keyword_count(),
            if matcher.is_degraded() { "disabled" } else { "enabled" }
        );

        Self {
            config,
            taxonomy,
            scorer,
            matcher,
        }
    }

    pub fn analyze(&self, resume_text: &str) -> Result<ResumeAnalysis, EngineError> {
        self.scorer.analyze(resume_text)
    }

    pub fn analyze_for_role(
        &self,
        resume_text: &str,
        target_job: Option<&str>,
    ) -> Result<ResumeAnalysis, EngineError> {
        self.scorer.analyze_for_role(resume_text, target_job)
    }

    pub fn classify(&self, resume_text: &str) -> Result<Classification, EngineError> {
        self.scorer.classify(resume_text)
    }

    pub async fn match_postings(
        &self,
        resume_text: &str,
        postings: &[JobPosting],
    ) -> Result<Vec<MatchResult>, EngineError> {
        self.matcher.match_postings(resume_text, postings).await
    }

    /// De-duplicates postings, ranks them, then keeps the configured shortlist.
    pub async fn rank_postings(
        &self,
        resume_text: &str,
        postings: Vec<JobPosting>,
    ) -> Result<Vec<MatchResult>, EngineError> {
        let unique = dedupe_postings(postings);
        let ranked = self.matcher.match_postings(resume_text, &unique).await?;
        Ok(shortlist(
            ranked,
            self.config.match_threshold,
            self.config.max_job_matches,
        ))
    }
}
