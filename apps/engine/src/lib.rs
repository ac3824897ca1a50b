//! Résumé matching and ATS quality scoring.
//!
//! Two independent components share one read-only keyword taxonomy:
//! - [`ResumeQualityScorer`] turns résumé text into keyword coverage, a formatting score
//!   and actionable advice.
//! - [`SemanticJobMatcher`] ranks job postings by embedding similarity to the résumé,
//!   through any [`EmbeddingProvider`].
//!
//! [`Engine`] wires both from an [`EngineConfig`].

pub mod config;
pub mod errors;
pub mod matching;
pub mod models;
pub mod quality;
pub mod state;
pub mod taxonomy;
pub mod telemetry;

pub use config::EngineConfig;
pub use errors::{EmbeddingError, EngineError};
pub use matching::{
    dedupe_postings, shortlist, EmbeddingProvider, FailurePolicy, HttpEmbeddingProvider,
    MatchOptions, SemanticJobMatcher,
};
pub use models::{JobPosting, MatchResult, ResumeText};
pub use quality::{
    CategoryScore, Classification, FormattingIssue, KeywordAnalysis, ResumeAnalysis,
    ResumeQualityScorer,
};
pub use state::Engine;
pub use taxonomy::{ats_keywords_for, recommended_sections, Category, Taxonomy};
pub use telemetry::init_tracing;
