// Semantic job matching: embedding seam, HTTP provider, ranking and caller-side posting policy.
// All provider calls go through the EmbeddingProvider trait; nothing else talks to a model.

pub mod embedding;
pub mod http_provider;
pub mod matcher;
pub mod postings;

pub use embedding::{cosine_similarity, EmbeddingProvider};
pub use http_provider::HttpEmbeddingProvider;
pub use matcher::{FailurePolicy, MatchOptions, SemanticJobMatcher};
pub use postings::{dedupe_postings, shortlist};
