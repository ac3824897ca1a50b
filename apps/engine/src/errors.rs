use std::time::Duration;

use thiserror::Error;

/// Engine-level error type.
///
/// Scoring heuristics never produce one of these: they fall back to zero scores
/// and empty collections. Only input validation and the embedding provider can fail.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Embedding provider unavailable")]
    ProviderUnavailable,

    #[error("Matching failed{}: {source}", posting_label(.posting_index))]
    MatchingFailure {
        posting_index: Option<usize>,
        #[source]
        source: EmbeddingError,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl EngineError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        EngineError::InvalidInput(msg.into())
    }

    /// Failure while embedding the résumé itself.
    pub fn resume_embedding(source: EmbeddingError) -> Self {
        EngineError::MatchingFailure {
            posting_index: None,
            source,
        }
    }

    pub fn posting_embedding(index: usize, source: EmbeddingError) -> Self {
        EngineError::MatchingFailure {
            posting_index: Some(index),
            source,
        }
    }
}

fn posting_label(index: &Option<usize>) -> String {
    match index {
        Some(i) => format!(" at posting #{i}"),
        None => " on resume text".to_string(),
    }
}

/// Failures raised by an embedding provider.
#[derive(Debug, Error)]
pub enum EmbeddingError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Provider returned an empty embedding")]
    EmptyEmbedding,

    #[error("Provider returned a non-finite value at dimension {index}")]
    NonFinite { index: usize },

    #[error("Embedding dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Embedding call timed out after {0:?}")]
    Timeout(Duration),

    #[error("Rate limited on all {retries} attempts")]
    RateLimited { retries: u32 },

    #[error("Provider error: {0}")]
    Provider(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matching_failure_names_posting() {
        let err = EngineError::posting_embedding(2, EmbeddingError::EmptyEmbedding);
        let msg = err.to_string();
        assert!(msg.contains("posting #2"), "{msg}");
        assert!(msg.contains("empty embedding"), "{msg}");
    }

    #[test]
    fn test_matching_failure_on_resume() {
        let err = EngineError::resume_embedding(EmbeddingError::Timeout(Duration::from_secs(5)));
        assert!(err.to_string().contains("on resume text"));
    }

    #[test]
    fn test_invalid_input_message() {
        let err = EngineError::invalid_input("resume text is empty");
        assert_eq!(err.to_string(), "Invalid input: resume text is empty");
    }
}
