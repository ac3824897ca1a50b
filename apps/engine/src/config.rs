use std::str::FromStr;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};

use crate::matching::FailurePolicy;

const DEFAULT_EMBEDDING_MODEL: &str = "all-MiniLM-L6-v2";

/// Engine configuration loaded from environment variables.
///
/// Nothing is strictly required: without `EMBEDDING_API_URL` the matcher starts degraded.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub embedding_api_url: Option<String>,
    pub embedding_api_key: Option<String>,
    pub embedding_model: String,
    pub embed_timeout: Duration,
    pub match_concurrency: usize,
    pub failure_policy: FailurePolicy,
    pub match_threshold: f64,
    pub max_job_matches: usize,
    pub rust_log: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            embedding_api_url: None,
            embedding_api_key: None,
            embedding_model: DEFAULT_EMBEDDING_MODEL.to_string(),
            embed_timeout: Duration::from_secs(30),
            match_concurrency: 4,
            failure_policy: FailurePolicy::AllOrNothing,
            match_threshold: 30.0,
            max_job_matches: 10,
            rust_log: "info".to_string(),
        }
    }
}

impl EngineConfig {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. `from_env` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let timeout_secs: u64 = parse_or(&lookup, "EMBEDDING_TIMEOUT_SECS", 30)?;
        let match_concurrency: usize = parse_or(&lookup, "MATCH_CONCURRENCY", 4)?;

        Ok(EngineConfig {
            embedding_api_url: non_empty("EMBEDDING_API_URL"),
            embedding_api_key: non_empty("EMBEDDING_API_KEY"),
            embedding_model: non_empty("EMBEDDING_MODEL").unwrap_or(defaults.embedding_model),
            embed_timeout: Duration::from_secs(timeout_secs),
            match_concurrency: match_concurrency.max(1),
            failure_policy: parse_or(&lookup, "MATCH_FAILURE_POLICY", defaults.failure_policy)?,
            match_threshold: parse_or(&lookup, "JOB_MATCH_THRESHOLD", defaults.match_threshold)?,
            max_job_matches: parse_or(&lookup, "MAX_JOB_MATCHES", defaults.max_job_matches)?,
            rust_log: non_empty("RUST_LOG").unwrap_or(defaults.rust_log),
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse::<T>()
            .map_err(|e| anyhow!("{e}"))
            .with_context(|| format!("Environment variable '{key}' has an invalid value '{raw}'")),
        _ => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_set() {
        let config = EngineConfig::from_lookup(lookup_from(&[])).unwrap();
        assert!(config.embedding_api_url.is_none());
        assert_eq!(config.embedding_model, "all-MiniLM-L6-v2");
        assert_eq!(config.embed_timeout, Duration::from_secs(30));
        assert_eq!(config.match_concurrency, 4);
        assert_eq!(config.failure_policy, FailurePolicy::AllOrNothing);
        assert_eq!(config.match_threshold, 30.0);
        assert_eq!(config.max_job_matches, 10);
        assert_eq!(config.rust_log, "info");
    }

    #[test]
    fn test_overrides_are_parsed() {
        let config = EngineConfig::from_lookup(lookup_from(&[
            ("EMBEDDING_API_URL", "http://localhost:9000"),
            ("EMBEDDING_API_KEY", "secret"),
            ("EMBEDDING_MODEL", "bge-small"),
            ("EMBEDDING_TIMEOUT_SECS", "5"),
            ("MATCH_CONCURRENCY", "8"),
            ("MATCH_FAILURE_POLICY", "skip_failed"),
            ("JOB_MATCH_THRESHOLD", "45.5"),
            ("MAX_JOB_MATCHES", "3"),
        ]))
        .unwrap();
        assert_eq!(config.embedding_api_url.as_deref(), Some("http://localhost:9000"));
        assert_eq!(config.embedding_api_key.as_deref(), Some("secret"));
        assert_eq!(config.embedding_model, "bge-small");
        assert_eq!(config.embed_timeout, Duration::from_secs(5));
        assert_eq!(config.match_concurrency, 8);
        assert_eq!(config.failure_policy, FailurePolicy::SkipFailed);
        assert_eq!(config.match_threshold, 45.5);
        assert_eq!(config.max_job_matches, 3);
    }

    #[test]
    fn test_blank_url_counts_as_unset() {
        let config =
            EngineConfig::from_lookup(lookup_from(&[("EMBEDDING_API_URL", "   ")])).unwrap();
        assert!(config.embedding_api_url.is_none());
    }

    #[test]
    fn test_zero_concurrency_is_clamped_to_one() {
        let config =
            EngineConfig::from_lookup(lookup_from(&[("MATCH_CONCURRENCY", "0")])).unwrap();
        assert_eq!(config.match_concurrency, 1);
    }

    #[test]
    fn test_invalid_number_names_the_variable() {
        let err = EngineConfig::from_lookup(lookup_from(&[("MAX_JOB_MATCHES", "ten")]))
            .unwrap_err();
        assert!(format!("{err:#}").contains("MAX_JOB_MATCHES"));
    }

    #[test]
    fn test_unknown_failure_policy_is_rejected() {
        let err = EngineConfig::from_lookup(lookup_from(&[("MATCH_FAILURE_POLICY", "retry")]))
            .unwrap_err();
        assert!(format!("{err:#}").contains("MATCH_FAILURE_POLICY"));
    }
}
