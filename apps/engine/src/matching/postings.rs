//! Caller-side posting policy: the matcher itself never de-duplicates or filters.

use std::collections::HashSet;

use crate::models::{JobPosting, MatchResult};

/// Keeps the first posting for every `(title, company)` pair, preserving input order.
pub fn dedupe_postings(postings: Vec<JobPosting>) -> Vec<JobPosting> {
    let keep: Vec<bool> = {
        let mut seen = HashSet::new();
        postings.iter().map(|p| seen.insert(p.identity())).collect()
    };
    postings
        .into_iter()
        .zip(keep)
        .filter_map(|(p, first)| first.then_some(p))
        .collect()
}

/// Keeps ranked results scoring at least `threshold`, at most `limit` of them, in ranking order.
pub fn shortlist(results: Vec<MatchResult>, threshold: f64, limit: usize) -> Vec<MatchResult> {
    results
        .into_iter()
        .filter(|r| r.score >= threshold)
        .take(limit)
        .collect()
}
