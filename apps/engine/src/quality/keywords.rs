//! Keyword coverage: case-insensitive substring matching of taxonomy keywords.
//!
//! Matching is deliberately substring-based, not token-based: "java" also matches inside
//! "javascript", and hyphenated or compound terms are caught without a tokenizer.

use serde::{Deserialize, Serialize};

use crate::errors::EngineError;
use crate::models::resume;
use crate::taxonomy::Taxonomy;

/// Coverage of one category: how many of its keywords appear at least once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryScore {
    pub category: String,
    pub score: usize,
    pub total: usize,
    pub percentage: f64,
}

/// Keyword coverage across the whole taxonomy.
///
/// `overall_score == 100 * matched_count / available_count`, or 0 when nothing is available.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordAnalysis {
    /// In taxonomy order.
    pub by_category: Vec<CategoryScore>,
    pub overall_score: f64,
    pub matched_count: usize,
    pub available_count: usize,
}

impl KeywordAnalysis {
    pub fn category(&self, name: &str) -> Option<&CategoryScore> {
        self.by_category.iter().find(|c| c.category == name)
    }
}

/// Counts each taxonomy keyword at most once, no matter how often it occurs.
pub fn analyze_keywords(text: &str, taxonomy: &Taxonomy) -> KeywordAnalysis {
    let text_lower = text.to_lowercase();

    let mut by_category = Vec::with_capacity(taxonomy.categories().len());
    let mut matched_count = 0;
    let mut available_count = 0;

    for category in taxonomy.categories() {
        let total = category.keywords.len();
        let score = category
            .keywords
            .iter()
            .filter(|kw| text_lower.contains(kw.as_str()))
            .count();

        matched_count += score;
        available_count += total;

        by_category.push(CategoryScore {
            category: category.name.clone(),
            score,
            total,
            percentage: percentage(score, total),
        });
    }

    KeywordAnalysis {
        by_category,
        overall_score: percentage(matched_count, available_count),
        matched_count,
        available_count,
    }
}

/// Which career category a résumé leans towards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    /// `None` when no keyword from any category was found.
    pub top_category: Option<String>,
    /// Weighted keyword hits per category, in taxonomy order.
    pub scores: Vec<(String, f64)>,
    /// Share of the top score in the sum of all scores, 0.0 – 1.0.
    pub confidence: f64,
}

/// Scores every category by `weight` per matched keyword and picks the highest.
/// Ties go to the category declared first.
pub fn classify(text: &str, taxonomy: &Taxonomy) -> Result<Classification, EngineError> {
    resume::validate(text)?;
    let text_lower = text.to_lowercase();

    let scores: Vec<(String, f64)> = taxonomy
        .categories()
        .iter()
        .map(|category| {
            let hits = category
                .keywords
                .iter()
                .filter(|kw| text_lower.contains(kw.as_str()))
                .count();
            (category.name.clone(), hits as f64 * category.weight)
        })
        .collect();

    let mut top: Option<(&str, f64)> = None;
    for (name, score) in &scores {
        if *score > 0.0 && top.map_or(true, |(_, best)| *score > best) {
            top = Some((name.as_str(), *score));
        }
    }

    let total: f64 = scores.iter().map(|(_, s)| s).sum();
    let confidence = match top {
        Some((_, best)) if total > 0.0 => (best / total).min(1.0),
        _ => 0.0,
    };

    Ok(Classification {
        top_category: top.map(|(name, _)| name.to_string()),
        scores,
        confidence,
    })
}

fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}
