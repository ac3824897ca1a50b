//! Human-readable advice derived from keyword and formatting results.
//!
//! Every check is independent and contributes at most one entry, in a fixed order.

use std::sync::OnceLock;

use regex::Regex;

use crate::quality::keywords::KeywordAnalysis;

const ACTION_VERBS: &[&str] = &[
    "developed",
    "implemented",
    "managed",
    "created",
    "designed",
    "led",
];

/// Role suffix → coarse keywords a posting with that title usually expects.
const ROLE_KEYWORDS: &[(&str, &[&str])] = &[
    ("developer", &["programming", "coding", "development", "software"]),
    ("engineer", &["engineering", "technical", "development", "design"]),
    ("analyst", &["analysis", "data", "research", "evaluation"]),
    ("manager", &["management", "leadership", "coordination", "planning"]),
    ("specialist", &["expertise", "specialization", "knowledge", "skills"]),
];

const MAX_LISTED_ROLE_KEYWORDS: usize = 5;

const KEYWORD_DENSITY_THRESHOLD: f64 = 60.0;
const CATEGORY_RECOMMENDATION_THRESHOLD: f64 = 50.0;

const STRONG_KEYWORDS: f64 = 70.0;
const STRONG_FORMATTING: f64 = 80.0;
const STRONG_CATEGORY: f64 = 80.0;
const WEAK_KEYWORDS: f64 = 50.0;
const WEAK_FORMATTING: f64 = 70.0;
const WEAK_CATEGORY: f64 = 40.0;

/// A percentage, an `Nx` multiplier, or a dollar amount.
fn quantification() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\d+%|\d+x|\$\d+").expect("quantification pattern is valid"))
}

/// Structural suggestions: missing sections, weak verbs, no metrics.
pub fn formatting_suggestions(text: &str) -> Vec<String> {
    let text_lower = text.to_lowercase();
    let mut suggestions = Vec::new();

    if !text_lower.contains("experience") {
        suggestions.push("Add an 'Experience' section to highlight work history".to_string());
    }
    if !text_lower.contains("skills") {
        suggestions.push("Add a 'Skills' section to showcase technical abilities".to_string());
    }
    if !text_lower.contains("education") {
        suggestions.push("Add an 'Education' section for academic background".to_string());
    }
    if !ACTION_VERBS.iter().any(|verb| text_lower.contains(verb)) {
        suggestions.push("Use strong action verbs to describe achievements".to_string());
    }
    if !quantification().is_match(text) {
        suggestions.push("Include quantifiable results and metrics when possible".to_string());
    }

    suggestions
}

/// Keyword-oriented recommendations, optionally tailored to a target job title.
pub fn optimization_recommendations(
    text: &str,
    keywords: &KeywordAnalysis,
    target_job: Option<&str>,
) -> Vec<String> {
    let mut recommendations = Vec::new();

    if keywords.overall_score < KEYWORD_DENSITY_THRESHOLD {
        recommendations.push(
            "Increase keyword density by incorporating more relevant technical terms".to_string(),
        );
    }

    for category in &keywords.by_category {
        if category.percentage < CATEGORY_RECOMMENDATION_THRESHOLD {
            recommendations.push(format!(
                "Add more {} related keywords to improve category match",
                category.category
            ));
        }
    }

    if let Some(job) = target_job.map(str::trim).filter(|j| !j.is_empty()) {
        let text_lower = text.to_lowercase();
        let missing: Vec<&str> = role_keywords(job)
            .into_iter()
            .filter(|kw| !text_lower.contains(kw))
            .take(MAX_LISTED_ROLE_KEYWORDS)
            .collect();
        if !missing.is_empty() {
            recommendations.push(format!(
                "Consider adding these keywords for '{}': {}",
                job,
                missing.join(", ")
            ));
        }
    }

    recommendations
}

/// Coarse keywords for a job title, by role suffix substring. Duplicates keep their first position.
pub fn role_keywords(job_title: &str) -> Vec<&'static str> {
    let title_lower = job_title.to_lowercase();
    let mut keywords: Vec<&'static str> = Vec::new();
    for (role, related) in ROLE_KEYWORDS {
        if title_lower.contains(role) {
            for &kw in related.iter() {
                if !keywords.contains(&kw) {
                    keywords.push(kw);
                }
            }
        }
    }
    keywords
}

pub fn strengths(keywords: &KeywordAnalysis, formatting_score: f64) -> Vec<String> {
    let mut strengths = Vec::new();

    if keywords.overall_score > STRONG_KEYWORDS {
        strengths.push("Strong keyword presence across multiple categories".to_string());
    }
    if formatting_score > STRONG_FORMATTING {
        strengths.push("Good ATS formatting and structure".to_string());
    }
    for category in &keywords.by_category {
        if category.percentage > STRONG_CATEGORY {
            strengths.push(format!("Excellent {} keyword coverage", category.category));
        }
    }

    strengths
}

pub fn improvement_areas(keywords: &KeywordAnalysis, formatting_score: f64) -> Vec<String> {
    let mut areas = Vec::new();

    if keywords.overall_score < WEAK_KEYWORDS {
        areas.push("Low keyword density - consider adding more relevant terms".to_string());
    }
    if formatting_score < WEAK_FORMATTING {
        areas.push("ATS formatting needs improvement".to_string());
    }
    for category in &keywords.by_category {
        if category.percentage < WEAK_CATEGORY {
            areas.push(format!("Limited {} keyword presence", category.category));
        }
    }

    areas
}
