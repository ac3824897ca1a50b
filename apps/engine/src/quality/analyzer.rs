use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::EngineError;
use crate::models::resume;
use crate::quality::advice;
use crate::quality::formatting::{check_formatting, FormattingIssue};
use crate::quality::keywords::{analyze_keywords, classify, Classification, KeywordAnalysis};
use crate::taxonomy::Taxonomy;

const KEYWORD_WEIGHT: f64 = 0.7;
const FORMATTING_WEIGHT: f64 = 0.3;

/// Full quality report for one résumé. Built fresh per call and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeAnalysis {
    /// 0.7 × keyword score + 0.3 × formatting score, rounded to one decimal.
    pub overall_score: f64,
    pub keyword_analysis: KeywordAnalysis,
    pub formatting_score: f64,
    pub formatting_issues: Vec<FormattingIssue>,
    pub suggestions: Vec<String>,
    pub optimization_recommendations: Vec<String>,
    pub strengths: Vec<String>,
    pub improvement_areas: Vec<String>,
}

/// Scores résumé text for ATS compatibility against a shared taxonomy.
///
/// Stateless after construction; clone the `Arc` to share it across tasks.
#[derive(Debug, Clone)]
pub struct ResumeQualityScorer {
    taxonomy: Arc<Taxonomy>,
}

impl ResumeQualityScorer {
    pub fn new(taxonomy: Arc<Taxonomy>) -> Self {
        Self { taxonomy }
    }

    pub fn taxonomy(&self) -> &Taxonomy {
        &self.taxonomy
    }

    pub fn analyze(&self, resume_text: &str) -> Result<ResumeAnalysis, EngineError> {
        self.analyze_for_role(resume_text, None)
    }

    /// Like [`analyze`](Self::analyze), with recommendations tailored to `target_job` when given.
    pub fn analyze_for_role(
        &self,
        resume_text: &str,
        target_job: Option<&str>,
    ) -> Result<ResumeAnalysis, EngineError> {
        resume::validate(resume_text)?;

        let keyword_analysis = analyze_keywords(resume_text, &self.taxonomy);
        let formatting = check_formatting(resume_text);

        let suggestions = advice::formatting_suggestions(resume_text);
        let optimization_recommendations =
            advice::optimization_recommendations(resume_text, &keyword_analysis, target_job);
        let strengths = advice::strengths(&keyword_analysis, formatting.score);
        let improvement_areas = advice::improvement_areas(&keyword_analysis, formatting.score);

        let overall_score = combine_scores(keyword_analysis.overall_score, formatting.score);

        debug!(
            "Resume analysed: overall={overall_score}, keywords={}/{}, formatting={}, issues={}",
            keyword_analysis.matched_count,
            keyword_analysis.available_count,
            formatting.score,
            formatting.issues.len()
        );

        Ok(ResumeAnalysis {
            overall_score,
            keyword_analysis,
            formatting_score: formatting.score,
            formatting_issues: formatting.issues,
            suggestions,
            optimization_recommendations,
            strengths,
            improvement_areas,
        })
    }

    pub fn classify(&self, resume_text: &str) -> Result<Classification, EngineError> {
        classify(resume_text, &self.taxonomy)
    }
}

fn combine_scores(keyword_score: f64, formatting_score: f64) -> f64 {
    let combined = keyword_score * KEYWORD_WEIGHT + formatting_score * FORMATTING_WEIGHT;
    ((combined * 10.0).round() / 10.0).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const STRONG_RESUME: &str = "Summary: Backend engineer. Experience: Developed microservices in python and java with spring boot, react and node.js front ends, a rest api, git, docker, kubernetes on aws and azure, database work in sql and mongodb; cut latency by 40%. Skills: c++ and everything above. Education: BSc Computer Science.";

    fn scorer() -> ResumeQualityScorer {
        ResumeQualityScorer::new(Arc::new(Taxonomy::standard()))
    }

    #[test]
    fn test_empty_text_is_invalid_input() {
        assert!(matches!(
            scorer().analyze(""),
            Err(EngineError::InvalidInput(_))
        ));
        assert!(matches!(
            scorer().analyze("  \n "),
            Err(EngineError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_overall_score_formula() {
        let analysis = scorer().analyze(STRONG_RESUME).unwrap();
        let expected = combine_scores(
            analysis.keyword_analysis.overall_score,
            analysis.formatting_score,
        );
        assert_eq!(analysis.overall_score, expected);
        let raw = 0.7 * analysis.keyword_analysis.overall_score + 0.3 * analysis.formatting_score;
        assert!((analysis.overall_score - raw).abs() <= 0.05 + 1e-9);
    }

    #[test]
    fn test_strong_sde_resume() {
        let analysis = scorer().analyze(STRONG_RESUME).unwrap();
        let sde = analysis.keyword_analysis.category("SDE").unwrap();
        assert_eq!(sde.score, sde.total);
        // "c++" and "40%" both trip the special-character check
        assert_eq!(analysis.formatting_issues, vec![FormattingIssue::SpecialCharacters]);
        assert_eq!(analysis.formatting_score, 90.0);
        assert!(analysis.suggestions.is_empty(), "{:?}", analysis.suggestions);
        assert!(analysis
            .strengths
            .contains(&"Excellent SDE keyword coverage".to_string()));
        assert!(analysis
            .strengths
            .contains(&"Good ATS formatting and structure".to_string()));
    }

    #[test]
    fn test_irrelevant_text_scores_low_but_succeeds() {
        let analysis = scorer().analyze("the quick brown fox").unwrap();
        assert_eq!(analysis.keyword_analysis.overall_score, 0.0);
        // formatting: only the missing-headers deduction fires
        assert_eq!(analysis.formatting_score, 80.0);
        assert_eq!(analysis.overall_score, 24.0);
        assert_eq!(analysis.suggestions.len(), 5);
        assert!(analysis
            .improvement_areas
            .contains(&"Low keyword density - consider adding more relevant terms".to_string()));
    }

    #[test]
    fn test_analyze_is_idempotent() {
        let s = scorer();
        let first = s.analyze(STRONG_RESUME).unwrap();
        let second = s.analyze(STRONG_RESUME).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_scores_stay_in_range() {
        let samples = [
            "x",
            "@@@@\n\n\n\n",
            STRONG_RESUME,
            "python python python",
            "Ωmega ✓ ☃ résumé",
        ];
        for text in samples {
            let analysis = scorer().analyze(text).unwrap();
            assert!((0.0..=100.0).contains(&analysis.overall_score), "{text}");
            assert!((0.0..=100.0).contains(&analysis.formatting_score), "{text}");
        }
    }

    #[test]
    fn test_target_role_adds_recommendation() {
        let analysis = scorer()
            .analyze_for_role("Experience in retail", Some("Data Analyst"))
            .unwrap();
        let last = analysis.optimization_recommendations.last().unwrap();
        assert!(last.starts_with("Consider adding these keywords for 'Data Analyst'"));
        assert!(last.contains("analysis"));
    }

    #[test]
    fn test_scorer_classify_delegates() {
        let result = scorer().classify("firewall siem malware").unwrap();
        assert_eq!(result.top_category.as_deref(), Some("Cybersecurity"));
    }
}
