//! ATS formatting heuristics. Each check is independent; deductions stack and floor at 0.

use std::collections::HashSet;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

const FULL_SCORE: f64 = 100.0;
const NEWLINE_TO_SPACE_LIMIT: f64 = 0.1;
const DISTINCT_LINE_LENGTH_LIMIT: usize = 10;
const MIN_SECTION_HEADERS: usize = 3;

/// Canonical section header tokens, matched as case-insensitive substrings.
pub const SECTION_HEADERS: &[&str] = &["experience", "education", "skills", "summary", "objective"];

/// A formatting problem detected in the résumé text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormattingIssue {
    SpecialCharacters,
    ExcessiveLineBreaks,
    InconsistentLineLengths,
    MissingSectionHeaders,
}

impl FormattingIssue {
    pub fn deduction(self) -> f64 {
        match self {
            FormattingIssue::SpecialCharacters => 10.0,
            FormattingIssue::ExcessiveLineBreaks => 15.0,
            FormattingIssue::InconsistentLineLengths => 10.0,
            FormattingIssue::MissingSectionHeaders => 20.0,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            FormattingIssue::SpecialCharacters => {
                "Contains special characters that may confuse ATS"
            }
            FormattingIssue::ExcessiveLineBreaks => {
                "Excessive line breaks may affect ATS parsing"
            }
            FormattingIssue::InconsistentLineLengths => {
                "Inconsistent line lengths may affect readability"
            }
            FormattingIssue::MissingSectionHeaders => "Missing important section headers",
        }
    }
}

/// Formatting score (0 – 100) plus the issues that produced the deductions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormattingReport {
    pub score: f64,
    pub issues: Vec<FormattingIssue>,
}

/// Anything other than word characters, whitespace and `- . , ; : ! ?`.
fn special_chars() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^\w\s\-.,;:!?]").expect("special character pattern is valid"))
}

pub fn check_formatting(text: &str) -> FormattingReport {
    let mut issues = Vec::new();

    if special_chars().is_match(text) {
        issues.push(FormattingIssue::SpecialCharacters);
    }

    let newlines = text.matches('\n').count() as f64;
    let spaces = text.matches(' ').count() as f64;
    if newlines > spaces * NEWLINE_TO_SPACE_LIMIT {
        issues.push(FormattingIssue::ExcessiveLineBreaks);
    }

    let distinct_lengths: HashSet<usize> = text
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| line.chars().count())
        .collect();
    if distinct_lengths.len() > DISTINCT_LINE_LENGTH_LIMIT {
        issues.push(FormattingIssue::InconsistentLineLengths);
    }

    if count_section_headers(text) < MIN_SECTION_HEADERS {
        issues.push(FormattingIssue::MissingSectionHeaders);
    }

    let deductions: f64 = issues.iter().map(|i| i.deduction()).sum();
    FormattingReport {
        score: (FULL_SCORE - deductions).max(0.0),
        issues,
    }
}

pub fn count_section_headers(text: &str) -> usize {
    let text_lower = text.to_lowercase();
    SECTION_HEADERS
        .iter()
        .filter(|header| text_lower.contains(*header))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLEAN_RESUME: &str = "Experience in building data pipelines for a large retail company. Education at a state university with honors in physics. Skills include python and sql and docker.";

    #[test]
    fn test_clean_single_line_scores_full() {
        let report = check_formatting(CLEAN_RESUME);
        assert_eq!(report.score, 100.0);
        assert!(report.issues.is_empty());
    }

    #[test]
    fn test_only_summary_header_incurs_missing_headers() {
        let report =
            check_formatting("Summary of a long career in many different roles and places.");
        assert!(report.issues.contains(&FormattingIssue::MissingSectionHeaders));
        assert_eq!(report.score, 80.0);
    }

    #[test]
    fn test_special_characters_deduct_ten() {
        let text = format!("{CLEAN_RESUME} Contact: jane@example.com");
        let report = check_formatting(&text);
        assert_eq!(report.issues, vec![FormattingIssue::SpecialCharacters]);
        assert_eq!(report.score, 90.0);
    }

    #[test]
    fn test_unicode_letters_are_not_special() {
        let text = format!("{CLEAN_RESUME} Worked in Zürich and São Paulo.");
        let report = check_formatting(&text);
        assert!(!report.issues.contains(&FormattingIssue::SpecialCharacters));
    }

    #[test]
    fn test_excessive_line_breaks() {
        let text = "Experience\nEducation\nSkills\nRust\nGo";
        let report = check_formatting(text);
        assert!(report.issues.contains(&FormattingIssue::ExcessiveLineBreaks));
        assert_eq!(report.score, 85.0);
    }

    #[test]
    fn test_inconsistent_line_lengths() {
        let lines: Vec<String> = (5..=15).map(|n| "a ".repeat(n).trim().to_string()).collect();
        let text = format!("{CLEAN_RESUME}\n{}", lines.join(" \n"));
        let report = check_formatting(&text);
        assert!(report.issues.contains(&FormattingIssue::InconsistentLineLengths));
        assert!(!report.issues.contains(&FormattingIssue::ExcessiveLineBreaks));
    }

    #[test]
    fn test_all_deductions_stack() {
        let text = "#\n##\n###\n####\n#####\n######\n#######\n########\n#########\n##########\n###########";
        let report = check_formatting(text);
        assert_eq!(report.issues.len(), 4);
        assert_eq!(report.score, 45.0);
    }

    #[test]
    fn test_score_never_negative() {
        let report = check_formatting("@");
        assert!(report.score >= 0.0 && report.score <= 100.0);
    }

    #[test]
    fn test_count_section_headers_case_insensitive() {
        assert_eq!(count_section_headers("EXPERIENCE / Education / skills"), 3);
        assert_eq!(count_section_headers("nothing here"), 0);
    }
}
