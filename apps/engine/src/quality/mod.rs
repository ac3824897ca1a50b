// Resume quality scoring: keyword coverage, ATS formatting heuristics and the advice built on them.
// Everything here is pure and synchronous; nothing calls out to a provider.

pub mod advice;
pub mod analyzer;
pub mod formatting;
pub mod keywords;

pub use analyzer::{ResumeAnalysis, ResumeQualityScorer};
pub use formatting::{FormattingIssue, FormattingReport};
pub use keywords::{CategoryScore, Classification, KeywordAnalysis};
