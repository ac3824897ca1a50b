use serde::{Deserialize, Serialize};

/// A job posting as delivered by the posting-source collaborator.
///
/// Identity for de-duplication is `(title, company)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobPosting {
    pub title: String,
    pub company: String,
    pub location: String,
    pub link: String,
    pub source: String,
}

impl JobPosting {
    pub fn new(
        title: impl Into<String>,
        company: impl Into<String>,
        location: impl Into<String>,
        link: impl Into<String>,
        source: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            company: company.into(),
            location: location.into(),
            link: link.into(),
            source: source.into(),
        }
    }

    /// The text that gets embedded for this posting: `"{title}. {company} in {location}"`.
    pub fn composite_text(&self) -> String {
        format!("{}. {} in {}", self.title, self.company, self.location)
    }

    pub fn identity(&self) -> (&str, &str) {
        (self.title.as_str(), self.company.as_str())
    }
}

/// A posting together with its similarity score (nominally 0–100, may be negative).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub job: JobPosting,
    pub score: f64,
}
