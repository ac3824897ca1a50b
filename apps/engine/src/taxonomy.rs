//! Keyword taxonomy: the fixed career categories both scorers measure a résumé against.
//!
//! Constructed once and shared read-only (`Arc<Taxonomy>`); there is no mutation API.

use serde::{Deserialize, Serialize};

/// A named group of case-insensitive keyword phrases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    /// Lowercased and de-duplicated, in declaration order.
    pub keywords: Vec<String>,
    pub weight: f64,
}

impl Category {
    pub fn new<I, S>(name: impl Into<String>, keywords: I, weight: f64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut normalized: Vec<String> = Vec::new();
        for kw in keywords {
            let kw = kw.as_ref().trim().to_lowercase();
            if !kw.is_empty() && !normalized.contains(&kw) {
                normalized.push(kw);
            }
        }
        Self {
            name: name.into(),
            keywords: normalized,
            weight,
        }
    }
}

const SDE_KEYWORDS: &[&str] = &[
    "python",
    "java",
    "c++",
    "spring boot",
    "react",
    "node.js",
    "api",
    "microservices",
    "git",
    "docker",
    "kubernetes",
    "aws",
    "azure",
    "database",
    "sql",
    "mongodb",
];

const CYBERSECURITY_KEYWORDS: &[&str] = &[
    "penetration testing",
    "malware",
    "firewall",
    "threat detection",
    "encryption",
    "siem",
    "vulnerability",
    "security",
    "compliance",
    "audit",
    "incident response",
];

const PRODUCT_KEYWORDS: &[&str] = &[
    "roadmap",
    "stakeholder",
    "product design",
    "user research",
    "wireframe",
    "agile",
    "scrum",
    "kanban",
    "user experience",
    "market research",
    "analytics",
];

const DATA_SCIENCE_KEYWORDS: &[&str] = &[
    "machine learning",
    "data analysis",
    "pandas",
    "numpy",
    "deep learning",
    "nlp",
    "statistics",
    "visualization",
    "tensorflow",
    "pytorch",
    "scikit-learn",
];

/// Broader ATS vocabulary per industry, used for keyword recommendations.
const INDUSTRY_ATS_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "SDE",
        &[
            "software development",
            "programming",
            "coding",
            "development",
            "agile",
            "scrum",
            "git",
            "version control",
            "testing",
            "debugging",
            "api",
            "rest",
            "microservices",
            "cloud",
            "aws",
            "azure",
            "docker",
            "kubernetes",
            "ci/cd",
            "deployment",
            "monitoring",
            "logging",
        ],
    ),
    (
        "Cybersecurity",
        &[
            "security",
            "cybersecurity",
            "information security",
            "threat detection",
            "vulnerability assessment",
            "penetration testing",
            "incident response",
            "forensics",
            "compliance",
            "audit",
            "risk assessment",
            "firewall",
            "siem",
            "ids/ips",
            "encryption",
            "authentication",
            "authorization",
        ],
    ),
    (
        "Product",
        &[
            "product management",
            "product strategy",
            "roadmap",
            "stakeholder management",
            "user research",
            "user experience",
            "wireframing",
            "prototyping",
            "agile",
            "scrum",
            "kanban",
            "analytics",
            "metrics",
            "kpis",
            "market research",
            "competitive analysis",
            "go-to-market",
            "launch",
        ],
    ),
    (
        "Data Science",
        &[
            "data analysis",
            "machine learning",
            "deep learning",
            "statistics",
            "data visualization",
            "predictive modeling",
            "nlp",
            "computer vision",
            "big data",
            "data mining",
            "etl",
            "data warehousing",
            "sql",
            "python",
            "r",
            "tensorflow",
            "pytorch",
            "scikit-learn",
            "pandas",
            "numpy",
        ],
    ),
];

/// A standard résumé section and what it usually contains.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionGuide {
    pub section: &'static str,
    pub contents: &'static [&'static str],
}

const SECTION_GUIDE: &[SectionGuide] = &[
    SectionGuide {
        section: "contact",
        contents: &["Name", "Email", "Phone", "Location", "LinkedIn"],
    },
    SectionGuide {
        section: "summary",
        contents: &["Professional summary", "Career objective", "Personal statement"],
    },
    SectionGuide {
        section: "experience",
        contents: &[
            "Company name",
            "Job title",
            "Duration",
            "Key achievements",
            "Technologies used",
        ],
    },
    SectionGuide {
        section: "education",
        contents: &[
            "Degree",
            "Institution",
            "Graduation year",
            "GPA (if high)",
            "Relevant coursework",
        ],
    },
    SectionGuide {
        section: "skills",
        contents: &[
            "Technical skills",
            "Soft skills",
            "Languages",
            "Certifications",
            "Tools",
        ],
    },
    SectionGuide {
        section: "projects",
        contents: &[
            "Project name",
            "Description",
            "Technologies",
            "Outcomes",
            "GitHub link",
        ],
    },
    SectionGuide {
        section: "achievements",
        contents: &[
            "Awards",
            "Certifications",
            "Publications",
            "Presentations",
            "Leadership roles",
        ],
    },
];

/// The set of categories consulted by every scoring call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Taxonomy {
    categories: Vec<Category>,
}

impl Default for Taxonomy {
    fn default() -> Self {
        Self::standard()
    }
}

impl Taxonomy {
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    /// The four built-in career categories, each weighted 1.0.
    pub fn standard() -> Self {
        Self::new(vec![
            Category::new("SDE", SDE_KEYWORDS, 1.0),
            Category::new("Cybersecurity", CYBERSECURITY_KEYWORDS, 1.0),
            Category::new("Product", PRODUCT_KEYWORDS, 1.0),
            Category::new("Data Science", DATA_SCIENCE_KEYWORDS, 1.0),
        ])
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// Keywords of the named category; an unknown name yields an empty slice.
    pub fn keywords_for(&self, name: &str) -> &[String] {
        self.category(name)
            .map(|c| c.keywords.as_slice())
            .unwrap_or(&[])
    }

    /// Total keyword count across all categories.
    pub fn keyword_count(&self) -> usize {
        self.categories.iter().map(|c| c.keywords.len()).sum()
    }
}

/// Recommended ATS keywords for an industry.
///
/// With no industry, or one that is not in the bank, returns the de-duplicated union of
/// every industry's keywords in first-seen order.
pub fn ats_keywords_for(industry: Option<&str>) -> Vec<&'static str> {
    if let Some(found) = industry.and_then(|name| {
        INDUSTRY_ATS_KEYWORDS
            .iter()
            .find(|(industry, _)| *industry == name)
    }) {
        return found.1.to_vec();
    }

    let mut all: Vec<&'static str> = Vec::new();
    for (_, keywords) in INDUSTRY_ATS_KEYWORDS {
        for &kw in keywords.iter() {
            if !all.contains(&kw) {
                all.push(kw);
            }
        }
    }
    all
}

/// Standard résumé sections in conventional order.
pub fn recommended_sections() -> &'static [SectionGuide] {
    SECTION_GUIDE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_taxonomy_has_four_categories() {
        let taxonomy = Taxonomy::standard();
        let names: Vec<&str> = taxonomy.categories().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["SDE", "Cybersecurity", "Product", "Data Science"]);
        assert_eq!(taxonomy.keyword_count(), 16 + 11 + 11 + 11);
    }

    #[test]
    fn test_unknown_category_returns_empty_keywords() {
        let taxonomy = Taxonomy::standard();
        assert!(taxonomy.keywords_for("Astronomy").is_empty());
        assert!(taxonomy.category("Astronomy").is_none());
    }

    #[test]
    fn test_keywords_for_known_category() {
        let taxonomy = Taxonomy::standard();
        let kws = taxonomy.keywords_for("SDE");
        assert!(kws.contains(&"python".to_string()));
        assert!(kws.contains(&"node.js".to_string()));
    }

    #[test]
    fn test_category_normalizes_keywords() {
        let cat = Category::new("Ops", ["Terraform", "terraform ", "", "Ansible"], 2.0);
        assert_eq!(cat.keywords, vec!["terraform", "ansible"]);
        assert_eq!(cat.weight, 2.0);
    }

    #[test]
    fn test_ats_keywords_for_known_industry() {
        let kws = ats_keywords_for(Some("Product"));
        assert_eq!(kws.first(), Some(&"product management"));
        assert!(kws.contains(&"go-to-market"));
    }

    #[test]
    fn test_ats_keywords_unknown_industry_is_deduplicated_union() {
        let all = ats_keywords_for(Some("Gardening"));
        assert_eq!(all, ats_keywords_for(None));
        assert_eq!(all.iter().filter(|k| **k == "agile").count(), 1);
        assert!(all.contains(&"forensics"));
        assert!(all.contains(&"etl"));
    }

    #[test]
    fn test_recommended_sections_order() {
        let sections: Vec<&str> = recommended_sections().iter().map(|s| s.section).collect();
        assert_eq!(sections[0], "contact");
        assert_eq!(sections.len(), 7);
        assert!(sections.contains(&"skills"));
    }
}
