use machbar_core::Complexity;
use serde::{Deserialize, Serialize};

/// A deliverable type the internal team can produce directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InhouseSkill {
    pub name: String,
    /// Average hours for one unit of work.
    pub avg_hours: u32,
    pub complexity: Complexity,
    /// Lower-case substrings that trigger this skill.
    pub keywords: Vec<String>,
}

/// A deliverable type that requires an outside vendor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartnerSkill {
    pub name: String,
    pub partner: String,
    /// Free text, e.g. `5.000–8.000 €`.
    pub price_range: String,
    /// Free text, e.g. `2–3 Wochen`.
    pub timeline: String,
    pub keywords: Vec<String>,
}

impl InhouseSkill {
    pub fn new(name: &str, avg_hours: u32, complexity: Complexity, keywords: &[&str]) -> Self {
        Self {
            name: name.into(),
            avg_hours,
            complexity,
            keywords: owned(keywords),
        }
    }

    /// Whether any keyword occurs in `lower` (which must already be lower-cased).
    pub fn matches(&self, lower: &str) -> bool {
        any_keyword(&self.keywords, lower)
    }

    /// Keywords of this skill that occur in `lower`, in declaration order.
    pub fn hits<'a>(&'a self, lower: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        keyword_hits(&self.keywords, lower)
    }
}

impl PartnerSkill {
    pub fn new(
        name: &str,
        partner: &str,
        price_range: &str,
        timeline: &str,
        keywords: &[&str],
    ) -> Self {
        Self {
            name: name.into(),
            partner: partner.into(),
            price_range: price_range.into(),
            timeline: timeline.into(),
            keywords: owned(keywords),
        }
    }

    /// Whether any keyword occurs in `lower` (which must already be lower-cased).
    pub fn matches(&self, lower: &str) -> bool {
        any_keyword(&self.keywords, lower)
    }
}

fn owned(keywords: &[&str]) -> Vec<String> {
    keywords.iter().map(|k| (*k).to_string()).collect()
}

fn any_keyword(keywords: &[String], lower: &str) -> bool {
    keywords.iter().any(|kw| lower.contains(kw.as_str()))
}

fn keyword_hits<'a>(keywords: &'a [String], lower: &'a str) -> impl Iterator<Item = &'a str> + 'a {
    keywords
        .iter()
        .map(String::as_str)
        .filter(move |kw| lower.contains(kw))
}
