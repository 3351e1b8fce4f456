//! Request signals derived from the raw text: quantity, urgency, scope and effort.

use regex::Regex;
use std::sync::LazyLock;

use machbar_catalog::InhouseSkill;

/// `<integer><whitespace>*<unit>`; only the first occurrence counts.
static QUANTITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9]+)\s*(static|carousel|banner|ad|ads|video|reel|reels|stück|statics|stil)")
        .expect("quantity pattern is valid")
});

/// Phrases that mark a tight deadline.
pub const URGENCY_PHRASES: &[&str] = &[
    "heute",
    "morgen",
    "eod",
    "asap",
    "sofort",
    "bis montag",
    "nächste woche",
    "diese woche",
    "dringend",
    "schnell",
    "kurzfristig",
    "morgen früh",
];

/// Keyword fragments that mean the client revises colours, claims or existing work.
const SPEC_FRAGMENTS: &[&str] = &["farb", "claim", "überarbeit"];

pub const DEFAULT_QUANTITY: u64 = 1;

/// Everything the verdict branches need to know about a request besides the matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestSignals {
    /// Lower-cased request text.
    pub lower: String,
    /// Requested quantity, [`DEFAULT_QUANTITY`] when none was found.
    pub quantity: u64,
    pub is_urgent: bool,
    pub is_large_scope: bool,
}

impl RequestSignals {
    pub fn from_text(text: &str) -> Self {
        let lower = text.to_lowercase();
        let quantity = extract_quantity(&lower).unwrap_or(DEFAULT_QUANTITY);
        let is_urgent = is_urgent(&lower);
        let is_large_scope = is_large_scope(&lower, quantity);
        Self {
            lower,
            quantity,
            is_urgent,
            is_large_scope,
        }
    }

    /// Large scope and a tight deadline at the same time.
    pub fn is_overloaded(&self) -> bool {
        self.is_large_scope && self.is_urgent
    }

    /// The quantity as reported to callers: absent unless more than one unit was asked for.
    pub fn detected_quantity(&self) -> Option<u64> {
        (self.quantity > 1).then_some(self.quantity)
    }

    /// Per-skill multiplier: one extra effort unit per started group of three deliverables.
    pub fn effort_multiplier(&self) -> u64 {
        self.quantity.div_ceil(3).max(1)
    }
}

/// First `<n> <unit>` quantity in `lower`. Numbers too large for `u64` saturate.
pub fn extract_quantity(lower: &str) -> Option<u64> {
    let caps = QUANTITY.captures(lower)?;
    let digits = caps.get(1)?.as_str();
    Some(digits.parse::<u64>().unwrap_or(u64::MAX))
}

pub fn is_urgent(lower: &str) -> bool {
    URGENCY_PHRASES.iter().any(|p| lower.contains(p))
}

pub fn is_large_scope(lower: &str, quantity: u64) -> bool {
    quantity > 8 || (lower.contains("video") && quantity > 2)
}

/// Sum of `avg_hours × max(1, ceil(quantity / 3))` over the matched skills.
pub fn total_hours(skills: &[&InhouseSkill], signals: &RequestSignals) -> u64 {
    let multiplier = signals.effort_multiplier();
    skills.iter().fold(0u64, |acc, s| {
        acc.saturating_add(u64::from(s.avg_hours).saturating_mul(multiplier))
    })
}

/// Whether a matched skill was hit through a colour, claim or revision keyword.
///
/// Such requests need precise specs from the client before work starts.
pub fn needs_specs(skills: &[&InhouseSkill], lower: &str) -> bool {
    skills.iter().any(|s| {
        s.hits(lower)
            .any(|kw| SPEC_FRAGMENTS.iter().any(|frag| kw.contains(frag)))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use machbar_core::Complexity;

    #[test]
    fn quantity_from_first_unit_match() {
        assert_eq!(extract_quantity("bis montag 12 static ads und 3 videos"), Some(12));
        assert_eq!(extract_quantity("3 videos und 12 static ads"), Some(3));
        assert_eq!(extract_quantity("die 8 stil ads"), Some(8));
        assert_eq!(extract_quantity("4 carousel ads"), Some(4));
        assert_eq!(extract_quantity("10stück"), Some(10));
    }

    #[test]
    fn quantity_requires_unit_right_after_number() {
        assert_eq!(extract_quantity("6 neue static ads"), None);
        assert_eq!(extract_quantity("30-60 sekunden"), None);
        assert_eq!(extract_quantity("keine zahl hier"), None);
    }

    #[test]
    fn quantity_keeps_large_numbers_and_saturates_past_u64() {
        assert_eq!(extract_quantity("5000000000 banner"), Some(5_000_000_000));
        assert_eq!(extract_quantity("99999999999999999999999 ads"), Some(u64::MAX));
    }

    #[test]
    fn urgency_phrases() {
        assert!(is_urgent("brauchen wir bis morgen früh"));
        assert!(is_urgent("geht das asap?"));
        assert!(is_urgent("bis nächste woche"));
        assert!(!is_urgent("bis ende des monats"));
    }

    #[test]
    fn large_scope_rules() {
        assert!(is_large_scope("static ads", 9));
        assert!(!is_large_scope("static ads", 8));
        assert!(is_large_scope("3 videos", 3));
        assert!(!is_large_scope("2 videos", 2));
    }

    #[test]
    fn default_quantity_is_not_reported() {
        let s = RequestSignals::from_text("Ein Banner bitte");
        assert_eq!(s.quantity, 1);
        assert_eq!(s.detected_quantity(), None);

        let s = RequestSignals::from_text("0 Banner bitte");
        assert_eq!(s.quantity, 0);
        assert_eq!(s.detected_quantity(), None);
        assert_eq!(s.effort_multiplier(), 1);

        let s = RequestSignals::from_text("2 Banner bitte");
        assert_eq!(s.detected_quantity(), Some(2));
    }

    #[test]
    fn effort_multiplier_groups_of_three() {
        let at = |q: u64| RequestSignals {
            lower: String::new(),
            quantity: q,
            is_urgent: false,
            is_large_scope: false,
        }
        .effort_multiplier();
        assert_eq!(at(1), 1);
        assert_eq!(at(3), 1);
        assert_eq!(at(4), 2);
        assert_eq!(at(12), 4);
    }

    #[test]
    fn total_hours_sums_per_skill() {
        let statics = InhouseSkill::new("Static", 4, Complexity::Low, &["static"]);
        let reels = InhouseSkill::new("Reels", 6, Complexity::Medium, &["videos"]);
        let s = RequestSignals::from_text("12 Static Ads und 3 kurze Videos");
        assert_eq!(total_hours(&[&statics, &reels], &s), 40);
        assert_eq!(total_hours(&[], &s), 0);
    }

    #[test]
    fn overloaded_needs_both_conditions() {
        assert!(RequestSignals::from_text("12 static ads bis morgen").is_overloaded());
        assert!(!RequestSignals::from_text("12 static ads").is_overloaded());
        assert!(!RequestSignals::from_text("2 static ads bis morgen").is_overloaded());
    }

    #[test]
    fn needs_specs_only_for_revision_keywords() {
        let colours = InhouseSkill::new("Farben", 2, Complexity::Low, &["korrektur", "farben"]);
        assert!(needs_specs(&[&colours], "in anderen farben"));
        assert!(!needs_specs(&[&colours], "eine korrektur"));
    }
}
