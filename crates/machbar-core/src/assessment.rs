use serde::{Deserialize, Serialize};

use crate::types::{Confidence, Verdict};

/// One way of handling a request, shown next to the verdict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlternativeOption {
    pub label: String,
    pub description: String,
    /// Effort in hours or a price range, as display text.
    pub effort: String,
    pub timeline: String,
}

impl AlternativeOption {
    pub fn new(
        label: impl Into<String>,
        description: impl Into<String>,
        effort: impl Into<String>,
        timeline: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            description: description.into(),
            effort: effort.into(),
            timeline: timeline.into(),
        }
    }
}

/// The full feasibility assessment of a single client request.
///
/// Built once per classification and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assessment {
    pub verdict: Verdict,
    pub confidence: Confidence,
    pub summary: String,
    /// In-house effort estimate, e.g. `~40h`.
    pub effort: String,
    pub timeline: String,
    pub risks: Vec<String>,
    pub alternatives: Vec<AlternativeOption>,
    /// Suggested reply to the client.
    pub reply_draft: String,
    /// Names of matched in-house skills, in catalog order.
    pub matched_inhouse: Vec<String>,
    /// Names of matched partner skills, in catalog order.
    pub matched_external: Vec<String>,
    /// Quantity found in the request; `None` when no quantity above one was found.
    #[serde(default)]
    pub detected_quantity: Option<u64>,
    pub is_urgent: bool,
}

impl Assessment {
    /// Whether anything in the request matched the catalog.
    pub fn has_matches(&self) -> bool {
        !self.matched_inhouse.is_empty() || !self.matched_external.is_empty()
    }
}
