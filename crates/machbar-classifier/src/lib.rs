//! # machbar-classifier
//!
//! Classifies a free-text client request into a feasibility [`Verdict`]:
//!
//! 1. lower-case the request and collect every catalog entry whose keywords occur in it
//! 2. derive signals: requested quantity, urgency, large scope, in-house effort
//! 3. pick exactly one branch, in priority order: external only, partially
//!    in-house, in-house (overloaded or not), needs clarification
//! 4. fill the branch's summary, risks, alternatives and draft reply
//!
//! The classification is deterministic and has no side effects.
//!
//! ```
//! use machbar_classifier::Classifier;
//! use machbar_core::Verdict;
//!
//! let classifier = Classifier::default();
//! let assessment = classifier.classify("Könnt ihr 4 Banner bis Freitag machen?");
//! assert_eq!(assessment.verdict, Verdict::Inhouse);
//! ```
//!
//! [`Verdict`]: machbar_core::Verdict

pub mod classifier;
pub mod reply;
pub mod samples;
pub mod signals;

pub use classifier::{Classifier, DEFAULT_RECIPIENT};
pub use samples::SAMPLE_REQUESTS;
pub use signals::RequestSignals;

use machbar_core::{Assessment, MachbarError, Result};

/// Input boundary: reject empty or whitespace-only text, classify everything else.
///
/// The untrimmed text is passed on, so the result equals `classifier.classify(text)`.
pub fn analyze(classifier: &Classifier, text: &str) -> Result<Assessment> {
    if text.trim().is_empty() {
        return Err(MachbarError::InvalidInput("request text is empty".into()));
    }
    Ok(classifier.classify(text))
}
