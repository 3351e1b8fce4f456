use tracing::debug;

use machbar_catalog::{Catalog, CatalogMatches, InhouseSkill, PartnerSkill};
use machbar_core::{AlternativeOption, Assessment, Confidence, Verdict};

use crate::reply;
use crate::signals::{self, RequestSignals};

/// Greeting placeholder used in draft replies unless configured otherwise.
pub const DEFAULT_RECIPIENT: &str = "[Name]";

/// Classifies client requests against a skill catalog.
///
/// Immutable after construction; `classify` is a pure function of the input
/// text and the catalog.
#[derive(Debug, Clone)]
pub struct Classifier {
    catalog: Catalog,
    recipient: String,
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(Catalog::builtin())
    }
}

/// Fields shared by every branch, computed before the verdict is chosen.
struct Facts<'a> {
    signals: RequestSignals,
    matches: CatalogMatches<'a>,
    total_hours: u64,
}

impl Facts<'_> {
    fn inhouse_names(&self) -> String {
        self.matches.inhouse_names().join(", ")
    }
}

/// The text parts of an assessment that differ per branch.
struct Outcome {
    verdict: Verdict,
    confidence: Confidence,
    summary: String,
    effort: String,
    timeline: String,
    risks: Vec<String>,
    alternatives: Vec<AlternativeOption>,
    reply_draft: String,
}

impl Classifier {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            recipient: DEFAULT_RECIPIENT.into(),
        }
    }

    /// Use `recipient` as the greeting name in draft replies.
    pub fn with_recipient(mut self, recipient: impl Into<String>) -> Self {
        self.recipient = recipient.into();
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn recipient(&self) -> &str {
        &self.recipient
    }

    /// Classify a request. Total on its input: anything that matches nothing
    /// ends up as [`Verdict::NeedsClarification`].
    pub fn classify(&self, text: &str) -> Assessment {
        let signals = RequestSignals::from_text(text);
        let matches = self.catalog.match_request(&signals.lower);
        let total_hours = signals::total_hours(&matches.inhouse, &signals);
        let facts = Facts {
            signals,
            matches,
            total_hours,
        };

        let outcome = match (facts.matches.inhouse.is_empty(), facts.matches.external.first()) {
            (true, Some(ext)) => self.external_only(&facts, ext),
            (false, Some(ext)) => self.partially_inhouse(&facts, ext),
            (false, None) if facts.signals.is_overloaded() => self.overloaded(&facts),
            (false, None) => self.inhouse(&facts),
            (true, None) => self.clarification(),
        };

        debug!(
            verdict = %outcome.verdict,
            confidence = %outcome.confidence,
            inhouse = facts.matches.inhouse.len(),
            external = facts.matches.external.len(),
            quantity = facts.signals.quantity,
            urgent = facts.signals.is_urgent,
            hours = facts.total_hours,
            "classified request"
        );

        Assessment {
            verdict: outcome.verdict,
            confidence: outcome.confidence,
            summary: outcome.summary,
            effort: outcome.effort,
            timeline: outcome.timeline,
            risks: outcome.risks,
            alternatives: outcome.alternatives,
            reply_draft: outcome.reply_draft,
            matched_inhouse: facts.matches.inhouse_names(),
            matched_external: facts.matches.external_names(),
            detected_quantity: facts.signals.detected_quantity(),
            is_urgent: facts.signals.is_urgent,
        }
    }

    fn external_only(&self, facts: &Facts<'_>, ext: &PartnerSkill) -> Outcome {
        let urgent = facts.signals.is_urgent;
        Outcome {
            verdict: Verdict::External,
            confidence: Confidence::High,
            summary: format!(
                "Die Anfrage erfordert {} – das liegt außerhalb unseres Inhouse-Setups. \
                 Wir können das über unseren Partner {} abdecken.",
                ext.name, ext.partner
            ),
            effort: "Nicht inhouse".into(),
            timeline: ext.timeline.clone(),
            risks: vec![
                format!("{} ist nicht inhouse umsetzbar", ext.name),
                if urgent {
                    "Die angefragte Timeline ist für externe Produktion nicht realistisch".into()
                } else {
                    "Externe Abstimmung kann Timeline verlängern".into()
                },
            ],
            alternatives: vec![
                AlternativeOption::new(
                    "Option A: Inhouse-Alternative",
                    format!(
                        "Statt {} setzen wir eine hochwertige 2D-Motion-Animation mit \
                         Parallax-Effekten und Licht-Overlays um. Visuell stark, aber innerhalb \
                         unseres Skillsets.",
                        ext.name
                    ),
                    "~8-12h",
                    "5-7 Werktage",
                ),
                AlternativeOption::new(
                    "Option B: Externer Partner",
                    format!(
                        "Volle Umsetzung über {}. Professionelles Ergebnis, aber höheres Budget \
                         und längere Timeline.",
                        ext.partner
                    ),
                    ext.price_range.clone(),
                    ext.timeline.clone(),
                ),
            ],
            reply_draft: reply::external_only(&self.recipient, ext, urgent),
        }
    }

    fn partially_inhouse(&self, facts: &Facts<'_>, ext: &PartnerSkill) -> Outcome {
        let urgent = facts.signals.is_urgent;
        let hours = facts.total_hours;
        let inh = facts.inhouse_names();
        Outcome {
            verdict: Verdict::PartiallyInhouse,
            confidence: Confidence::Medium,
            summary: format!(
                "Teile der Anfrage können wir inhouse abdecken ({inh}), aber {} müsste extern \
                 umgesetzt werden.",
                ext.name
            ),
            effort: format!("~{hours}h (Inhouse-Anteil)"),
            timeline: if urgent {
                "Inhouse-Teil machbar, externer Teil braucht mehr Zeit".into()
            } else {
                "1-2 Wochen gesamt".into()
            },
            risks: vec![
                "Gemischte Produktion erfordert gute Koordination".into(),
                format!("{} ist extern abhängig", ext.name),
                if urgent {
                    "Zeitdruck erhöht Fehlerrisiko".into()
                } else {
                    "Timeline hängt vom externen Partner ab".into()
                },
            ],
            alternatives: vec![
                AlternativeOption::new(
                    "Option A: Alles inhouse (reduzierter Scope)",
                    format!(
                        "Wir konzentrieren uns auf {inh} und ersetzen den externen Teil durch \
                         eine Inhouse-Lösung mit leicht angepasstem Ergebnis."
                    ),
                    format!("~{}h", hours.saturating_add(8)),
                    if urgent { "Eng, aber machbar" } else { "5-7 Werktage" },
                ),
                AlternativeOption::new(
                    "Option B: Hybrid mit externem Partner",
                    format!(
                        "Inhouse-Teil starten wir sofort, {} läuft parallel über {}.",
                        ext.name, ext.partner
                    ),
                    format!("~{hours}h + {}", ext.price_range),
                    ext.timeline.clone(),
                ),
            ],
            reply_draft: reply::partially_inhouse(&self.recipient, &inh, ext),
        }
    }

    fn overloaded(&self, facts: &Facts<'_>) -> Outcome {
        let quantity = facts.signals.quantity;
        let hours = facts.total_hours;
        let first = quantity.div_ceil(2);
        let rest = quantity.saturating_sub(first);
        Outcome {
            verdict: Verdict::Inhouse,
            confidence: Confidence::Medium,
            summary: format!(
                "Die Anfrage ({}) ist grundsätzlich inhouse machbar, aber der Umfang von \
                 {quantity} Stück in Kombination mit der engen Timeline ist kritisch. Hier muss \
                 der Scope reduziert oder die Deadline verschoben werden.",
                facts.inhouse_names()
            ),
            effort: format!("~{hours}h"),
            timeline: "In der angefragten Zeit nicht vollständig machbar".into(),
            risks: vec![
                format!("{quantity} Deliverables in kurzer Zeit gefährden die Qualität"),
                "Team-Kapazität könnte nicht ausreichen".into(),
                "Andere laufende Projekte werden blockiert".into(),
            ],
            alternatives: vec![
                AlternativeOption::new(
                    "Option A: Reduzierter Scope, volle Qualität",
                    format!(
                        "Wir liefern {first} der {quantity} Deliverables zum Wunschtermin und \
                         die restlichen {rest} 2-3 Tage später nach."
                    ),
                    format!("~{}h (erste Tranche)", hours.div_ceil(2)),
                    "Tranche 1 zum Wunschtermin, Tranche 2 nachgelagert",
                ),
                AlternativeOption::new(
                    "Option B: Voller Scope, mehr Zeit",
                    format!(
                        "Alle {quantity} Deliverables, aber mit 2-3 zusätzlichen Werktagen. \
                         So bleibt die Qualität, die ihr gewohnt seid."
                    ),
                    format!("~{hours}h"),
                    "+2-3 Werktage",
                ),
            ],
            reply_draft: reply::overloaded(&self.recipient, quantity, first),
        }
    }

    fn inhouse(&self, facts: &Facts<'_>) -> Outcome {
        let urgent = facts.signals.is_urgent;
        let hours = facts.total_hours;
        let skills: &[&InhouseSkill] = &facts.matches.inhouse;
        let needs_specs = signals::needs_specs(skills, &facts.signals.lower);
        Outcome {
            verdict: Verdict::Inhouse,
            confidence: Confidence::High,
            summary: format!(
                "Die Anfrage ist vollständig inhouse machbar ({}). {}",
                facts.inhouse_names(),
                if urgent {
                    "Timeline ist eng, aber realistisch."
                } else {
                    "Timeline und Umfang sind realistisch."
                }
            ),
            effort: format!("~{hours}h"),
            timeline: if urgent { "Eng, aber machbar" } else { "3-5 Werktage" }.into(),
            risks: if urgent {
                vec![
                    "Enge Timeline lässt wenig Raum für Korrekturschleifen".into(),
                    "Briefing muss heute noch kommen".into(),
                ]
            } else {
                vec!["Standardrisiko: Korrekturrunden können Timeline verschieben".into()]
            },
            alternatives: vec![AlternativeOption::new(
                "Empfohlener Weg",
                format!(
                    "Direkte Umsetzung durch unser Team. {}",
                    if urgent {
                        "Briefing heute, Produktion morgen, Lieferung zum Wunschtermin."
                    } else {
                        "Briefing abstimmen, dann in Produktion."
                    }
                ),
                format!("~{hours}h"),
                if urgent { "Wunschtermin haltbar" } else { "3-5 Werktage" },
            )],
            reply_draft: reply::inhouse(&self.recipient, urgent, needs_specs),
        }
    }

    fn clarification(&self) -> Outcome {
        Outcome {
            verdict: Verdict::NeedsClarification,
            confidence: Confidence::Low,
            summary: "Die Anfrage konnte keinem bekannten Skill oder Partner zugeordnet werden. \
                      Hier braucht es ein klärendes Gespräch, um den Scope zu verstehen."
                .into(),
            effort: "Nicht einschätzbar".into(),
            timeline: "Nicht einschätzbar".into(),
            risks: vec![
                "Anfrage ist zu vage für eine Machbarkeitsbewertung".into(),
                "Möglicherweise Erwartungen, die weder inhouse noch extern abbildbar sind".into(),
            ],
            alternatives: vec![AlternativeOption::new(
                "Empfehlung: Klärendes Gespräch",
                "Einen kurzen Call ansetzen, um den genauen Scope, das gewünschte Ergebnis und \
                 die Timeline zu klären. Danach kann eine fundierte Einschätzung erfolgen.",
                "15-30 Min Call",
                "Heute/Morgen",
            )],
            reply_draft: reply::clarification(&self.recipient),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use machbar_catalog::{InhouseSkill, PartnerSkill};
    use machbar_core::Complexity;

    fn tiny() -> Classifier {
        let catalog = Catalog::new(
            vec![
                InhouseSkill::new("Banner", 3, Complexity::Low, &["banner"]),
                InhouseSkill::new("Farben", 2, Complexity::Low, &["farben"]),
            ],
            vec![
                PartnerSkill::new("Audio", "Studio B", "500 €", "3 Tage", &["audio"]),
                PartnerSkill::new("Foto", "Studio A", "2.000 €", "1 Woche", &["foto"]),
            ],
        )
        .unwrap();
        Classifier::new(catalog)
    }

    #[test]
    fn first_external_match_drives_external_branch() {
        let a = tiny().classify("Foto und Audio bitte");
        assert_eq!(a.verdict, Verdict::External);
        assert_eq!(a.matched_external, vec!["Audio", "Foto"]);
        assert!(a.summary.contains("Audio"));
        assert!(a.summary.contains("Studio B"));
        assert_eq!(a.timeline, "3 Tage");
        assert_eq!(a.alternatives[1].effort, "500 €");
    }

    #[test]
    fn partial_effort_is_inhouse_share() {
        let a = tiny().classify("9 Banner mit Audio");
        assert_eq!(a.verdict, Verdict::PartiallyInhouse);
        assert_eq!(a.effort, "~9h (Inhouse-Anteil)");
        assert_eq!(a.alternatives[0].effort, "~17h");
        assert_eq!(a.alternatives[1].effort, "~9h + 500 €");
        assert_eq!(a.timeline, "1-2 Wochen gesamt");
    }

    #[test]
    fn overloaded_splits_odd_quantity() {
        let a = tiny().classify("9 Banner bis morgen");
        assert_eq!(a.verdict, Verdict::Inhouse);
        assert_eq!(a.confidence, Confidence::Medium);
        assert!(a.alternatives[0].description.starts_with("Wir liefern 5 der 9 Deliverables"));
        assert!(a.alternatives[0].description.contains("die restlichen 4"));
        assert_eq!(a.alternatives[0].effort, "~5h (erste Tranche)");
        assert_eq!(a.alternatives[1].effort, "~9h");
    }

    #[test]
    fn custom_recipient_in_reply() {
        let a = tiny().with_recipient("Lea").classify("Ein Banner");
        assert!(a.reply_draft.starts_with("Hi Lea,"));
        assert_eq!(Classifier::default().recipient(), DEFAULT_RECIPIENT);
    }

    #[test]
    fn needs_specs_switches_reply() {
        let specs = tiny().classify("Banner in anderen Farben");
        assert!(specs.reply_draft.contains("Hex-Codes"));
        let brief = tiny().classify("Ein Banner");
        assert!(brief.reply_draft.contains("finale Briefing"));
    }
}
