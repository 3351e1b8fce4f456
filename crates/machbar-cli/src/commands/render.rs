//! Terminal rendering of assessments, examples and the catalog.

use console::{Color, style};
use std::fmt::Write;

use machbar_catalog::Catalog;
use machbar_classifier::samples;
use machbar_core::{Assessment, Confidence, Verdict};

fn badge(verdict: Verdict) -> (&'static str, Color) {
    match verdict {
        Verdict::Inhouse => ("✅ Inhouse machbar", Color::Green),
        Verdict::PartiallyInhouse => ("⚡ Teilweise inhouse", Color::Yellow),
        Verdict::External => ("🔄 Externer Partner nötig", Color::Red),
        Verdict::NeedsClarification => ("❓ Klärung nötig", Color::Magenta),
    }
}

fn confidence_label(confidence: Confidence) -> &'static str {
    match confidence {
        Confidence::High => "hoch",
        Confidence::Medium => "mittel",
        Confidence::Low => "niedrig",
    }
}

fn dots(confidence: Confidence) -> String {
    let filled = usize::from(confidence.level());
    format!("{}{}", "●".repeat(filled), "○".repeat(3 - filled))
}

/// Tags shown under the verdict: matched skills, quantity and time pressure.
fn tags(a: &Assessment) -> Vec<String> {
    let mut tags = Vec::new();
    for name in &a.matched_inhouse {
        tags.push(style(format!("[{name}]")).green().to_string());
    }
    for name in &a.matched_external {
        tags.push(style(format!("[{name}]")).red().to_string());
    }
    if let Some(q) = a.detected_quantity {
        tags.push(style(format!("[Menge: {q}]")).dim().to_string());
    }
    if a.is_urgent {
        tags.push(style("[⏰ Zeitdruck]").yellow().to_string());
    }
    tags
}

fn heading(out: &mut String, title: &str) {
    let _ = writeln!(out, "\n{}", style(title).bold().underlined());
}

pub(super) fn assessment(a: &Assessment) -> String {
    let mut out = String::new();
    let (label, color) = badge(a.verdict);

    let _ = writeln!(
        out,
        "{}   {} Confidence: {}",
        style(label).fg(color).bold(),
        style(dots(a.confidence)).fg(color),
        confidence_label(a.confidence),
    );
    let tags = tags(a);
    if !tags.is_empty() {
        let _ = writeln!(out, "{}", tags.join(" "));
    }

    heading(&mut out, "Einschätzung");
    let _ = writeln!(out, "{}", a.summary);
    let _ = writeln!(out, "\n{} {}", style("Aufwand:").bold(), a.effort);
    let _ = writeln!(out, "{} {}", style("Timeline:").bold(), a.timeline);

    if !a.risks.is_empty() {
        heading(&mut out, "Risiken");
        for risk in &a.risks {
            let _ = writeln!(out, "  • {risk}");
        }
    }

    if !a.alternatives.is_empty() {
        heading(&mut out, "Optionen");
        for alt in &a.alternatives {
            let _ = writeln!(out, "  {}", style(&alt.label).cyan().bold());
            let _ = writeln!(out, "    {}", alt.description);
            let _ = writeln!(
                out,
                "    {}",
                style(format!("Aufwand: {} · Timeline: {}", alt.effort, alt.timeline)).dim()
            );
        }
    }

    if !a.reply_draft.is_empty() {
        heading(&mut out, "Antwort-Entwurf");
        for line in a.reply_draft.lines() {
            let _ = writeln!(out, "  {line}");
        }
    }
    out
}

pub(super) fn examples(requests: &[&str]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}\n", style(format!("Beispiel-Anfragen ({}):", requests.len())).bold());
    for (i, text) in requests.iter().enumerate() {
        let _ = writeln!(out, "  {} {}", style(format!("{:>2}.", i + 1)).cyan(), samples::preview(text, 55));
    }
    let _ = write!(
        out,
        "\n  Analysieren mit: {}",
        style("machbar analyze --example <N>").dim()
    );
    out
}

pub(super) fn catalog(catalog: &Catalog) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{}",
        style(format!("Inhouse-Skills ({}):", catalog.inhouse().len())).bold()
    );
    for s in catalog.inhouse() {
        let _ = writeln!(
            out,
            "  {} {}",
            style(&s.name).green(),
            style(format!("~{}h · {}", s.avg_hours, s.complexity)).dim()
        );
    }
    let _ = writeln!(
        out,
        "\n{}",
        style(format!("Externe Partner ({}):", catalog.external().len())).bold()
    );
    for s in catalog.external() {
        let _ = writeln!(
            out,
            "  {} {}",
            style(&s.name).red(),
            style(format!("{} · {} · {}", s.partner, s.price_range, s.timeline)).dim()
        );
    }
    out
}
