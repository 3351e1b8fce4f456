//! Draft replies to the client, one template per verdict branch.
//!
//! Each function only substitutes values that were already computed by the
//! classifier; none of them makes decisions beyond picking urgency wording.

use machbar_catalog::PartnerSkill;

/// Nothing fits in-house: offer the 2D substitute first, then the partner.
pub fn external_only(recipient: &str, ext: &PartnerSkill, urgent: bool) -> String {
    let tight = if urgent {
        " Die angefragte Timeline ist dafür leider auch zu knapp."
    } else {
        ""
    };
    format!(
        "Hi {recipient},\n\n\
         die Idee verstehe ich total – das wäre visuell ein starkes Statement. \
         Ich möchte aber transparent sein: {name} erfordert spezialisierte Produktion, \
         die außerhalb unseres Inhouse-Setups liegt.{tight}\n\n\
         Was ich dir anbieten kann: Zum einen eine hochwertige 2D-Motion-Variante mit \
         Parallax-Effekten und Licht-Overlays – das kommt dem gewünschten Look nahe und ist \
         bei uns in 5-7 Werktagen umsetzbar. Zum anderen können wir die volle {name} über \
         unseren Partner {partner} realisieren – dann reden wir über {price} und {timeline}.\n\n\
         Soll ich für die Inhouse-Variante ein kurzes Moodboard vorbereiten, damit ihr euch \
         das besser vorstellen könnt?",
        name = ext.name,
        partner = ext.partner,
        price = ext.price_range,
        timeline = ext.timeline,
    )
}

/// Mixed request: start in-house right away, clarify the external part in parallel.
pub fn partially_inhouse(recipient: &str, inhouse_names: &str, ext: &PartnerSkill) -> String {
    format!(
        "Hi {recipient},\n\n\
         gute Anfrage – lass mich kurz einordnen, was wir wie umsetzen können. \
         Den Teil mit {inhouse_names} bekommen wir problemlos inhouse hin. \
         Für {name} bräuchten wir allerdings unseren externen Partner {partner}, \
         da das außerhalb unseres Inhouse-Setups liegt.\n\n\
         Mein Vorschlag: Wir starten den Inhouse-Teil sofort und klären parallel, \
         ob ihr den externen Part dazunehmen wollt ({price}, {timeline}). \
         Alternativ kann ich eine reine Inhouse-Lösung konzipieren, die das externe \
         Element durch eine 2D-Variante ersetzt.\n\n\
         Was klingt für euch sinnvoller? Dann lege ich direkt los.",
        name = ext.name,
        partner = ext.partner,
        price = ext.price_range,
        timeline = ext.timeline,
    )
}

/// Too much for the deadline: first tranche on time, the rest later, or everything later.
pub fn overloaded(recipient: &str, quantity: u64, first_tranche: u64) -> String {
    let rest = quantity.saturating_sub(first_tranche);
    format!(
        "Hi {recipient},\n\n\
         die Idee ist super und grundsätzlich voll in unserem Wheelhouse. \
         Ich möchte aber ehrlich sein: {quantity} Deliverables bis zum Wunschtermin können wir \
         in der Qualität, die ihr von uns gewohnt seid, nicht leisten.\n\n\
         Was ich dir anbieten kann: Wir liefern {first_tranche} Stück zum Wunschtermin – \
         die wichtigsten Placements zuerst. Die restlichen {rest} schieben wir 2-3 Tage nach, \
         sodass ihr stufenweise nachfeuern könnt. Strategisch ist das sogar sinnvoll, \
         weil ihr euer Creative-Set nicht auf einmal verbraucht.\n\n\
         Alternativ: Alle {quantity} auf einmal, aber mit 2-3 Tagen mehr Timeline. \
         Was passt euch besser? Dann bräuchte ich heute noch die Details."
    )
}

/// Fully feasible: ask for exact revision specs or for the complete brief.
pub fn inhouse(recipient: &str, urgent: bool, needs_specs: bool) -> String {
    let opener = if urgent {
        "Timeline ist sportlich, aber machbar."
    } else {
        "Vom Umfang und der Timeline her passt das gut."
    };
    let ask = if needs_specs {
        "die neuen Vorgaben so konkret wie möglich – idealerweise mit Hex-Codes oder \
         Referenzbeispielen, damit wir keine unnötige Korrekturschleife riskieren."
    } else {
        "das finale Briefing mit allen Assets und Texten, die rein sollen."
    };
    let closing = if urgent {
        "Wenn ich die Infos bis heute Nachmittag habe, liefern wir zum Wunschtermin."
    } else {
        "Sobald das Briefing steht, gehen wir in Produktion – ich melde mich mit einem Zeitplan."
    };
    format!(
        "Hi {recipient},\n\n\
         klar, das bekommen wir hin! {opener}\n\n\
         Damit wir direkt loslegen können, bräuchte ich von dir: {ask}\n\n\
         {closing}"
    )
}

/// Nothing recognisable: ask for a short call.
pub fn clarification(recipient: &str) -> String {
    format!(
        "Hi {recipient},\n\n\
         danke für die Idee – klingt spannend! Damit ich dir eine realistische Einschätzung \
         geben kann, was möglich ist und in welchem Zeitrahmen, würde ich gerne kurz \
         telefonieren. So kann ich den Scope sauber einordnen und dir direkt konkrete \
         Optionen vorschlagen.\n\n\
         Hast du heute oder morgen 15 Minuten Zeit für einen kurzen Call?"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn studio() -> PartnerSkill {
        PartnerSkill::new(
            "3D-Animation / Cinema 4D",
            "Studio X",
            "5.000–8.000 €",
            "2–3 Wochen",
            &["3d"],
        )
    }

    #[test]
    fn external_reply_embeds_partner_terms() {
        let text = external_only("[Name]", &studio(), false);
        assert!(text.starts_with("Hi [Name],\n\n"));
        assert!(text.contains("Partner Studio X"));
        assert!(text.contains("über 5.000–8.000 € und 2–3 Wochen"));
        assert!(!text.contains("zu knapp"));
        // The in-house alternative comes first.
        assert!(text.find("2D-Motion-Variante").unwrap() < text.find("Studio X").unwrap());
    }

    #[test]
    fn external_reply_flags_tight_timeline() {
        let text = external_only("Anna", &studio(), true);
        assert!(text.contains("Inhouse-Setups liegt. Die angefragte Timeline ist dafür leider auch zu knapp.\n\n"));
    }

    #[test]
    fn overloaded_reply_splits_quantity() {
        let text = overloaded("[Name]", 7, 4);
        assert!(text.contains("7 Deliverables bis zum Wunschtermin"));
        assert!(text.contains("Wir liefern 4 Stück"));
        assert!(text.contains("Die restlichen 3 schieben"));
        assert!(text.contains("Alle 7 auf einmal"));
    }

    #[test]
    fn inhouse_reply_variants() {
        let specs = inhouse("[Name]", true, true);
        assert!(specs.contains("Hex-Codes"));
        assert!(specs.contains("sportlich"));
        assert!(specs.ends_with("liefern wir zum Wunschtermin."));

        let brief = inhouse("[Name]", false, false);
        assert!(brief.contains("das finale Briefing mit allen Assets"));
        assert!(brief.contains("Vom Umfang und der Timeline her passt das gut."));
        assert!(brief.ends_with("Zeitplan."));
    }

    #[test]
    fn clarification_asks_for_call() {
        let text = clarification("[Name]");
        assert!(text.contains("15 Minuten"));
        assert!(text.ends_with('?'));
    }
}
