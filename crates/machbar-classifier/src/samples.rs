/// Canned client requests, one per typical situation.
pub const SAMPLE_REQUESTS: &[&str] = &[
    "Spontane Idee gehabt! Wir haben Budget für eine Flash-Sale-Aktion freigegeben. Können wir bis Montag morgen 12 Static Ads und 3 kurze Videos bekommen?",
    "Wir wollen unser Produkt in einer 3D-Animation wie bei Apple – schwebend, mit Licht-Reflexionen und Partikel-Effekten. Könnt ihr das bis nächste Woche?",
    "Die 8 Stil Ads von letzter Woche müssen nochmal überarbeitet werden. Unser CMO will andere Farben und einen neuen Claim. Brauchen wir bis morgen früh.",
    "Könnt ihr ein komplettes Produktvideo mit Schauspielern drehen? Budget haben wir, aber es muss schnell gehen.",
    "Wir hätten gerne ein animiertes Erklärvideo mit Voiceover. So 30-60 Sekunden für unsere neue Produktlinie.",
    "Können wir für unseren Relaunch so eine Art interaktives Ding machen? Vielleicht ein AR-Filter oder sowas?",
    "Die 4 Carousel Ads von letzter Woche – könnt ihr die nochmal in anderen Farben machen? Bis morgen?",
    "Wir brauchen bis Freitag 6 neue Static Ads für unsere Meta-Kampagne. Gleiches Branding, nur neue Headlines.",
];

/// Sample `n`, counted from 1.
pub fn sample(n: usize) -> Option<&'static str> {
    n.checked_sub(1).and_then(|i| SAMPLE_REQUESTS.get(i)).copied()
}

/// The first `width` characters of a sample followed by an ellipsis, for listings.
pub fn preview(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let head: String = text.chars().take(width).collect();
    format!("{}…", head.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_is_one_based() {
        assert_eq!(sample(1), Some(SAMPLE_REQUESTS[0]));
        assert_eq!(sample(8), Some(SAMPLE_REQUESTS[7]));
        assert_eq!(sample(0), None);
        assert_eq!(sample(9), None);
    }

    #[test]
    fn preview_cuts_on_char_boundaries() {
        assert_eq!(preview("kurz", 10), "kurz");
        assert_eq!(preview("Könnt ihr das", 5), "Könnt…");
        assert_eq!(preview("ab cd", 3), "ab…");
    }
}
