use machbar_core::Complexity;

use crate::definition::{InhouseSkill, PartnerSkill};

pub(crate) fn inhouse() -> Vec<InhouseSkill> {
    vec![
        InhouseSkill::new(
            "Static Ads (Feed/Story)",
            4,
            Complexity::Low,
            &[
                "static ad", "static ads", "feed ad", "story ad", "bild ad", "image ad",
                "anzeige", "anzeigen", "statics",
            ],
        ),
        InhouseSkill::new(
            "Carousel Ads",
            5,
            Complexity::Low,
            &["carousel", "karussell", "swipe", "mehrere slides"],
        ),
        InhouseSkill::new(
            "2D Motion Design",
            8,
            Complexity::Medium,
            &[
                "2d motion", "2d animation", "motion design", "motion graphic", "animiert",
                "animation 2d", "parallax",
            ],
        ),
        InhouseSkill::new(
            "UGC-Konzepte & Briefings",
            3,
            Complexity::Low,
            &["ugc", "creator", "briefing", "influencer brief", "content creator"],
        ),
        InhouseSkill::new(
            "Reels / Short-Form Editing",
            6,
            Complexity::Medium,
            &[
                "reel", "reels", "short form", "tiktok", "kurzvideos", "kurze videos",
                "video edit", "schnitt", "videos",
            ],
        ),
        InhouseSkill::new(
            "Ad-Varianten / Iterations",
            2,
            Complexity::Low,
            &[
                "varianten", "iteration", "überarbeit", "anpass", "andere farb", "neuer claim",
                "neue headline", "abwandl", "nochmal",
            ],
        ),
        InhouseSkill::new(
            "Moodboards & Konzeptdesign",
            4,
            Complexity::Low,
            &[
                "moodboard", "konzept", "look and feel", "look & feel", "visuelles konzept",
                "styleguide",
            ],
        ),
        InhouseSkill::new(
            "Banner & Display Ads",
            3,
            Complexity::Low,
            &["banner", "display ad", "google ads banner", "display"],
        ),
        InhouseSkill::new(
            "Social Media Templates",
            5,
            Complexity::Low,
            &["template", "vorlage", "social media template", "post template", "insta template"],
        ),
        InhouseSkill::new(
            "Farbkorrekturen / Überarbeitungen",
            2,
            Complexity::Low,
            &[
                "farbkorrektur", "farben ändern", "andere farben", "überarbeit", "korrektur",
                "anpassung", "farben",
            ],
        ),
    ]
}

pub(crate) fn external() -> Vec<PartnerSkill> {
    vec![
        PartnerSkill::new(
            "3D-Animation / Cinema 4D",
            "Studio X",
            "5.000–8.000 €",
            "2–3 Wochen",
            &[
                "3d", "cinema 4d", "c4d", "3d animation", "apple style", "schwebend",
                "licht-reflex", "partikel", "produktanimation 3d",
            ],
        ),
        PartnerSkill::new(
            "Illustration (von Grund auf)",
            "Illustrator Y",
            "1.500–3.000 €",
            "1–2 Wochen",
            &[
                "illustration", "zeichnung", "illustrier", "custom illustration",
                "character design", "handgezeichnet",
            ],
        ),
        PartnerSkill::new(
            "Live-Action Video / Produktion",
            "Produktionsfirma Z",
            "8.000–15.000 €",
            "3–4 Wochen",
            &[
                "videodreh", "filmdreh", "videoproduktion", "schauspieler", "live action",
                "am set", "filmset", "produktionsteam", "kamerateam", "drehbuch", "drehen",
            ],
        ),
        PartnerSkill::new(
            "Fotoshooting",
            "Fotostudio A",
            "2.000–5.000 €",
            "1–2 Wochen",
            &[
                "fotoshooting", "shooting", "produktfoto", "fotograf", "studio foto",
                "bildmaterial neu",
            ],
        ),
        PartnerSkill::new(
            "Voice-Over / Audio",
            "Audio Studio B",
            "500–1.500 €",
            "3–5 Tage",
            &[
                "voice over", "voiceover", "sprecher", "audio", "vertonung", "musik",
                "sounddesign", "jingle",
            ],
        ),
    ]
}
