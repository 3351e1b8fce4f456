#[cfg(test)]
mod tests {
    use machbar_core::*;

    fn sample() -> Assessment {
        Assessment {
            verdict: Verdict::PartiallyInhouse,
            confidence: Confidence::Medium,
            summary: "summary".into(),
            effort: "~12h (Inhouse-Anteil)".into(),
            timeline: "1-2 Wochen gesamt".into(),
            risks: vec!["risk".into()],
            alternatives: vec![AlternativeOption::new("A", "desc", "~20h", "5-7 Werktage")],
            reply_draft: "Hi [Name]".into(),
            matched_inhouse: vec!["Static Ads (Feed/Story)".into()],
            matched_external: vec!["Fotoshooting".into()],
            detected_quantity: Some(8),
            is_urgent: false,
        }
    }

    // ── Verdict / Confidence tests ─────────────────────────────

    #[test]
    fn test_verdict_serializes_snake_case() {
        let json = serde_json::to_string(&Verdict::PartiallyInhouse).unwrap();
        assert_eq!(json, "\"partially_inhouse\"");
        let json = serde_json::to_string(&Verdict::NeedsClarification).unwrap();
        assert_eq!(json, "\"needs_clarification\"");
    }

    #[test]
    fn test_verdict_display_matches_serde() {
        for v in [
            Verdict::Inhouse,
            Verdict::PartiallyInhouse,
            Verdict::External,
            Verdict::NeedsClarification,
        ] {
            let json = serde_json::to_string(&v).unwrap();
            assert_eq!(json, format!("\"{v}\""));
        }
    }

    #[test]
    fn test_confidence_levels() {
        assert_eq!(Confidence::Low.level(), 1);
        assert_eq!(Confidence::Medium.level(), 2);
        assert_eq!(Confidence::High.level(), 3);
        assert!(Confidence::High > Confidence::Medium);
        assert!(Confidence::Medium > Confidence::Low);
    }

    #[test]
    fn test_complexity_deserializes_lowercase() {
        let c: Complexity = serde_json::from_str("\"medium\"").unwrap();
        assert_eq!(c, Complexity::Medium);
        assert!(serde_json::from_str::<Complexity>("\"high\"").is_err());
    }

    // ── Assessment tests ───────────────────────────────────────

    #[test]
    fn test_assessment_json_shape() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(value["verdict"], "partially_inhouse");
        assert_eq!(value["confidence"], "medium");
        assert_eq!(value["detected_quantity"], 8);
        assert_eq!(value["alternatives"][0]["effort"], "~20h");
        assert_eq!(value["is_urgent"], false);
    }

    #[test]
    fn test_assessment_absent_quantity_is_null() {
        let mut a = sample();
        a.detected_quantity = None;
        let value = serde_json::to_value(&a).unwrap();
        assert!(value["detected_quantity"].is_null());
        let restored: Assessment = serde_json::from_value(value).unwrap();
        assert_eq!(restored, a);
    }

    #[test]
    fn test_has_matches() {
        let mut a = sample();
        assert!(a.has_matches());
        a.matched_inhouse.clear();
        a.matched_external.clear();
        assert!(!a.has_matches());
    }

    // ── Error tests ────────────────────────────────────────────

    #[test]
    fn test_error_invalid_input_display() {
        let err = MachbarError::InvalidInput("request text is empty".into());
        assert_eq!(err.to_string(), "invalid input: request text is empty");
    }

    #[test]
    fn test_error_example_not_found() {
        let err = MachbarError::ExampleNotFound { index: 9, available: 8 };
        let s = err.to_string();
        assert!(s.contains("#9"));
        assert!(s.contains("1-8"));
    }

    #[test]
    fn test_error_catalog_validation() {
        let err = MachbarError::CatalogValidation {
            field: "inhouse[2].keywords".into(),
            reason: "empty keyword".into(),
        };
        let s = err.to_string();
        assert!(s.contains("inhouse[2].keywords"));
        assert!(s.contains("empty keyword"));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: MachbarError = io_err.into();
        assert!(err.to_string().contains("file not found"));
    }
}
