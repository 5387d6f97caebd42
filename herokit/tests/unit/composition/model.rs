use super::*;

#[test]
fn default_config_is_valid() {
    let c = HeroConfig::default();
    assert!(c.validate().is_ok());
    assert_eq!(c.content.headline.len(), 4);
    assert_eq!(c.ticker.interval_ms, 2800);
    assert_eq!(c.indicator.timeout_ms, 3000);
    assert_eq!(c.palette.accent.to_hex(), "#2C5F4D");
}

#[test]
fn partial_json_falls_back_to_defaults() {
    let c = HeroConfig::from_json(
        r##"{
            "content": { "ticker_messages": ["A", "B", "C"] },
            "ticker": { "interval_ms": 1000, "transition_ms": 200 },
            "palette": { "accent": "#ff0000" }
        }"##,
    )
    .unwrap();
    assert_eq!(c.content.ticker_messages, ["A", "B", "C"]);
    assert_eq!(c.content.headline, HeroContent::default().headline);
    assert_eq!(c.ticker.interval_ms, 1000);
    assert_eq!(c.ticker.slide_px, 6.0);
    assert_eq!(c.palette.accent, Rgb8::new(0xFF, 0, 0));
    assert_eq!(c.palette.background, Palette::default().background);
    assert_eq!(c.reveal, RevealSchedule::default());
}

#[test]
fn json_roundtrip_preserves_config() {
    let c = HeroConfig::default();
    let s = c.to_json_pretty().unwrap();
    assert_eq!(HeroConfig::from_json(&s).unwrap(), c);
}

#[test]
fn empty_ticker_is_rejected() {
    let err = HeroConfig::from_json(r#"{ "content": { "ticker_messages": [] } }"#).unwrap_err();
    assert!(matches!(err, HeroError::Validation(_)));
}

#[test]
fn zero_durations_are_rejected() {
    for doc in [
        r#"{ "ticker": { "interval_ms": 0 } }"#,
        r#"{ "ticker": { "transition_ms": 0 } }"#,
        r#"{ "ticker": { "interval_ms": 500, "transition_ms": 300 } }"#,
        r#"{ "indicator": { "timeout_ms": 0 } }"#,
        r#"{ "indicator": { "fade_ms": 0 } }"#,
    ] {
        assert!(HeroConfig::from_json(doc).is_err(), "{doc}");
    }
}

#[test]
fn reveal_must_target_existing_lines() {
    let mut c = HeroConfig::default();
    c.content.headline.truncate(2);
    assert!(c.validate().is_err());
}

#[test]
fn cta_must_be_same_document_anchor() {
    let mut c = HeroConfig::default();
    c.content.cta_href = "https://example.com".to_owned();
    assert!(c.validate().is_err());
}

#[test]
fn cta_hover_defaults_and_validation() {
    let c = HeroConfig::from_json(r#"{ "cta": { "hover_ms": 200 } }"#).unwrap();
    assert_eq!(c.cta.hover_ms, 200);
    assert_eq!(c.cta.hover_ease, Ease::STANDARD);
    assert_eq!(
        c.cta.transition_css(),
        "all 200ms cubic-bezier(0.4, 0, 0.2, 1)"
    );

    let mut c = HeroConfig::default();
    c.cta.hover_ease = Ease::CubicBezier {
        x1: 1.5,
        y1: 0.0,
        x2: 0.2,
        y2: 1.0,
    };
    assert!(c.validate().is_err());
}

#[test]
fn malformed_json_and_colors_are_serde_errors() {
    assert!(matches!(
        HeroConfig::from_json("{ not json").unwrap_err(),
        HeroError::Serde(_)
    ));
    assert!(matches!(
        HeroConfig::from_json(r#"{ "palette": { "accent": "green" } }"#).unwrap_err(),
        HeroError::Serde(_)
    ));
}

#[test]
fn missing_file_is_a_config_error() {
    let err = HeroConfig::from_path("does/not/exist.json").unwrap_err();
    assert!(matches!(err, HeroError::Config(_)));
}
