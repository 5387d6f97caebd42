use super::*;

const ALL: [Ease; 9] = [
    Ease::Linear,
    Ease::InQuad,
    Ease::OutQuad,
    Ease::InOutQuad,
    Ease::InCubic,
    Ease::OutCubic,
    Ease::InOutCubic,
    Ease::EASE_OUT,
    Ease::STANDARD,
];

#[test]
fn endpoints_are_stable() {
    for ease in ALL {
        assert_eq!(ease.apply(0.0), 0.0);
        assert_eq!(ease.apply(1.0), 1.0);
        assert_eq!(ease.apply(-2.0), 0.0);
        assert_eq!(ease.apply(3.0), 1.0);
    }
}

#[test]
fn monotonic_spot_check() {
    for ease in ALL {
        let a = ease.apply(0.25);
        let b = ease.apply(0.5);
        let c = ease.apply(0.75);
        assert!(a < b, "{ease:?}");
        assert!(b < c, "{ease:?}");
    }
}

#[test]
fn ease_out_leads_linear() {
    for t in [0.1, 0.3, 0.5, 0.7, 0.9] {
        assert!(Ease::EASE_OUT.apply(t) > t);
    }
}

#[test]
fn linear_bezier_matches_identity() {
    let ease = Ease::CubicBezier {
        x1: 0.25,
        y1: 0.25,
        x2: 0.75,
        y2: 0.75,
    };
    for t in [0.1, 0.33, 0.5, 0.8] {
        assert!((ease.apply(t) - t).abs() < 1e-6);
    }
}

#[test]
fn validate_rejects_out_of_range_x() {
    let bad = Ease::CubicBezier {
        x1: -0.1,
        y1: 0.0,
        x2: 0.58,
        y2: 1.0,
    };
    assert!(bad.validate().is_err());
    let nan = Ease::CubicBezier {
        x1: 0.0,
        y1: f64::NAN,
        x2: 0.58,
        y2: 1.0,
    };
    assert!(nan.validate().is_err());
    assert!(Ease::EASE_OUT.validate().is_ok());
    // y control points may overshoot.
    let overshoot = Ease::CubicBezier {
        x1: 0.3,
        y1: 1.4,
        x2: 0.6,
        y2: 1.0,
    };
    assert!(overshoot.validate().is_ok());
}

#[test]
fn css_keywords() {
    assert_eq!(Ease::Linear.css(), "linear");
    assert_eq!(Ease::STANDARD.css(), "cubic-bezier(0.4, 0, 0.2, 1)");
}

#[test]
fn serde_accepts_named_and_bezier_forms() {
    let e: Ease = serde_json::from_str("\"OutCubic\"").unwrap();
    assert_eq!(e, Ease::OutCubic);
    let b: Ease =
        serde_json::from_str(r#"{"CubicBezier":{"x1":0.0,"y1":0.0,"x2":0.58,"y2":1.0}}"#).unwrap();
    assert_eq!(b, Ease::EASE_OUT);
}
