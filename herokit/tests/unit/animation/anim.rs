use super::*;

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

#[test]
fn keyframe_pair_is_linear() {
    let k = KeyframePair::new(0.0, 10.0);
    assert_eq!(k.sample(Progress::new(0.0)), 0.0);
    assert_eq!(k.sample(Progress::new(0.5)), 5.0);
    assert_eq!(k.sample(Progress::new(1.0)), 10.0);
    // Clamped progress never extrapolates.
    assert_eq!(k.sample(Progress::new(2.0)), 10.0);
}

#[test]
fn keyframe_pair_of_pairs() {
    let k = KeyframePair::new((0.0, 0.0), (4.0, -8.0));
    assert_eq!(k.sample(Progress::new(0.25)), (1.0, -2.0));
}

#[test]
fn keyframe_pair_rejects_non_finite() {
    assert!(KeyframePair::new(0.0, f64::INFINITY).validate("x").is_err());
    assert!(KeyframePair::new(f64::NAN, 1.0).validate("x").is_err());
    assert!(KeyframePair::new(1.0, 0.7).validate("x").is_ok());
}

#[test]
fn tween_phases_follow_window() {
    let tw = Tween {
        from: 0.0,
        to: 1.0,
        delay: ms(800),
        duration: ms(800),
        ease: Ease::Linear,
    };
    assert_eq!(tw.phase(ms(0)), TweenPhase::Pending);
    assert_eq!(tw.phase(ms(799)), TweenPhase::Pending);
    assert_eq!(tw.phase(ms(800)), TweenPhase::Running(0.0));
    assert_eq!(tw.phase(ms(1200)), TweenPhase::Running(0.5));
    assert_eq!(tw.phase(ms(1600)), TweenPhase::Done);
    assert_eq!(tw.sample(ms(100)), 0.0);
    assert_eq!(tw.sample(ms(1200)), 0.5);
    assert_eq!(tw.sample(ms(5000)), 1.0);
}

#[test]
fn tween_applies_ease_inside_window() {
    let tw = Tween {
        from: 0.0,
        to: 1.0,
        delay: Duration::ZERO,
        duration: ms(1000),
        ease: Ease::OutQuad,
    };
    assert_eq!(tw.sample(ms(500)), 0.75);
}

#[test]
fn tween_rejects_zero_duration() {
    let tw = Tween {
        from: 0.0,
        to: 1.0,
        delay: Duration::ZERO,
        duration: Duration::ZERO,
        ease: Ease::Linear,
    };
    assert!(tw.validate().is_err());
}
