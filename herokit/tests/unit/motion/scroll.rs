use super::*;

fn vp(h: f64) -> Viewport {
    Viewport::new(1280.0, h).unwrap()
}

#[test]
fn progress_spans_one_viewport() {
    let mut t = ScrollProgressTracker::new(vp(800.0), 0.0);
    assert_eq!(t.progress(), Progress::START);
    assert_eq!(t.on_scroll(200.0).get(), 0.25);
    assert_eq!(t.on_scroll(400.0).get(), 0.5);
    assert_eq!(t.on_scroll(800.0), Progress::END);
}

#[test]
fn overscroll_clamps_exactly() {
    let mut t = ScrollProgressTracker::new(vp(800.0), 0.0);
    assert_eq!(t.on_scroll(-120.0).get(), 0.0);
    assert_eq!(t.on_scroll(5000.0).get(), 1.0);
    for y in [-1e9, -0.5, 800.5, 1e12, f64::INFINITY, f64::NEG_INFINITY] {
        let p = t.on_scroll(y).get();
        assert!(p == 0.0 || p == 1.0, "{y} -> {p}");
    }
}

#[test]
fn resize_rescales_the_span() {
    let mut t = ScrollProgressTracker::new(vp(800.0), 400.0);
    assert_eq!(t.progress().get(), 0.5);
    assert_eq!(t.on_resize(vp(1600.0)).get(), 0.25);
    assert_eq!(t.region().height, 1600.0);
    assert_eq!(t.scroll_y(), 400.0);
}

#[test]
fn offset_region_starts_at_its_top() {
    let region = TrackedRegion {
        top: 100.0,
        height: 400.0,
    };
    assert_eq!(progress_for(region, 50.0), Progress::START);
    assert_eq!(progress_for(region, 300.0).get(), 0.5);
}

#[test]
fn zero_height_region_is_a_step() {
    let region = TrackedRegion {
        top: 10.0,
        height: 0.0,
    };
    assert_eq!(progress_for(region, 10.0), Progress::START);
    assert_eq!(progress_for(region, 10.5), Progress::END);
}
