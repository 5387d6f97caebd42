use super::*;

use crate::{HeroConfig, HeroView, VirtualHost};
use crate::foundation::core::Viewport;

fn frame_at(ms: u64, config: HeroConfig) -> ViewFrame {
    let host = VirtualHost::new(Viewport::default());
    let hero = HeroView::mount(&host, config).unwrap();
    host.advance(std::time::Duration::from_millis(ms));
    hero.frame(&host)
}

#[test]
fn escape_covers_markup_characters() {
    assert_eq!(
        escape(r#"<a href="x">Tom & 'Jerry'</a>"#),
        "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
    );
}

#[test]
fn renders_every_section() {
    let html = render_html(&frame_at(6000, HeroConfig::default()));
    assert!(html.contains(r#"data-scene="https://prod.spline.design/Gt5HUob8aGDxOUep/scene.splinecode""#));
    assert!(html.contains(">We Engineer</span>"));
    assert!(html.contains(">Action.</span>"));
    assert!(html.contains(r#"aria-live="polite""#));
    assert!(html.contains(r##"<a href="#framework""##));
    assert!(html.contains("Scroll to see psychology in action"));
    assert!(html.contains(r#"<section id="framework" class="secondary">"#));
    assert!(html.contains("The Psychology Framework"));
    assert!(html.contains("#2C5F4D"));
}

#[test]
fn cta_carries_hover_transition() {
    let html = render_html(&frame_at(6000, HeroConfig::default()));
    assert!(html.contains("transition:all 350ms cubic-bezier(0.4, 0, 0.2, 1)"));

    let mut config = HeroConfig::default();
    config.cta.hover_ms = 200;
    config.cta.hover_ease = crate::Ease::Linear;
    let html = render_html(&frame_at(6000, config));
    assert!(html.contains("transition:all 200ms linear"));
}

#[test]
fn inline_styles_follow_frame_state() {
    let at_mount = render_html(&frame_at(0, HeroConfig::default()));
    // Last headline line has not started yet.
    assert!(at_mount.contains(
        r#"<span class="block" data-phase="hidden" style="opacity:0;filter:blur(8px);transform:translateY(0px)">Action.</span>"#
    ));
    assert!(at_mount.contains(r#"data-hidden="false" style="opacity:1""#));

    let later = render_html(&frame_at(10_000, HeroConfig::default()));
    assert!(later.contains(
        r#"<span class="block" data-phase="revealed" style="opacity:1;filter:blur(0px);transform:translateY(0px)">Action.</span>"#
    ));
    assert!(later.contains(r#"data-hidden="true" style="opacity:0""#));
}

#[test]
fn user_text_is_escaped() {
    let mut config = HeroConfig::default();
    config.content.headline[0] = "<script>alert(1)</script>".to_owned();
    let html = render_html(&frame_at(1000, config));
    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;"));
}
