//! Static HTML rendering of an evaluated [`ViewFrame`].
//!
//! Every animated property is written as an inline style, so the output is a
//! snapshot of the page at the frame's instant.

use std::fmt::Write as _;

use crate::{
    foundation::math::css_number,
    motion::reveal::{RevealPhase, RevealStyle},
    motion::rotator::TickerStage,
    view::frame::{OverlayKind, TextFragment, ViewFrame},
};

/// Render `frame` as an HTML fragment.
pub fn render_html(frame: &ViewFrame) -> String {
    let mut out = String::with_capacity(4096);
    // Writing into a String cannot fail.
    let _ = write_frame(&mut out, frame);
    out
}

fn write_frame(out: &mut String, frame: &ViewFrame) -> std::fmt::Result {
    let hero = &frame.hero;
    let palette = &frame.palette;

    writeln!(
        out,
        r#"<div class="hero-root" data-elapsed-ms="{}" data-progress="{}" style="min-height:200vh;position:relative;background:{};color:#FFFFFF">"#,
        frame.elapsed_ms,
        css_number(frame.scroll.progress),
        palette.background.to_hex(),
    )?;
    writeln!(
        out,
        r#"<section class="hero" style="position:relative;height:100vh;overflow:hidden">"#
    )?;

    writeln!(
        out,
        r#"<div class="hero-backdrop" data-scene="{}" style="position:absolute;inset:0;transform:translateY({}px) scale({})"></div>"#,
        escape(&hero.backdrop.scene_url),
        css_number(hero.backdrop.offset_y),
        css_number(hero.backdrop.scale),
    )?;

    for overlay in &hero.overlays {
        let class = match overlay.kind {
            OverlayKind::GradientMesh => "gradient-mesh",
            OverlayKind::Noise => "noise-overlay",
            OverlayKind::EmphasisMask => "emphasis-mask",
        };
        writeln!(
            out,
            r#"<div class="{class}" style="pointer-events:none;position:absolute;inset:0;opacity:{}"></div>"#,
            css_number(overlay.opacity),
        )?;
    }

    writeln!(out, r#"<div class="hero-content">"#)?;
    writeln!(
        out,
        r#"<h1 style="transform:scale({});opacity:{}">"#,
        css_number(hero.headline.scale),
        css_number(hero.headline.opacity),
    )?;
    for line in &hero.headline.lines {
        write_fragment(out, "span", "block", line)?;
    }
    writeln!(out, "</h1>")?;

    write_fragment(out, "p", "subhead", &hero.subhead)?;

    let ticker = &hero.ticker;
    writeln!(
        out,
        r#"<div class="ticker" aria-live="polite" style="{}">"#,
        reveal_css(&ticker.reveal.style)
    )?;
    writeln!(
        out,
        r#"<div class="ticker-line" data-stage="{}" style="color:{};opacity:{};transform:translateY({}px)">{}</div>"#,
        stage_name(ticker.line.stage),
        palette.accent.to_hex(),
        css_number(ticker.line.opacity),
        css_number(ticker.line.offset_y),
        escape(&ticker.line.text),
    )?;
    writeln!(out, "</div>")?;

    let cta = &hero.cta;
    writeln!(
        out,
        r#"<div class="cta" style="{}"><a href="{}" style="background:{};transition:{}">{}</a></div>"#,
        reveal_css(&cta.reveal.style),
        escape(&cta.href),
        palette.accent.to_hex(),
        escape(&cta.transition),
        escape(&cta.label),
    )?;
    writeln!(out, "</div>")?;

    let indicator = &hero.indicator;
    writeln!(
        out,
        r#"<div class="scroll-indicator" data-hidden="{}" style="opacity:{}"><div class="scroll-indicator-label">{}</div><div class="scroll-indicator-line" style="background:{}"></div></div>"#,
        indicator.hidden,
        css_number(indicator.opacity),
        escape(&indicator.label),
        palette.accent.to_hex(),
    )?;
    writeln!(out, "</section>")?;

    let secondary = &frame.secondary;
    writeln!(
        out,
        r#"<section id="{}" class="secondary"><h2>{}</h2><p style="color:{}">{}</p></section>"#,
        escape(&secondary.id),
        escape(&secondary.title),
        palette.muted.to_hex(),
        escape(&secondary.body),
    )?;
    writeln!(out, "</div>")
}

fn write_fragment(
    out: &mut String,
    tag: &str,
    class: &str,
    fragment: &TextFragment,
) -> std::fmt::Result {
    writeln!(
        out,
        r#"<{tag} class="{class}" data-phase="{}" style="{}">{}</{tag}>"#,
        phase_name(fragment.reveal.phase),
        reveal_css(&fragment.reveal.style),
        escape(&fragment.text),
    )
}

fn reveal_css(style: &RevealStyle) -> String {
    format!(
        "opacity:{};filter:blur({}px);transform:translateY({}px)",
        css_number(style.opacity),
        css_number(style.blur_px),
        css_number(style.offset_y),
    )
}

fn phase_name(phase: RevealPhase) -> &'static str {
    match phase {
        RevealPhase::Hidden => "hidden",
        RevealPhase::Revealing => "revealing",
        RevealPhase::Revealed => "revealed",
    }
}

fn stage_name(stage: TickerStage) -> &'static str {
    match stage {
        TickerStage::Exiting => "exiting",
        TickerStage::Entering => "entering",
        TickerStage::Settled => "settled",
    }
}

/// Escape text for HTML element content and double-quoted attributes.
pub(crate) fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/view/markup.rs"]
mod tests;
