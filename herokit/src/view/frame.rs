use crate::{
    composition::model::Palette,
    foundation::core::{Affine, Viewport},
    motion::indicator::HideTrigger,
    motion::mapper::ScrollTransforms,
    motion::reveal::RevealSample,
    motion::rotator::TickerLine,
};

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// Fully evaluated view for one instant, in painter's order.
pub struct ViewFrame {
    /// Time since mount, in ms.
    pub elapsed_ms: u64,
    /// Viewport the frame was evaluated for.
    pub viewport: Viewport,
    /// Document scroll offset.
    pub scroll_y: f64,
    /// Scroll-linked parameters (includes progress).
    pub scroll: ScrollTransforms,
    /// Hero section layers.
    pub hero: HeroSection,
    /// Static section after the hero.
    pub secondary: SecondarySection,
    /// Colors used by renderers.
    pub palette: Palette,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// The full-viewport hero.
pub struct HeroSection {
    /// 3D scene container.
    pub backdrop: BackdropLayer,
    /// Decorative overlays above the backdrop, bottom first.
    pub overlays: Vec<OverlayLayer>,
    /// Headline block.
    pub headline: HeadlineBlock,
    /// Supporting paragraph.
    pub subhead: TextFragment,
    /// Rotating ticker.
    pub ticker: TickerBlock,
    /// Call-to-action.
    pub cta: CtaBlock,
    /// Scroll indicator.
    pub indicator: IndicatorLayer,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// Container of the external 3D scene. Only its placement is known here.
pub struct BackdropLayer {
    /// Opaque scene URL.
    pub scene_url: String,
    /// Scale about the viewport center.
    pub scale: f64,
    /// Vertical offset in px.
    pub offset_y: f64,
    /// Resolved transform.
    pub transform: Affine,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
/// Decorative overlay kinds.
pub enum OverlayKind {
    /// Soft-light gradient mesh.
    GradientMesh,
    /// Film-grain noise.
    Noise,
    /// Right-to-left darkening mask that keeps copy legible.
    EmphasisMask,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
/// One decorative overlay.
pub struct OverlayLayer {
    /// Overlay kind.
    pub kind: OverlayKind,
    /// Overlay opacity.
    pub opacity: f64,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// Text with its reveal state.
pub struct TextFragment {
    /// Copy.
    pub text: String,
    /// Reveal state at this instant.
    pub reveal: RevealSample,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// Headline with scroll-linked scale and opacity.
pub struct HeadlineBlock {
    /// Block scale.
    pub scale: f64,
    /// Block opacity (multiplies each line's own reveal opacity).
    pub opacity: f64,
    /// Lines in order.
    pub lines: Vec<TextFragment>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// Ticker block.
pub struct TickerBlock {
    /// Reveal state of the whole block.
    pub reveal: RevealSample,
    /// Model cursor.
    pub cursor: usize,
    /// Model message (the one committed to state).
    pub message: String,
    /// Presentation of the visible line.
    pub line: TickerLine,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// Call-to-action anchor.
pub struct CtaBlock {
    /// Label.
    pub label: String,
    /// Same-document anchor.
    pub href: String,
    /// CSS `transition` applied on hover.
    pub transition: String,
    /// Reveal state.
    pub reveal: RevealSample,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// Scroll indicator.
pub struct IndicatorLayer {
    /// Hint text.
    pub label: String,
    /// Latch state.
    pub hidden: bool,
    /// What hid it, if anything.
    pub trigger: Option<HideTrigger>,
    /// Rendered opacity.
    pub opacity: f64,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// Static section.
pub struct SecondarySection {
    /// Element id.
    pub id: String,
    /// Heading.
    pub title: String,
    /// Body copy.
    pub body: String,
}
