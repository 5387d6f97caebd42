use std::path::Path;
use std::time::Duration;

use crate::{
    animation::ease::Ease,
    foundation::core::Rgb8,
    foundation::error::{HeroError, HeroResult},
    motion::indicator::IndicatorVisibility,
    motion::mapper::ScrollKeyframes,
    motion::reveal::{Fragment, RevealSchedule},
    motion::rotator::{MessageList, RotationTiming},
};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Complete description of the landing view.
///
/// A config is plain data that can be:
/// - built from [`HeroConfig::default`], which reproduces the reference page
/// - loaded from JSON, where every omitted field falls back to its default
///
/// Mounting a config is performed by [`crate::HeroView::mount`], which validates it first.
pub struct HeroConfig {
    /// Copy and asset references.
    pub content: HeroContent,
    /// Color palette.
    pub palette: Palette,
    /// Ticker timing.
    pub ticker: TickerConfig,
    /// Scroll indicator timing.
    pub indicator: IndicatorConfig,
    /// Call-to-action hover styling.
    pub cta: CtaConfig,
    /// Mount-time reveal cascade.
    pub reveal: RevealSchedule,
    /// Scroll-linked keyframes.
    pub scroll: ScrollKeyframes,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Text content and external references.
pub struct HeroContent {
    /// URL of the opaque 3D background scene.
    pub scene_url: String,
    /// Headline, one entry per revealed line.
    pub headline: Vec<String>,
    /// Supporting paragraph.
    pub subhead: String,
    /// Rotating ticker messages (non-empty).
    pub ticker_messages: Vec<String>,
    /// Call-to-action label.
    pub cta_label: String,
    /// Same-document anchor the call-to-action points at.
    pub cta_href: String,
    /// Hint shown above the scroll indicator line.
    pub indicator_label: String,
    /// Static section below the hero.
    pub secondary: SecondaryContent,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Static section following the hero.
pub struct SecondaryContent {
    /// Element id; the call-to-action anchor targets it.
    pub id: String,
    /// Section heading.
    pub title: String,
    /// Section body.
    pub body: String,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Page colors.
pub struct Palette {
    /// Accent (ticker text, CTA fill, indicator line).
    pub accent: Rgb8,
    /// Page background.
    pub background: Rgb8,
    /// Primary text.
    pub foreground: Rgb8,
    /// Secondary text.
    pub muted: Rgb8,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Ticker timing, in milliseconds.
pub struct TickerConfig {
    /// Period between message changes.
    pub interval_ms: u64,
    /// Length of each half (exit, enter) of the cross-transition.
    pub transition_ms: u64,
    /// Slide distance of the cross-transition, in px.
    pub slide_px: f64,
    /// Easing of the cross-transition.
    pub ease: Ease,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Scroll indicator timing, in milliseconds.
pub struct IndicatorConfig {
    /// Hide the indicator after this long even without scrolling.
    pub timeout_ms: u64,
    /// Fade-out length once hidden.
    pub fade_ms: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Hover transition of the call-to-action button.
pub struct CtaConfig {
    /// Transition length in milliseconds.
    pub hover_ms: u64,
    /// Transition timing curve.
    pub hover_ease: Ease,
}

impl Default for HeroContent {
    fn default() -> Self {
        Self {
            scene_url: "https://prod.spline.design/Gt5HUob8aGDxOUep/scene.splinecode".to_owned(),
            headline: ["We Engineer", "Attention,", "Emotion,", "Action."]
                .map(str::to_owned)
                .to_vec(),
            subhead: "Psychology-driven design for brands that demand measurable results."
                .to_owned(),
            ticker_messages: [
                "Currently accepting 3 clients this quarter",
                "127% average conversion lift",
                "50+ brands transformed",
            ]
            .map(str::to_owned)
            .to_vec(),
            cta_label: "Explore The Framework →".to_owned(),
            cta_href: "#framework".to_owned(),
            indicator_label: "Scroll to see psychology in action".to_owned(),
            secondary: SecondaryContent::default(),
        }
    }
}

impl Default for SecondaryContent {
    fn default() -> Self {
        Self {
            id: "framework".to_owned(),
            title: "The Psychology Framework".to_owned(),
            body: "This is a preview section to demonstrate the scroll transition. We scale the \
                   environment subtly as you move, separating layers to create depth and intent."
                .to_owned(),
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            accent: Rgb8::new(0x2C, 0x5F, 0x4D),
            background: Rgb8::new(0x1A, 0x1A, 0x1A),
            foreground: Rgb8::new(0xFA, 0xFA, 0xFA),
            muted: Rgb8::new(0x99, 0x99, 0x99),
        }
    }
}

impl Default for TickerConfig {
    fn default() -> Self {
        Self {
            interval_ms: 2800,
            transition_ms: 400,
            slide_px: 6.0,
            ease: Ease::default(),
        }
    }
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            timeout_ms: 3000,
            fade_ms: 500,
        }
    }
}

impl Default for CtaConfig {
    fn default() -> Self {
        Self {
            hover_ms: 350,
            hover_ease: Ease::STANDARD,
        }
    }
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            content: HeroContent::default(),
            palette: Palette::default(),
            ticker: TickerConfig::default(),
            indicator: IndicatorConfig::default(),
            cta: CtaConfig::default(),
            reveal: RevealSchedule::default(),
            scroll: ScrollKeyframes::default(),
        }
    }
}

impl TickerConfig {
    /// Timing as consumed by the rotator.
    pub fn timing(&self) -> RotationTiming {
        RotationTiming {
            interval: Duration::from_millis(self.interval_ms),
            transition: Duration::from_millis(self.transition_ms),
            slide_px: self.slide_px,
            ease: self.ease,
        }
    }
}

impl IndicatorConfig {
    /// One-shot hide timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Fresh, visible latch.
    pub fn latch(&self) -> HeroResult<IndicatorVisibility> {
        IndicatorVisibility::new(Duration::from_millis(self.fade_ms), Ease::default())
    }
}

impl CtaConfig {
    /// CSS `transition` shorthand for the button.
    pub fn transition_css(&self) -> String {
        format!("all {}ms {}", self.hover_ms, self.hover_ease.css())
    }
}

impl HeroConfig {
    /// Parse a JSON document and validate it.
    pub fn from_json(s: &str) -> HeroResult<Self> {
        let config: Self = serde_json::from_str(s).map_err(|e| HeroError::serde(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> HeroResult<Self> {
        let path = path.as_ref();
        let s = std::fs::read_to_string(path)
            .map_err(|e| HeroError::config(format!("read '{}': {e}", path.display())))?;
        let config = Self::from_json(&s)?;
        tracing::debug!(path = %path.display(), "loaded hero config");
        Ok(config)
    }

    /// Serialize to pretty JSON.
    pub fn to_json_pretty(&self) -> HeroResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| HeroError::serde(e.to_string()))
    }

    /// Ticker messages as a validated list.
    pub fn messages(&self) -> HeroResult<MessageList> {
        MessageList::new(self.content.ticker_messages.clone())
    }

    /// Validate every construction-time constraint.
    pub fn validate(&self) -> HeroResult<()> {
        if self.content.headline.is_empty() {
            return Err(HeroError::validation("headline must have at least one line"));
        }
        if self.content.scene_url.trim().is_empty() {
            return Err(HeroError::validation("scene_url must not be empty"));
        }
        if !self.content.cta_href.starts_with('#') {
            return Err(HeroError::validation(format!(
                "cta_href '{}' must be a same-document anchor",
                self.content.cta_href
            )));
        }
        self.messages()?;
        self.ticker.timing().validate()?;
        if self.indicator.timeout_ms == 0 {
            return Err(HeroError::validation("indicator timeout must be > 0"));
        }
        self.indicator.latch()?;
        self.cta.hover_ease.validate()?;
        self.reveal.validate()?;
        for entry in &self.reveal.entries {
            if let Fragment::HeadlineLine(i) = entry.fragment {
                if i >= self.content.headline.len() {
                    return Err(HeroError::validation(format!(
                        "reveal entry targets headline line {i}, but the headline has {} lines",
                        self.content.headline.len()
                    )));
                }
            }
        }
        self.scroll.validate()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composition/model.rs"]
mod tests;
