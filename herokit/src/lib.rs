//! herokit is a headless engine for an animated landing-page hero.
//!
//! The view is plain data evaluated at an instant: host events (timers, scroll,
//! resize) update a small amount of live state, and [`MountedHero::frame_at`] turns
//! that state plus the elapsed time into a [`ViewFrame`] that can be serialized or
//! rendered to HTML with [`render_html`].
//!
//! # Pipeline overview
//!
//! 1. **Configure**: [`HeroConfig`] (defaults reproduce the reference page, JSON overrides)
//! 2. **Mount**: [`HeroView::mount`] validates the config and registers host resources
//! 3. **Drive**: the [`Host`] delivers ticks, the indicator timeout, scroll and resize
//! 4. **Evaluate**: `MountedHero + time -> ViewFrame`
//! 5. **Unmount**: dropping the [`MountedHero`] releases every timer and listener
//!
//! The moving parts:
//!
//! - **Ticker**: [`MessageRotator`] cycles a non-empty [`MessageList`] on a fixed interval.
//! - **Scroll**: [`ScrollProgressTracker`] yields [`Progress`] through one viewport height;
//!   [`ScrollKeyframes::map`] turns it into scales, offsets and opacity by linear
//!   interpolation.
//! - **Reveal**: [`RevealSequencer`] interprets a [`RevealSchedule`] table with one eased
//!   [`Tween`] per entry.
//! - **Indicator**: [`IndicatorVisibility`] is a one-way latch tripped by timeout or scroll.
//!
//! Hosts are single-threaded. [`VirtualHost`] is a deterministic host driven by hand,
//! used by the CLI and tests.
#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod animation;
mod composition;
mod foundation;
mod motion;
mod runtime;
mod view;

pub use animation::anim::{KeyframePair, Lerp, Tween, TweenPhase};
pub use animation::ease::Ease;
pub use composition::model::{
    CtaConfig, HeroConfig, HeroContent, IndicatorConfig, Palette, SecondaryContent,
    TickerConfig,
};
pub use foundation::core::{Affine, LayerTransform, Point, Progress, Rgb8, Vec2, Viewport};
pub use foundation::error::{HeroError, HeroResult};
pub use motion::indicator::{HideTrigger, IndicatorVisibility};
pub use motion::mapper::{ScrollKeyframes, ScrollTransforms};
pub use motion::reveal::{
    Fragment, RevealEntry, RevealPhase, RevealSample, RevealSchedule, RevealSequencer,
    RevealStyle,
};
pub use motion::rotator::{MessageList, MessageRotator, RotationTiming, TickerLine, TickerStage};
pub use motion::scroll::{ScrollProgressTracker, TrackedRegion, progress_for};
pub use runtime::host::{
    EventKind, Host, HostEvent, ListenerCallback, Subscription, TimerCallback,
};
pub use runtime::virtual_host::VirtualHost;
pub use view::frame::{
    BackdropLayer, CtaBlock, HeadlineBlock, HeroSection, IndicatorLayer, OverlayKind,
    OverlayLayer, SecondarySection, TextFragment, TickerBlock, ViewFrame,
};
pub use view::markup::render_html;
pub use view::mount::{HeroView, MountedHero};
