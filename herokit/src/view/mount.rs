use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;

use crate::{
    composition::model::HeroConfig,
    foundation::core::{LayerTransform, Progress, Vec2, Viewport, duration_ms},
    foundation::error::HeroResult,
    motion::indicator::{HideTrigger, IndicatorVisibility},
    motion::reveal::{Fragment, RevealSequencer},
    motion::rotator::MessageRotator,
    motion::scroll::ScrollProgressTracker,
    runtime::host::{EventKind, Host, HostEvent, Subscription},
    view::frame::{
        BackdropLayer, CtaBlock, HeadlineBlock, HeroSection, IndicatorLayer, OverlayKind,
        OverlayLayer, SecondarySection, TextFragment, TickerBlock, ViewFrame,
    },
};

/// State mutated by host callbacks.
#[derive(Debug)]
struct LiveState {
    rotator: MessageRotator,
    tracker: ScrollProgressTracker,
    indicator: IndicatorVisibility,
    viewport: Viewport,
}

/// Mount entry point for the landing view.
pub struct HeroView;

impl HeroView {
    /// Validate `config` and mount it on `host`.
    ///
    /// Mounting fixes the reveal origin at `host.now()` and registers four host
    /// resources: the ticker interval, the indicator timeout, a scroll listener and a
    /// resize listener. All four are owned by the returned [`MountedHero`].
    #[tracing::instrument(skip_all)]
    pub fn mount<H>(host: &H, config: HeroConfig) -> HeroResult<MountedHero>
    where
        H: Host + ?Sized,
    {
        config.validate()?;
        let now = host.now();
        let viewport = host.viewport();
        viewport.validate()?;

        let timing = config.ticker.timing();
        let live = Rc::new(RefCell::new(LiveState {
            rotator: MessageRotator::new(config.messages()?, timing, now)?,
            tracker: ScrollProgressTracker::new(viewport, host.scroll_y()),
            indicator: config.indicator.latch()?,
            viewport,
        }));
        let reveal = RevealSequencer::start(config.reveal.clone(), now)?;

        let mut subscriptions = Vec::with_capacity(4);

        let weak = Rc::downgrade(&live);
        subscriptions.push(host.set_interval(
            timing.interval,
            Box::new(move |at: Duration| {
                with_live(&weak, |live| {
                    live.rotator.tick(at);
                });
            }),
        ));

        let weak = Rc::downgrade(&live);
        subscriptions.push(host.set_timeout(
            config.indicator.timeout(),
            Box::new(move |at: Duration| {
                with_live(&weak, |live| {
                    live.indicator.hide(HideTrigger::Timeout, at);
                });
            }),
        ));

        let weak = Rc::downgrade(&live);
        subscriptions.push(host.listen(
            EventKind::Scroll,
            Box::new(move |at: Duration, event: &HostEvent| {
                if let HostEvent::Scroll { y } = *event {
                    with_live(&weak, |live| {
                        live.tracker.on_scroll(y);
                        live.indicator.hide(HideTrigger::Scroll, at);
                    });
                }
            }),
        ));

        let weak = Rc::downgrade(&live);
        subscriptions.push(host.listen(
            EventKind::Resize,
            Box::new(move |_at: Duration, event: &HostEvent| {
                if let HostEvent::Resize { viewport } = *event {
                    with_live(&weak, |live| {
                        live.viewport = viewport;
                        live.tracker.on_resize(viewport);
                    });
                }
            }),
        ));

        tracing::debug!(
            ?now,
            width = viewport.width,
            height = viewport.height,
            "hero mounted"
        );

        Ok(MountedHero {
            config,
            mounted_at: now,
            reveal,
            live,
            subscriptions,
        })
    }
}

fn with_live(weak: &Weak<RefCell<LiveState>>, f: impl FnOnce(&mut LiveState)) {
    match weak.upgrade() {
        Some(live) => f(&mut live.borrow_mut()),
        None => tracing::trace!("callback after unmount ignored"),
    }
}

/// A mounted landing view. Dropping it (or calling [`MountedHero::unmount`]) releases
/// every timer and listener it registered.
pub struct MountedHero {
    config: HeroConfig,
    mounted_at: Duration,
    reveal: RevealSequencer,
    live: Rc<RefCell<LiveState>>,
    subscriptions: Vec<Subscription>,
}

impl MountedHero {
    /// Tear down: cancel the ticker and timeout, remove listeners.
    pub fn unmount(self) {
        drop(self);
    }

    /// Host time the view was mounted at.
    pub fn mounted_at(&self) -> Duration {
        self.mounted_at
    }

    /// Configuration this view was mounted with.
    pub fn config(&self) -> &HeroConfig {
        &self.config
    }

    /// Number of host resources currently held.
    pub fn active_subscriptions(&self) -> usize {
        self.subscriptions.len()
    }

    /// Current ticker cursor.
    pub fn cursor(&self) -> usize {
        self.live.borrow().rotator.cursor()
    }

    /// Current ticker message.
    pub fn current_message(&self) -> String {
        self.live.borrow().rotator.current().to_owned()
    }

    /// Current scroll progress.
    pub fn progress(&self) -> Progress {
        self.live.borrow().tracker.progress()
    }

    /// Whether the scroll indicator latch has tripped.
    pub fn indicator_hidden(&self) -> bool {
        self.live.borrow().indicator.is_hidden()
    }

    /// Evaluate the view at the host's current time.
    pub fn frame<H>(&self, host: &H) -> ViewFrame
    where
        H: Host + ?Sized,
    {
        self.frame_at(host.now())
    }

    /// Evaluate the view at host time `now`. Pure with respect to the live state.
    #[tracing::instrument(skip(self))]
    pub fn frame_at(&self, now: Duration) -> ViewFrame {
        let live = self.live.borrow();
        let content = &self.config.content;
        let scroll = self.config.scroll.map(live.tracker.progress());
        let viewport = live.viewport;

        let backdrop_transform = LayerTransform {
            offset: Vec2::new(0.0, scroll.backdrop_y),
            scale: scroll.backdrop_scale,
            origin: viewport.center(),
        };

        let lines = content
            .headline
            .iter()
            .enumerate()
            .map(|(i, text)| TextFragment {
                text: text.clone(),
                reveal: self.reveal.sample(Fragment::HeadlineLine(i), now),
            })
            .collect();

        let hero = HeroSection {
            backdrop: BackdropLayer {
                scene_url: content.scene_url.clone(),
                scale: scroll.backdrop_scale,
                offset_y: scroll.backdrop_y,
                transform: backdrop_transform.to_affine(),
            },
            overlays: vec![
                OverlayLayer {
                    kind: OverlayKind::GradientMesh,
                    opacity: 0.7,
                },
                OverlayLayer {
                    kind: OverlayKind::Noise,
                    opacity: 0.05,
                },
                OverlayLayer {
                    kind: OverlayKind::EmphasisMask,
                    opacity: 1.0,
                },
            ],
            headline: HeadlineBlock {
                scale: scroll.headline_scale,
                opacity: scroll.headline_opacity,
                lines,
            },
            subhead: TextFragment {
                text: content.subhead.clone(),
                reveal: self.reveal.sample(Fragment::Subhead, now),
            },
            ticker: TickerBlock {
                reveal: self.reveal.sample(Fragment::Ticker, now),
                cursor: live.rotator.cursor(),
                message: live.rotator.current().to_owned(),
                line: live.rotator.presentation(now),
            },
            cta: CtaBlock {
                label: content.cta_label.clone(),
                href: content.cta_href.clone(),
                transition: self.config.cta.transition_css(),
                reveal: self.reveal.sample(Fragment::Cta, now),
            },
            indicator: IndicatorLayer {
                label: content.indicator_label.clone(),
                hidden: live.indicator.is_hidden(),
                trigger: live.indicator.trigger(),
                opacity: live.indicator.opacity(now),
            },
        };

        ViewFrame {
            elapsed_ms: duration_ms(now.saturating_sub(self.mounted_at)),
            viewport,
            scroll_y: live.tracker.scroll_y(),
            scroll,
            hero,
            secondary: SecondarySection {
                id: content.secondary.id.clone(),
                title: content.secondary.title.clone(),
                body: content.secondary.body.clone(),
            },
            palette: self.config.palette,
        }
    }
}

impl Drop for MountedHero {
    fn drop(&mut self) {
        let released = self.subscriptions.len();
        self.subscriptions.clear();
        tracing::debug!(released, "hero unmounted");
    }
}

impl std::fmt::Debug for MountedHero {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MountedHero")
            .field("mounted_at", &self.mounted_at)
            .field("subscriptions", &self.subscriptions.len())
            .field("live", &self.live.borrow())
            .finish()
    }
}
