use std::time::Duration;

use crate::{
    animation::anim::Tween,
    animation::ease::Ease,
    foundation::error::{HeroError, HeroResult},
};

/// What tripped the indicator latch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HideTrigger {
    /// The one-shot timeout elapsed.
    Timeout,
    /// The user scrolled.
    Scroll,
}

/// One-way latch controlling the "scroll to continue" hint.
///
/// Starts visible and flips to hidden on the first trigger; later triggers are
/// ignored for the lifetime of the mount.
#[derive(Clone, Debug)]
pub struct IndicatorVisibility {
    tripped: Option<(Duration, HideTrigger)>,
    fade: Duration,
    ease: Ease,
}

impl IndicatorVisibility {
    /// Visible latch whose hide fade lasts `fade`.
    pub fn new(fade: Duration, ease: Ease) -> HeroResult<Self> {
        if fade.is_zero() {
            return Err(HeroError::validation("indicator fade must be > 0"));
        }
        ease.validate()?;
        Ok(Self {
            tripped: None,
            fade,
            ease,
        })
    }

    /// Trip the latch. Returns `true` only for the call that actually hid it.
    pub fn hide(&mut self, trigger: HideTrigger, now: Duration) -> bool {
        if self.tripped.is_some() {
            return false;
        }
        self.tripped = Some((now, trigger));
        tracing::debug!(?trigger, ?now, "scroll indicator hidden");
        true
    }

    /// Whether the latch has tripped.
    pub fn is_hidden(&self) -> bool {
        self.tripped.is_some()
    }

    /// The trigger that tripped the latch, if any.
    pub fn trigger(&self) -> Option<HideTrigger> {
        self.tripped.map(|(_, trigger)| trigger)
    }

    /// Rendered opacity at `now`: 1 while visible, fading to 0 once hidden.
    pub fn opacity(&self, now: Duration) -> f64 {
        let Some((at, _)) = self.tripped else {
            return 1.0;
        };
        let fade = Tween {
            from: 1.0,
            to: 0.0,
            delay: Duration::ZERO,
            duration: self.fade,
            ease: self.ease,
        };
        fade.sample(now.saturating_sub(at))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/motion/indicator.rs"]
mod tests;
