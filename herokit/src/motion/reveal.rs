use std::collections::BTreeSet;
use std::time::Duration;

use crate::{
    animation::anim::{Lerp, Tween, TweenPhase},
    animation::ease::Ease,
    foundation::error::{HeroError, HeroResult},
};

/// Element of the hero that takes part in the mount-time cascade.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Fragment {
    /// One headline line, by index.
    HeadlineLine(usize),
    /// Supporting paragraph under the headline.
    Subhead,
    /// Rotating ticker block.
    Ticker,
    /// Call-to-action link.
    Cta,
}

/// Visual state an element animates through.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RevealStyle {
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
    /// Gaussian blur radius in px.
    pub blur_px: f64,
    /// Vertical offset in px.
    pub offset_y: f64,
}

impl RevealStyle {
    /// Fully revealed: opaque, sharp, in place.
    pub const REVEALED: Self = Self {
        opacity: 1.0,
        blur_px: 0.0,
        offset_y: 0.0,
    };

    /// Transparent and blurred.
    pub fn blurred(blur_px: f64) -> Self {
        Self {
            opacity: 0.0,
            blur_px,
            offset_y: 0.0,
        }
    }

    /// Transparent and shifted down.
    pub fn lowered(offset_y: f64) -> Self {
        Self {
            opacity: 0.0,
            blur_px: 0.0,
            offset_y,
        }
    }

    fn validate(&self) -> HeroResult<()> {
        if !(0.0..=1.0).contains(&self.opacity) {
            return Err(HeroError::validation("reveal opacity must be within [0, 1]"));
        }
        if !(self.blur_px.is_finite() && self.blur_px >= 0.0) {
            return Err(HeroError::validation("reveal blur must be >= 0"));
        }
        if !self.offset_y.is_finite() {
            return Err(HeroError::validation("reveal offset must be finite"));
        }
        Ok(())
    }
}

impl Lerp for RevealStyle {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Self {
            opacity: f64::lerp(&a.opacity, &b.opacity, t),
            blur_px: f64::lerp(&a.blur_px, &b.blur_px, t),
            offset_y: f64::lerp(&a.offset_y, &b.offset_y, t),
        }
    }
}

/// One row of the reveal schedule.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RevealEntry {
    /// Element being revealed.
    pub fragment: Fragment,
    /// Start offset from mount, in ms.
    pub delay_ms: u64,
    /// Transition length, in ms (`> 0`).
    pub duration_ms: u64,
    /// Starting (hidden) style; the target is always [`RevealStyle::REVEALED`].
    pub hidden: RevealStyle,
}

impl RevealEntry {
    /// Build an entry.
    pub fn new(fragment: Fragment, delay_ms: u64, duration_ms: u64, hidden: RevealStyle) -> Self {
        Self {
            fragment,
            delay_ms,
            duration_ms,
            hidden,
        }
    }

    /// Tween that moves this entry from hidden to revealed.
    pub fn tween(&self, ease: Ease) -> Tween<RevealStyle> {
        Tween {
            from: self.hidden,
            to: RevealStyle::REVEALED,
            delay: Duration::from_millis(self.delay_ms),
            duration: Duration::from_millis(self.duration_ms),
            ease,
        }
    }
}

/// Data-driven mount-time cascade.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RevealSchedule {
    /// Entries in cascade order.
    pub entries: Vec<RevealEntry>,
    /// Easing shared by every entry.
    #[serde(default)]
    pub ease: Ease,
}

impl Default for RevealSchedule {
    fn default() -> Self {
        let line = |i: usize, delay_ms: u64| {
            RevealEntry::new(
                Fragment::HeadlineLine(i),
                delay_ms,
                800,
                RevealStyle::blurred(8.0),
            )
        };
        Self {
            entries: vec![
                line(0, 0),
                line(1, 800),
                line(2, 1600),
                line(3, 2400),
                RevealEntry::new(Fragment::Subhead, 3600, 600, RevealStyle::lowered(8.0)),
                RevealEntry::new(Fragment::Ticker, 4400, 600, RevealStyle::lowered(0.0)),
                RevealEntry::new(Fragment::Cta, 5000, 600, RevealStyle::lowered(10.0)),
            ],
            ease: Ease::default(),
        }
    }
}

impl RevealSchedule {
    /// Validate durations, styles, easing and fragment uniqueness.
    pub fn validate(&self) -> HeroResult<()> {
        self.ease.validate()?;
        let mut seen = BTreeSet::new();
        for entry in &self.entries {
            if entry.duration_ms == 0 {
                return Err(HeroError::validation(format!(
                    "reveal duration for {:?} must be > 0",
                    entry.fragment
                )));
            }
            entry.hidden.validate()?;
            if !seen.insert(entry.fragment) {
                return Err(HeroError::validation(format!(
                    "fragment {:?} is scheduled more than once",
                    entry.fragment
                )));
            }
        }
        Ok(())
    }

    /// Entry for `fragment`, if scheduled.
    pub fn entry(&self, fragment: Fragment) -> Option<&RevealEntry> {
        self.entries.iter().find(|e| e.fragment == fragment)
    }

    /// Time at which the last entry completes.
    pub fn total_ms(&self) -> u64 {
        self.entries
            .iter()
            .map(|e| e.delay_ms.saturating_add(e.duration_ms))
            .max()
            .unwrap_or(0)
    }
}

/// One-way visibility phase of a fragment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RevealPhase {
    /// Not started.
    Hidden,
    /// In flight.
    Revealing,
    /// Complete; never reverts while mounted.
    Revealed,
}

/// Sampled state of one fragment.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct RevealSample {
    /// Element sampled.
    pub fragment: Fragment,
    /// Phase at the sample time.
    pub phase: RevealPhase,
    /// Style at the sample time.
    pub style: RevealStyle,
}

impl RevealSample {
    /// Sample for a fragment outside the schedule: always revealed.
    pub fn unscheduled(fragment: Fragment) -> Self {
        Self {
            fragment,
            phase: RevealPhase::Revealed,
            style: RevealStyle::REVEALED,
        }
    }
}

/// Interprets a [`RevealSchedule`] against a fixed mount origin.
#[derive(Clone, Debug)]
pub struct RevealSequencer {
    schedule: RevealSchedule,
    origin: Duration,
}

impl RevealSequencer {
    /// Fix the origin at `origin` (the mount time).
    pub fn start(schedule: RevealSchedule, origin: Duration) -> HeroResult<Self> {
        schedule.validate()?;
        Ok(Self { schedule, origin })
    }

    /// Mount origin.
    pub fn origin(&self) -> Duration {
        self.origin
    }

    /// Schedule being interpreted.
    pub fn schedule(&self) -> &RevealSchedule {
        &self.schedule
    }

    /// Sample a single fragment at host time `now`.
    pub fn sample(&self, fragment: Fragment, now: Duration) -> RevealSample {
        let Some(entry) = self.schedule.entry(fragment) else {
            return RevealSample::unscheduled(fragment);
        };
        self.sample_entry(entry, now)
    }

    /// Sample every scheduled fragment at host time `now`, in schedule order.
    pub fn sample_all(&self, now: Duration) -> Vec<RevealSample> {
        self.schedule
            .entries
            .iter()
            .map(|e| self.sample_entry(e, now))
            .collect()
    }

    /// Whether every entry has completed at `now`.
    pub fn is_complete(&self, now: Duration) -> bool {
        now.saturating_sub(self.origin) >= Duration::from_millis(self.schedule.total_ms())
    }

    fn sample_entry(&self, entry: &RevealEntry, now: Duration) -> RevealSample {
        let tween = entry.tween(self.schedule.ease);
        let elapsed = now.saturating_sub(self.origin);
        let phase = match tween.phase(elapsed) {
            TweenPhase::Pending => RevealPhase::Hidden,
            TweenPhase::Running(_) => RevealPhase::Revealing,
            TweenPhase::Done => RevealPhase::Revealed,
        };
        RevealSample {
            fragment: entry.fragment,
            phase,
            style: tween.sample(elapsed),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/motion/reveal.rs"]
mod tests;
