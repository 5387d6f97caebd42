use std::time::Duration;

use crate::{
    animation::ease::Ease,
    foundation::core::Progress,
    foundation::error::{HeroError, HeroResult},
};

/// Interpolation contract for animated value types.
pub trait Lerp: Sized {
    /// Interpolate from `a` to `b` with normalized factor `t` in `[0, 1]`.
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

impl Lerp for (f64, f64) {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        (f64::lerp(&a.0, &b.0, t), f64::lerp(&a.1, &b.1, t))
    }
}

/// Two-keyframe track: `from` at progress 0, `to` at progress 1.
///
/// Sampling is plain linear interpolation with no easing, so it is a pure function
/// of the progress value.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct KeyframePair<T> {
    /// Value at progress 0.
    pub from: T,
    /// Value at progress 1.
    pub to: T,
}

impl<T> KeyframePair<T>
where
    T: Lerp + Clone,
{
    /// Build a keyframe pair.
    pub fn new(from: T, to: T) -> Self {
        Self { from, to }
    }

    /// Sample at `progress`.
    pub fn sample(&self, progress: Progress) -> T {
        T::lerp(&self.from, &self.to, progress.get())
    }
}

impl KeyframePair<f64> {
    /// Reject non-finite endpoints.
    pub fn validate(&self, name: &str) -> HeroResult<()> {
        if !self.from.is_finite() || !self.to.is_finite() {
            return Err(HeroError::validation(format!(
                "keyframes '{name}' must have finite endpoints"
            )));
        }
        Ok(())
    }
}

/// Where a tween is relative to its window.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TweenPhase {
    /// Before `delay`: the value holds `from`.
    Pending,
    /// Inside the window, with raw (un-eased) progress in `[0, 1)`.
    Running(f64),
    /// At or after `delay + duration`: the value holds `to`.
    Done,
}

/// Time-based animation from `from` toward `to`.
///
/// This is the single "value at time t" primitive behind reveals, the ticker
/// cross-transition and the indicator fade.
#[derive(Clone, Debug, PartialEq)]
pub struct Tween<T> {
    /// Value before the window starts.
    pub from: T,
    /// Target value once the window completes.
    pub to: T,
    /// Offset of the window from the tween's origin.
    pub delay: Duration,
    /// Window length (`> 0`).
    pub duration: Duration,
    /// Easing applied to progress inside the window.
    pub ease: Ease,
}

impl<T> Tween<T>
where
    T: Lerp + Clone,
{
    /// Validate window and easing.
    pub fn validate(&self) -> HeroResult<()> {
        if self.duration.is_zero() {
            return Err(HeroError::validation("tween duration must be > 0"));
        }
        self.ease.validate()
    }

    /// Phase at `elapsed` since the tween's origin.
    pub fn phase(&self, elapsed: Duration) -> TweenPhase {
        if elapsed < self.delay {
            return TweenPhase::Pending;
        }
        let local = elapsed - self.delay;
        if local >= self.duration || self.duration.is_zero() {
            return TweenPhase::Done;
        }
        TweenPhase::Running(local.as_secs_f64() / self.duration.as_secs_f64())
    }

    /// Value at `elapsed` since the tween's origin.
    pub fn sample(&self, elapsed: Duration) -> T {
        match self.phase(elapsed) {
            TweenPhase::Pending => self.from.clone(),
            TweenPhase::Running(t) => T::lerp(&self.from, &self.to, self.ease.apply(t)),
            TweenPhase::Done => self.to.clone(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/anim.rs"]
mod tests;
