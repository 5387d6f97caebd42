use std::time::Duration;

use crate::{
    animation::anim::Tween,
    animation::ease::Ease,
    foundation::error::{HeroError, HeroResult},
};

/// Ordered, immutable, non-empty list of ticker messages.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct MessageList(Vec<String>);

impl MessageList {
    /// Build a list, rejecting an empty one.
    pub fn new(messages: Vec<String>) -> HeroResult<Self> {
        if messages.is_empty() {
            return Err(HeroError::validation("message list must not be empty"));
        }
        Ok(Self(messages))
    }

    /// Number of messages (always `>= 1`).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; kept for API symmetry with slices.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Message at `cursor`, taken modulo the list length.
    pub fn get(&self, cursor: usize) -> &str {
        &self.0[cursor % self.0.len()]
    }

    /// All messages in order.
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

/// Ticker timing. `2 * transition` must fit inside `interval` (exit, then enter).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RotationTiming {
    /// Period between message changes.
    pub interval: Duration,
    /// Length of each half of the cross-transition.
    pub transition: Duration,
    /// Vertical slide distance of the cross-transition, in px.
    pub slide_px: f64,
    /// Easing of the cross-transition.
    pub ease: Ease,
}

impl RotationTiming {
    /// Validate timing constraints.
    pub fn validate(&self) -> HeroResult<()> {
        if self.interval.is_zero() {
            return Err(HeroError::validation("ticker interval must be > 0"));
        }
        if self.transition.is_zero() {
            return Err(HeroError::validation("ticker transition must be > 0"));
        }
        if self.transition * 2 >= self.interval {
            return Err(HeroError::validation(
                "ticker transition (exit + enter) must be shorter than the interval",
            ));
        }
        if !self.slide_px.is_finite() {
            return Err(HeroError::validation("ticker slide must be finite"));
        }
        self.ease.validate()
    }
}

/// Stage of the visible ticker line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TickerStage {
    /// The previous message is leaving.
    Exiting,
    /// The current message is arriving.
    Entering,
    /// The current message is at rest.
    Settled,
}

/// Presentation of the single visible ticker line.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct TickerLine {
    /// Text being shown (the outgoing message while exiting).
    pub text: String,
    /// Line opacity.
    pub opacity: f64,
    /// Vertical offset in px.
    pub offset_y: f64,
    /// Transition stage.
    pub stage: TickerStage,
}

/// Rotating status ticker.
///
/// The model state is a discrete cursor; the fade/slide between messages is derived
/// from the time since the last change and never commits two messages at once.
#[derive(Clone, Debug)]
pub struct MessageRotator {
    messages: MessageList,
    timing: RotationTiming,
    cursor: usize,
    previous: Option<usize>,
    changed_at: Duration,
    /// Scheduled time of the next change.
    due: Duration,
}

impl MessageRotator {
    /// Create a rotator mounted at `mounted_at`, showing the first message.
    pub fn new(
        messages: MessageList,
        timing: RotationTiming,
        mounted_at: Duration,
    ) -> HeroResult<Self> {
        timing.validate()?;
        Ok(Self {
            messages,
            timing,
            cursor: 0,
            previous: None,
            changed_at: mounted_at,
            due: mounted_at.saturating_add(timing.interval),
        })
    }

    /// Current cursor in `0..len`.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Currently selected message.
    pub fn current(&self) -> &str {
        self.messages.get(self.cursor)
    }

    /// Configured messages.
    pub fn messages(&self) -> &MessageList {
        &self.messages
    }

    /// Configured timing.
    pub fn timing(&self) -> RotationTiming {
        self.timing
    }

    /// Advance to the next message; returns whether the cursor moved.
    ///
    /// Changes are anchored to the schedule `mounted_at + k * interval`, not to the time
    /// a tick was delivered, so a late tick does not push the following one back. A tick
    /// more than half an interval ahead of its slot is ignored.
    pub fn tick(&mut self, now: Duration) -> bool {
        let half = self.timing.interval / 2;
        if now.saturating_add(half) <= self.due {
            tracing::trace!(?now, due = ?self.due, "ticker tick ignored, ahead of schedule");
            return false;
        }
        self.previous = Some(self.cursor);
        self.cursor = (self.cursor + 1) % self.messages.len();
        self.changed_at = now;
        self.due = self.due.saturating_add(self.timing.interval);
        if self.due <= now {
            // The host fell a whole interval behind; restart the schedule from here.
            self.due = now.saturating_add(self.timing.interval);
        }
        tracing::debug!(cursor = self.cursor, message = self.current(), "ticker advanced");
        true
    }

    /// Visible line at `now`: the outgoing message exits, then the current one enters.
    pub fn presentation(&self, now: Duration) -> TickerLine {
        let since = now.saturating_sub(self.changed_at);
        let d = self.timing.transition;
        let slide = self.timing.slide_px;

        if let Some(prev) = self.previous {
            if since < d {
                let exit = Tween {
                    from: (1.0, 0.0),
                    to: (0.0, -slide),
                    delay: Duration::ZERO,
                    duration: d,
                    ease: self.timing.ease,
                };
                let (opacity, offset_y) = exit.sample(since);
                return TickerLine {
                    text: self.messages.get(prev).to_owned(),
                    opacity,
                    offset_y,
                    stage: TickerStage::Exiting,
                };
            }
        }

        // The first message enters right at mount; later ones wait for the exit.
        let enter_delay = if self.previous.is_some() {
            d
        } else {
            Duration::ZERO
        };
        let enter = Tween {
            from: (0.0, slide),
            to: (1.0, 0.0),
            delay: enter_delay,
            duration: d,
            ease: self.timing.ease,
        };
        let (opacity, offset_y) = enter.sample(since);
        let stage = if since >= enter_delay + d {
            TickerStage::Settled
        } else {
            TickerStage::Entering
        };
        TickerLine {
            text: self.current().to_owned(),
            opacity,
            offset_y,
            stage,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/motion/rotator.rs"]
mod tests;
