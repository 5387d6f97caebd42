//! Host environment seam: clock, timers and viewport notifications.
//!
//! Everything the view subscribes to is handed back as a [`Subscription`], so the
//! owner releases it by dropping. Hosts are single-threaded; callbacks run on the
//! host's own dispatch loop and must not re-enter it.

use std::time::Duration;

use crate::foundation::core::Viewport;

/// Callback run when a timer fires, with the host time it fired at.
pub type TimerCallback = Box<dyn FnMut(Duration)>;

/// Callback run for a viewport event, with the host time it was delivered at.
pub type ListenerCallback = Box<dyn FnMut(Duration, &HostEvent)>;

/// Kind of viewport notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EventKind {
    /// Vertical scroll position changed.
    Scroll,
    /// Viewport size changed.
    Resize,
}

/// Viewport notification payload.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HostEvent {
    /// New vertical scroll offset.
    Scroll {
        /// Document scroll offset in px.
        y: f64,
    },
    /// New viewport size.
    Resize {
        /// Viewport after the resize.
        viewport: Viewport,
    },
}

impl HostEvent {
    /// Kind of this event.
    pub fn kind(&self) -> EventKind {
        match self {
            Self::Scroll { .. } => EventKind::Scroll,
            Self::Resize { .. } => EventKind::Resize,
        }
    }
}

/// Environment the view mounts into.
pub trait Host {
    /// Current host time, measured from the host's origin.
    fn now(&self) -> Duration;

    /// Current viewport size.
    fn viewport(&self) -> Viewport;

    /// Current vertical scroll offset.
    fn scroll_y(&self) -> f64;

    /// Run `callback` every `period` until the subscription is dropped.
    fn set_interval(&self, period: Duration, callback: TimerCallback) -> Subscription;

    /// Run `callback` once after `delay`, unless the subscription is dropped first.
    fn set_timeout(&self, delay: Duration, callback: TimerCallback) -> Subscription;

    /// Run `callback` for every event of `kind` until the subscription is dropped.
    fn listen(&self, kind: EventKind, callback: ListenerCallback) -> Subscription;
}

/// Owned registration with a host. Dropping it cancels the timer or removes the listener.
#[must_use = "dropping a subscription cancels it immediately"]
pub struct Subscription {
    label: &'static str,
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Wrap a release action.
    pub fn new(label: &'static str, release: impl FnOnce() + 'static) -> Self {
        Self {
            label,
            release: Some(Box::new(release)),
        }
    }

    /// Short description for logging.
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Release now. Equivalent to dropping.
    pub fn cancel(mut self) {
        self.release_now();
    }

    fn release_now(&mut self) {
        if let Some(release) = self.release.take() {
            tracing::trace!(label = self.label, "subscription released");
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release_now();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("label", &self.label)
            .field("active", &self.release.is_some())
            .finish()
    }
}
