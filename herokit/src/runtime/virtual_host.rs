use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};
use std::time::Duration;

use crate::{
    foundation::core::Viewport,
    runtime::host::{
        EventKind, Host, HostEvent, ListenerCallback, Subscription, TimerCallback,
    },
};

// A zero period would fire forever within one `advance_to`.
const MIN_PERIOD: Duration = Duration::from_millis(1);

struct PendingTimer {
    deadline: Duration,
    /// Repeat period for intervals; `None` for one-shot timeouts.
    period: Option<Duration>,
    /// Taken while the callback runs.
    callback: Option<TimerCallback>,
}

struct Listener {
    kind: EventKind,
    callback: Option<ListenerCallback>,
}

struct HostState {
    now: Duration,
    viewport: Viewport,
    scroll_y: f64,
    next_id: u64,
    timers: BTreeMap<u64, PendingTimer>,
    listeners: BTreeMap<u64, Listener>,
    fired: u64,
}

/// Deterministic, manually driven host.
///
/// Time only moves through [`VirtualHost::advance`] / [`VirtualHost::advance_to`]; due
/// timers fire in deadline order (ties in registration order) with the clock set to
/// their deadline. Listeners run in registration order.
#[derive(Clone)]
pub struct VirtualHost {
    state: Rc<RefCell<HostState>>,
}

impl VirtualHost {
    /// New host at time zero, scrolled to the top.
    pub fn new(viewport: Viewport) -> Self {
        Self {
            state: Rc::new(RefCell::new(HostState {
                now: Duration::ZERO,
                viewport,
                scroll_y: 0.0,
                next_id: 1,
                timers: BTreeMap::new(),
                listeners: BTreeMap::new(),
                fired: 0,
            })),
        }
    }

    /// Advance the clock by `by`, firing due timers. Saturates at `Duration::MAX`.
    pub fn advance(&self, by: Duration) {
        let target = self.now().saturating_add(by);
        self.advance_to(target);
    }

    /// Advance the clock to `target`, firing due timers. Moving backwards is a no-op.
    pub fn advance_to(&self, target: Duration) {
        if target < self.now() {
            tracing::debug!(?target, now = ?self.now(), "virtual host cannot rewind");
            return;
        }

        loop {
            let next = {
                let st = self.state.borrow();
                st.timers
                    .iter()
                    .filter(|(_, t)| t.deadline <= target && t.callback.is_some())
                    .min_by_key(|(id, t)| (t.deadline, **id))
                    .map(|(id, t)| (*id, t.deadline))
            };
            let Some((id, deadline)) = next else {
                break;
            };

            let callback = {
                let mut st = self.state.borrow_mut();
                st.now = st.now.max(deadline);
                st.timers.get_mut(&id).and_then(|t| t.callback.take())
            };
            let Some(mut callback) = callback else {
                continue;
            };

            self.state.borrow_mut().fired += 1;
            tracing::trace!(timer = id, ?deadline, "timer fired");
            callback(deadline);

            // The callback may have cancelled its own subscription.
            let leftover = {
                let mut st = self.state.borrow_mut();
                let period = st.timers.get(&id).map(|t| t.period);
                match period {
                    Some(Some(period)) => match deadline.checked_add(period) {
                        Some(next) => {
                            if let Some(timer) = st.timers.get_mut(&id) {
                                timer.deadline = next;
                                timer.callback = Some(callback);
                            }
                            None
                        }
                        // Past the end of representable time: stays registered, never fires.
                        None => Some(callback),
                    },
                    Some(None) => {
                        st.timers.remove(&id);
                        Some(callback)
                    }
                    None => Some(callback),
                }
            };
            drop(leftover);
        }

        self.state.borrow_mut().now = target;
    }

    /// Scroll to `y` and notify scroll listeners.
    pub fn scroll_to(&self, y: f64) {
        self.state.borrow_mut().scroll_y = y;
        self.dispatch(HostEvent::Scroll { y });
    }

    /// Resize the viewport and notify resize listeners.
    pub fn resize(&self, viewport: Viewport) {
        self.state.borrow_mut().viewport = viewport;
        self.dispatch(HostEvent::Resize { viewport });
    }

    /// Timers still registered (pending or repeating).
    pub fn active_timers(&self) -> usize {
        self.state.borrow().timers.len()
    }

    /// Listeners still registered.
    pub fn active_listeners(&self) -> usize {
        self.state.borrow().listeners.len()
    }

    /// Total callbacks run so far (timers and listeners).
    pub fn fired_callbacks(&self) -> u64 {
        self.state.borrow().fired
    }

    fn dispatch(&self, event: HostEvent) {
        let (now, ids) = {
            let st = self.state.borrow();
            let ids: Vec<u64> = st
                .listeners
                .iter()
                .filter(|(_, l)| l.kind == event.kind())
                .map(|(id, _)| *id)
                .collect();
            (st.now, ids)
        };

        for id in ids {
            let callback = {
                let mut st = self.state.borrow_mut();
                st.listeners.get_mut(&id).and_then(|l| l.callback.take())
            };
            let Some(mut callback) = callback else {
                continue;
            };

            self.state.borrow_mut().fired += 1;
            callback(now, &event);

            let leftover = {
                let mut st = self.state.borrow_mut();
                match st.listeners.get_mut(&id) {
                    Some(listener) => {
                        listener.callback = Some(callback);
                        None
                    }
                    None => Some(callback),
                }
            };
            drop(leftover);
        }
    }

    fn next_id(&self) -> u64 {
        let mut st = self.state.borrow_mut();
        let id = st.next_id;
        st.next_id += 1;
        id
    }

    fn add_timer(
        &self,
        label: &'static str,
        delay: Duration,
        period: Option<Duration>,
        callback: TimerCallback,
    ) -> Subscription {
        let id = self.next_id();
        {
            let mut st = self.state.borrow_mut();
            let deadline = st.now.saturating_add(delay);
            st.timers.insert(
                id,
                PendingTimer {
                    deadline,
                    period,
                    callback: Some(callback),
                },
            );
        }
        tracing::trace!(timer = id, label, ?delay, "timer registered");

        let weak: Weak<RefCell<HostState>> = Rc::downgrade(&self.state);
        Subscription::new(label, move || {
            if let Some(state) = weak.upgrade() {
                let removed = state.borrow_mut().timers.remove(&id);
                drop(removed);
            }
        })
    }
}

impl Host for VirtualHost {
    fn now(&self) -> Duration {
        self.state.borrow().now
    }

    fn viewport(&self) -> Viewport {
        self.state.borrow().viewport
    }

    fn scroll_y(&self) -> f64 {
        self.state.borrow().scroll_y
    }

    fn set_interval(&self, period: Duration, callback: TimerCallback) -> Subscription {
        let period = period.max(MIN_PERIOD);
        self.add_timer("interval", period, Some(period), callback)
    }

    fn set_timeout(&self, delay: Duration, callback: TimerCallback) -> Subscription {
        self.add_timer("timeout", delay, None, callback)
    }

    fn listen(&self, kind: EventKind, callback: ListenerCallback) -> Subscription {
        let id = self.next_id();
        self.state.borrow_mut().listeners.insert(
            id,
            Listener {
                kind,
                callback: Some(callback),
            },
        );
        tracing::trace!(listener = id, ?kind, "listener registered");

        let weak: Weak<RefCell<HostState>> = Rc::downgrade(&self.state);
        Subscription::new("listener", move || {
            if let Some(state) = weak.upgrade() {
                let removed = state.borrow_mut().listeners.remove(&id);
                drop(removed);
            }
        })
    }
}

impl std::fmt::Debug for VirtualHost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let st = self.state.borrow();
        f.debug_struct("VirtualHost")
            .field("now", &st.now)
            .field("viewport", &st.viewport)
            .field("scroll_y", &st.scroll_y)
            .field("timers", &st.timers.len())
            .field("listeners", &st.listeners.len())
            .finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/runtime/virtual_host.rs"]
mod tests;
