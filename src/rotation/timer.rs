// SPDX-License-Identifier: GPL-3.0-only
//! Periodic timers owned through handles
//!
//! A [`TimerQueue`] is the event loop's registry of live periodic timers.
//! Arming a timer returns a [`TimerHandle`]; the timer stays registered
//! exactly as long as the handle is alive. Dropping the handle (or calling
//! [`TimerHandle::cancel`]) removes it, so a timer can never outlive the
//! component that owns it.
//!
//! The queue is single-threaded (`Rc`/`RefCell`). The event loop asks it
//! how long it may sleep ([`TimerQueue::poll_timeout`]) and each owner asks
//! its own handle how many periods have elapsed
//! ([`TimerHandle::take_elapsed`]).

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::{Rc, Weak};
use std::time::{Duration, Instant};
use tracing::{debug, trace};

/// Identifier of a registered timer, unique per queue
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(u64);

impl fmt::Display for TimerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timer#{}", self.0)
    }
}

#[derive(Debug)]
struct PeriodicTimer {
    name: String,
    period: Duration,
    next_deadline: Instant,
}

#[derive(Debug, Default)]
struct QueueInner {
    next_id: u64,
    timers: BTreeMap<TimerId, PeriodicTimer>,
}

/// Registry of live periodic timers for one event loop
#[derive(Debug, Clone, Default)]
pub struct TimerQueue {
    inner: Rc<RefCell<QueueInner>>,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a periodic timer whose first deadline is `now + period`
    ///
    /// A zero period is bumped to one millisecond so the timer can never
    /// fire in a busy loop.
    pub fn arm_periodic(&self, name: &str, period: Duration, now: Instant) -> TimerHandle {
        let period = period.max(Duration::from_millis(1));
        let mut inner = self.inner.borrow_mut();
        let id = TimerId(inner.next_id);
        inner.next_id += 1;
        inner.timers.insert(
            id,
            PeriodicTimer {
                name: name.to_string(),
                period,
                next_deadline: now + period,
            },
        );

        debug!(%id, name, period_ms = period.as_millis() as u64, "Armed periodic timer");

        TimerHandle {
            id,
            queue: Rc::downgrade(&self.inner),
        }
    }

    /// Number of timers currently registered
    pub fn active_count(&self) -> usize {
        self.inner.borrow().timers.len()
    }

    /// Whether the given timer is still registered
    pub fn is_active(&self, id: TimerId) -> bool {
        self.inner.borrow().timers.contains_key(&id)
    }

    /// Earliest deadline across all registered timers
    pub fn next_deadline(&self) -> Option<Instant> {
        self.inner
            .borrow()
            .timers
            .values()
            .map(|t| t.next_deadline)
            .min()
    }

    /// How long the event loop may block waiting for input.
    ///
    /// This is the time until the earliest deadline, capped at `max`. A
    /// deadline already in the past yields zero.
    pub fn poll_timeout(&self, now: Instant, max: Duration) -> Duration {
        match self.next_deadline() {
            Some(deadline) => deadline.saturating_duration_since(now).min(max),
            None => max,
        }
    }
}

/// Exclusive ownership of one registered periodic timer
///
/// The timer is deregistered when the handle is dropped.
pub struct TimerHandle {
    id: TimerId,
    queue: Weak<RefCell<QueueInner>>,
}

impl TimerHandle {
    pub fn id(&self) -> TimerId {
        self.id
    }

    /// Next time this timer is due, or `None` once the queue is gone
    pub fn next_deadline(&self) -> Option<Instant> {
        let queue = self.queue.upgrade()?;
        let inner = queue.borrow();
        inner.timers.get(&self.id).map(|t| t.next_deadline)
    }

    /// Count the periods that elapsed up to `now` and re-arm in place.
    ///
    /// The deadline moves forward by whole periods, so the cadence stays
    /// anchored to when the timer was armed rather than to when it was
    /// polled. Returns 0 if the timer is not yet due or its queue has been
    /// dropped.
    pub fn take_elapsed(&self, now: Instant) -> usize {
        let Some(queue) = self.queue.upgrade() else {
            return 0;
        };
        let mut inner = queue.borrow_mut();
        let Some(timer) = inner.timers.get_mut(&self.id) else {
            return 0;
        };

        if now < timer.next_deadline {
            return 0;
        }

        let late = now.duration_since(timer.next_deadline).as_nanos();
        let periods = 1 + late / timer.period.as_nanos();
        let periods = u32::try_from(periods).unwrap_or(u32::MAX);
        timer.next_deadline += timer.period * periods;

        trace!(id = %self.id, name = %timer.name, periods, "Timer fired");
        periods as usize
    }

    /// Deregister the timer now
    pub fn cancel(self) {
        drop(self);
    }
}

impl fmt::Debug for TimerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimerHandle")
            .field("id", &self.id)
            .finish()
    }
}

impl Drop for TimerHandle {
    fn drop(&mut self) {
        let Some(queue) = self.queue.upgrade() else {
            return;
        };
        if let Some(timer) = queue.borrow_mut().timers.remove(&self.id) {
            debug!(id = %self.id, name = %timer.name, "Cancelled periodic timer");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECOND: Duration = Duration::from_secs(1);

    #[test]
    fn test_not_due_before_first_period() {
        let queue = TimerQueue::new();
        let start = Instant::now();
        let handle = queue.arm_periodic("test", SECOND, start);

        assert_eq!(handle.take_elapsed(start), 0);
        assert_eq!(handle.take_elapsed(start + Duration::from_millis(999)), 0);
        assert_eq!(handle.take_elapsed(start + SECOND), 1);
    }

    #[test]
    fn test_rearms_in_place() {
        let queue = TimerQueue::new();
        let start = Instant::now();
        let handle = queue.arm_periodic("test", SECOND, start);

        // Polled late: the next deadline stays on the original grid
        assert_eq!(handle.take_elapsed(start + Duration::from_millis(1500)), 1);
        assert_eq!(handle.next_deadline(), Some(start + SECOND * 2));
        assert_eq!(queue.active_count(), 1);
    }

    #[test]
    fn test_counts_missed_periods() {
        let queue = TimerQueue::new();
        let start = Instant::now();
        let handle = queue.arm_periodic("test", SECOND, start);

        assert_eq!(handle.take_elapsed(start + Duration::from_millis(3200)), 3);
        assert_eq!(handle.take_elapsed(start + Duration::from_millis(3900)), 0);
        assert_eq!(handle.take_elapsed(start + SECOND * 4), 1);
    }

    #[test]
    fn test_drop_deregisters() {
        let queue = TimerQueue::new();
        let start = Instant::now();
        let handle = queue.arm_periodic("test", SECOND, start);
        let id = handle.id();
        assert!(queue.is_active(id));

        drop(handle);
        assert!(!queue.is_active(id));
        assert_eq!(queue.active_count(), 0);
        assert_eq!(queue.next_deadline(), None);
    }

    #[test]
    fn test_cancel_deregisters() {
        let queue = TimerQueue::new();
        let handle = queue.arm_periodic("test", SECOND, Instant::now());
        handle.cancel();
        assert_eq!(queue.active_count(), 0);
    }

    #[test]
    fn test_handle_outliving_queue_is_inert() {
        let queue = TimerQueue::new();
        let start = Instant::now();
        let handle = queue.arm_periodic("test", SECOND, start);
        drop(queue);

        assert_eq!(handle.take_elapsed(start + SECOND * 10), 0);
        assert_eq!(handle.next_deadline(), None);
    }

    #[test]
    fn test_poll_timeout() {
        let queue = TimerQueue::new();
        let start = Instant::now();
        let cap = Duration::from_millis(250);

        assert_eq!(queue.poll_timeout(start, cap), cap);

        let _handle = queue.arm_periodic("test", Duration::from_millis(100), start);
        assert_eq!(queue.poll_timeout(start, cap), Duration::from_millis(100));
        assert_eq!(
            queue.poll_timeout(start + Duration::from_millis(500), cap),
            Duration::ZERO
        );
    }

    #[test]
    fn test_zero_period_is_bumped() {
        let queue = TimerQueue::new();
        let start = Instant::now();
        let handle = queue.arm_periodic("test", Duration::ZERO, start);
        assert_eq!(handle.next_deadline(), Some(start + Duration::from_millis(1)));
        assert_eq!(handle.take_elapsed(start + Duration::from_millis(3)), 3);
    }
}
