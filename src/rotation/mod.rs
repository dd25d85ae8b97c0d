// SPDX-License-Identifier: GPL-3.0-only

//! Timed rotation over a bounded collection
//!
//! [`RotationController`] owns the current index into a collection of `len`
//! items and advances it by one (cyclically) every interval. The cadence
//! comes from a periodic timer registered on a [`TimerQueue`]; the
//! controller holds the only [`TimerHandle`] for it, so dropping or
//! unmounting the controller always cancels the timer.
//!
//! The lifecycle is an explicit state machine:
//!
//! ```text
//!            mount(len > 0)            reconfigure(len = 0)
//!   Idle ──────────────────▶ Running ─────────────────────▶ Idle
//!     ▲                        │  ▲
//!     │     unmount / drop     │  │ reconfigure(len > 0): cancel old
//!     └────────────────────────┘  │ timer, clamp index, arm new timer
//!                                 └──┘
//! ```
//!
//! Manual selection ([`RotationController::select`]) writes the index
//! immediately and leaves the timer alone: the next automatic advance
//! still fires on the original schedule. What that advance counts from is
//! decided by the [`TickPolicy`].

pub mod clock;
pub mod interval;
pub mod timer;

pub use clock::{Clock, ManualClock, SystemClock};
pub use interval::RotationInterval;
pub use timer::{TimerHandle, TimerId, TimerQueue};

use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::{debug, info, trace};

/// Name used when registering the rotation timer
const TIMER_NAME: &str = "carousel-rotation";

/// Which index an automatic advance starts from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TickPolicy {
    /// Advance from the index currently shown, including manual selections
    #[default]
    FromObserved,
    /// Advance from the index produced by the previous automatic advance,
    /// ignoring manual selections made since
    FromLastTick,
}

impl TickPolicy {
    pub fn display_name(&self) -> &'static str {
        match self {
            TickPolicy::FromObserved => "from observed index",
            TickPolicy::FromLastTick => "from last tick",
        }
    }
}

/// Lifecycle state of a rotation controller
#[derive(Debug)]
pub enum RotationState {
    /// Empty collection: nothing is active and no timer is armed
    Idle,
    /// Non-empty collection with a live timer
    Running {
        /// Index currently shown
        index: usize,
        /// Index produced by the most recent automatic advance
        last_tick_index: usize,
        /// Exclusive handle to the periodic timer
        timer: TimerHandle,
    },
}

/// Cyclic index over `len` items driven by a periodic timer
#[derive(Debug)]
pub struct RotationController {
    state: RotationState,
    len: usize,
    interval: RotationInterval,
    policy: TickPolicy,
    queue: TimerQueue,
}

impl RotationController {
    /// Create the controller at index 0 and arm its timer at `now`
    ///
    /// An empty collection starts `Idle` with no timer.
    pub fn mount(
        len: usize,
        interval: RotationInterval,
        policy: TickPolicy,
        queue: &TimerQueue,
        now: Instant,
    ) -> Self {
        let mut controller = Self {
            state: RotationState::Idle,
            len,
            interval,
            policy,
            queue: queue.clone(),
        };

        if len > 0 {
            controller.start(0, now);
        }

        info!(
            len,
            interval = %interval,
            policy = policy.display_name(),
            "Rotation controller mounted"
        );
        controller
    }

    fn start(&mut self, index: usize, now: Instant) {
        debug_assert!(index < self.len);
        let timer = self
            .queue
            .arm_periodic(TIMER_NAME, self.interval.as_duration(), now);
        self.state = RotationState::Running {
            index,
            last_tick_index: index,
            timer,
        };
    }

    /// Apply every automatic advance that is due at `now`
    ///
    /// Returns the number of advances applied. An idle controller never
    /// advances.
    pub fn poll(&mut self, now: Instant) -> usize {
        let len = self.len;
        let policy = self.policy;
        let RotationState::Running {
            index,
            last_tick_index,
            timer,
        } = &mut self.state
        else {
            return 0;
        };

        let fired = timer.take_elapsed(now);
        if fired == 0 {
            return 0;
        }

        let base = match policy {
            TickPolicy::FromObserved => *index,
            TickPolicy::FromLastTick => *last_tick_index,
        };
        let next = (base + fired % len) % len;
        trace!(from = base, to = next, fired, "Rotation advanced");

        *index = next;
        *last_tick_index = next;
        fired
    }

    /// Show the item at `index` right away
    ///
    /// The timer keeps its schedule. Returns `false` (and changes nothing)
    /// when the controller is idle or `index` is out of range.
    pub fn select(&mut self, index: usize) -> bool {
        let len = self.len;
        let RotationState::Running { index: current, .. } = &mut self.state else {
            debug!(index, "Ignoring selection on idle carousel");
            return false;
        };
        if index >= len {
            debug!(index, len, "Ignoring out-of-range selection");
            return false;
        }

        debug!(from = *current, to = index, "Manual selection");
        *current = index;
        true
    }

    /// Manually select the following item, wrapping at the end
    pub fn select_next(&mut self) -> bool {
        match self.current_index() {
            Some(index) => self.select((index + 1) % self.len),
            None => false,
        }
    }

    /// Manually select the preceding item, wrapping at the start
    pub fn select_previous(&mut self) -> bool {
        match self.current_index() {
            Some(index) => self.select((index + self.len - 1) % self.len),
            None => false,
        }
    }

    /// Adopt a new collection length and/or interval
    ///
    /// When either changes, the current timer is cancelled before a new one
    /// is armed at `now`, and the index is clamped into the new range. An
    /// unchanged configuration is a no-op that leaves the timer untouched.
    /// Returns whether the timer was torn down.
    pub fn reconfigure(&mut self, len: usize, interval: RotationInterval, now: Instant) -> bool {
        if len == self.len && interval == self.interval {
            return false;
        }

        let carried = match std::mem::replace(&mut self.state, RotationState::Idle) {
            RotationState::Running { index, timer, .. } => {
                timer.cancel();
                Some(index)
            }
            RotationState::Idle => None,
        };

        info!(
            old_len = self.len,
            new_len = len,
            old_interval = %self.interval,
            new_interval = %interval,
            "Reconfiguring rotation"
        );
        self.len = len;
        self.interval = interval;

        if len > 0 {
            let index = carried.map_or(0, |index| index.min(len - 1));
            self.start(index, now);
        }
        true
    }

    /// Change what automatic advances count from; the timer is untouched
    pub fn set_policy(&mut self, policy: TickPolicy) {
        self.policy = policy;
    }

    /// Tear the controller down, cancelling its timer
    pub fn unmount(self) {
        drop(self);
    }

    /// Index currently shown, `None` when idle
    pub fn current_index(&self) -> Option<usize> {
        match &self.state {
            RotationState::Running { index, .. } => Some(*index),
            RotationState::Idle => None,
        }
    }

    pub fn state(&self) -> &RotationState {
        &self.state
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn interval(&self) -> RotationInterval {
        self.interval
    }

    pub fn policy(&self) -> TickPolicy {
        self.policy
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, RotationState::Running { .. })
    }

    /// Identifier of the live timer, if any
    pub fn timer_id(&self) -> Option<TimerId> {
        match &self.state {
            RotationState::Running { timer, .. } => Some(timer.id()),
            RotationState::Idle => None,
        }
    }

    /// When the next automatic advance is due
    pub fn next_deadline(&self) -> Option<Instant> {
        match &self.state {
            RotationState::Running { timer, .. } => timer.next_deadline(),
            RotationState::Idle => None,
        }
    }
}

impl Drop for RotationController {
    fn drop(&mut self) {
        if let RotationState::Running { timer, .. } =
            std::mem::replace(&mut self.state, RotationState::Idle)
        {
            debug!(id = %timer.id(), "Rotation controller dropped, cancelling timer");
            timer.cancel();
        }
    }
}
