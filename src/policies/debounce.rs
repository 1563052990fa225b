//! # Debounce: collapse bursts into one trailing call.
//!
//! [`Debouncer`] wraps an action and a [`Timer`]. Every [`Debouncer::schedule`]
//! cancels the pending call (if any) and starts a new one `wait` later, so only
//! the last call of a burst runs, after a quiet period.
//!
//! ```text
//! schedule  schedule      schedule
//!    │         │              │
//!    ▼         ▼              ▼
//!    ├──wait──x├────wait─────x├──────wait──────► action()
//!             (cancel)      (cancel)
//! ```
//!
//! ## Rules
//! - `wait == 0` disables debouncing: `schedule` runs the action inline.
//! - A superseded timer never runs the action, even if it was already firing.
//! - [`Debouncer::flush`] runs the pending call now; [`Debouncer::cancel`] drops it.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use std::time::Duration;
//! use boomerang::{Debouncer, ManualTimer};
//!
//! let clock = ManualTimer::new();
//! let calls = Arc::new(AtomicUsize::new(0));
//! let c = Arc::clone(&calls);
//! let debounced = Debouncer::new(Duration::from_millis(100), Arc::new(clock.clone()), move || {
//!     c.fetch_add(1, Ordering::SeqCst);
//! });
//!
//! debounced.schedule();
//! debounced.schedule();
//! debounced.schedule();
//! clock.advance(Duration::from_millis(100));
//! assert_eq!(calls.load(Ordering::SeqCst), 1);
//! ```

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use parking_lot::Mutex;

use super::timer::{Timer, TimerHandle};

/// Action run by a [`Debouncer`].
pub type DebouncedAction = Arc<dyn Fn() + Send + Sync>;

struct Pending {
    generation: u64,
    handle: TimerHandle,
}

#[derive(Default)]
struct State {
    /// Bumped by every schedule/cancel/flush; a timer fires only for its own generation.
    generation: AtomicU64,
    /// Last generation whose timer has fired.
    fired: AtomicU64,
    pending: Mutex<Option<Pending>>,
}

impl State {
    /// Marks `generation` as fired if it is still current.
    ///
    /// Checked under the `pending` lock, so exactly one of a firing timer and a
    /// concurrent `cancel`/`flush` wins the call.
    fn claim(&self, generation: u64) -> bool {
        let mut pending = self.pending.lock();
        if self.generation.load(Ordering::SeqCst) != generation {
            return false;
        }
        pending.take_if(|p| p.generation == generation);
        self.fired.store(generation, Ordering::SeqCst);
        true
    }
}

/// Trailing-edge debouncer.
pub struct Debouncer {
    wait: Duration,
    timer: Arc<dyn Timer>,
    action: DebouncedAction,
    state: Arc<State>,
}

impl Debouncer {
    /// Creates a debouncer running `action` after `wait` of quiet.
    pub fn new<F>(wait: Duration, timer: Arc<dyn Timer>, action: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        Self {
            wait,
            timer,
            action: Arc::new(action),
            state: Arc::new(State::default()),
        }
    }

    /// Quiet period.
    #[inline]
    pub fn wait(&self) -> Duration {
        self.wait
    }

    /// Restarts the quiet period; the action runs once it elapses.
    pub fn schedule(&self) {
        if self.wait.is_zero() {
            self.cancel();
            (self.action)();
            return;
        }

        let generation = {
            let mut pending = self.state.pending.lock();
            if let Some(prev) = pending.take() {
                prev.handle.cancel();
            }
            self.state.generation.fetch_add(1, Ordering::SeqCst) + 1
        };

        let state = Arc::clone(&self.state);
        let action = Arc::clone(&self.action);
        let handle = self.timer.start(
            self.wait,
            Box::new(move || {
                if !state.claim(generation) {
                    return;
                }
                tracing::trace!(target: "boomerang", generation, "debounce fired");
                action();
            }),
        );

        let mut pending = self.state.pending.lock();
        if self.state.fired.load(Ordering::SeqCst) != generation
            && self.state.generation.load(Ordering::SeqCst) == generation
        {
            *pending = Some(Pending { generation, handle });
        }
    }

    /// Drops the pending call. Returns `true` if one was pending.
    pub fn cancel(&self) -> bool {
        let mut pending = self.state.pending.lock();
        self.state.generation.fetch_add(1, Ordering::SeqCst);
        match pending.take() {
            Some(p) => {
                p.handle.cancel();
                true
            }
            None => false,
        }
    }

    /// Runs the pending call immediately. Returns `true` if one was pending.
    pub fn flush(&self) -> bool {
        if self.cancel() {
            (self.action)();
            true
        } else {
            false
        }
    }

    /// True while a trailing call is waiting to run.
    pub fn is_pending(&self) -> bool {
        self.state.pending.lock().is_some()
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl fmt::Debug for Debouncer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Debouncer")
            .field("wait", &self.wait)
            .field("pending", &self.is_pending())
            .finish()
    }
}
