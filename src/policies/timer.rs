//! # Timers for delayed, cancellable callbacks.
//!
//! [`Timer`] is the clock seam used by [`Debouncer`](crate::Debouncer). Two
//! implementations ship with the crate:
//!
//! - [`TokioTimer`] spawns a task on the tokio runtime that sleeps, then fires
//!   unless its [`TimerHandle`] was cancelled first. Outside any runtime it uses
//!   a shared current-thread runtime driven by a background thread.
//! - [`ManualTimer`] never sleeps: time moves only when [`ManualTimer::advance`]
//!   is called, which makes debounce behaviour deterministic in tests.
//!
//! ```text
//! start(delay, fire) ──► TimerHandle(token)
//!        │
//!        └─► select! { token.cancelled() => drop(fire),
//!                      sleep(delay)      => fire() }
//! ```

use std::fmt;
use std::io;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use parking_lot::Mutex;
use tokio_util::sync::CancellationToken;

/// Callback run once when a timer fires.
pub type TimerCallback = Box<dyn FnOnce() + Send + 'static>;

/// Handle to a started timer.
///
/// Cancelling is idempotent. Cloned handles control the same timer.
#[derive(Clone, Debug, Default)]
pub struct TimerHandle {
    token: CancellationToken,
}

impl TimerHandle {
    /// Creates a live (not cancelled) handle.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Prevents the timer from firing if it has not fired yet.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Token observed by the timer implementation.
    pub fn token(&self) -> &CancellationToken {
        &self.token
    }
}

/// Schedules a callback after a delay.
pub trait Timer: Send + Sync + 'static {
    /// Runs `fire` once after `delay` unless the returned handle is cancelled first.
    fn start(&self, delay: Duration, fire: TimerCallback) -> TimerHandle;
}

/// Timer backed by `tokio::time::sleep`.
///
/// Uses the runtime captured with [`TokioTimer::with_handle`], otherwise the
/// runtime of the calling thread, otherwise the shared background runtime.
#[derive(Clone, Debug, Default)]
pub struct TokioTimer {
    runtime: Option<tokio::runtime::Handle>,
}

impl TokioTimer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pins spawned timers to `runtime`.
    #[must_use]
    pub fn with_handle(runtime: tokio::runtime::Handle) -> Self {
        Self {
            runtime: Some(runtime),
        }
    }

    /// Pins spawned timers to the calling thread's runtime, or to the shared
    /// background runtime when the caller is not inside one.
    ///
    /// # Errors
    /// Returns the I/O error if the background runtime or its thread cannot be created.
    pub fn ambient() -> io::Result<Self> {
        let runtime = match tokio::runtime::Handle::try_current() {
            Ok(rt) => rt,
            Err(_) => background_runtime()?,
        };
        Ok(Self::with_handle(runtime))
    }
}

/// Handle of the lazily started runtime used when no tokio runtime is ambient.
///
/// The runtime lives on a dedicated thread that blocks on it for the life of the process.
fn background_runtime() -> io::Result<tokio::runtime::Handle> {
    static BACKGROUND: Mutex<Option<tokio::runtime::Handle>> = parking_lot::const_mutex(None);

    let mut slot = BACKGROUND.lock();
    if let Some(handle) = slot.as_ref() {
        return Ok(handle.clone());
    }

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;
    let handle = rt.handle().clone();
    thread::Builder::new()
        .name("boomerang-timer".into())
        .spawn(move || rt.block_on(std::future::pending::<()>()))?;

    tracing::debug!(target: "boomerang", "background timer runtime started");
    *slot = Some(handle.clone());
    Ok(handle)
}

impl Timer for TokioTimer {
    fn start(&self, delay: Duration, fire: TimerCallback) -> TimerHandle {
        let handle = TimerHandle::new();

        let runtime = match &self.runtime {
            Some(rt) => rt.clone(),
            None => match tokio::runtime::Handle::try_current() {
                Ok(rt) => rt,
                Err(_) => match background_runtime() {
                    Ok(rt) => rt,
                    Err(err) => {
                        tracing::error!(target: "boomerang", ?delay, error = %err, "no timer runtime; timer dropped");
                        handle.cancel();
                        return handle;
                    }
                },
            },
        };

        let token = handle.token.clone();
        runtime.spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {}
                _ = tokio::time::sleep(delay) => {
                    if !token.is_cancelled() {
                        fire();
                    }
                }
            }
        });
        handle
    }
}

struct ManualEntry {
    deadline: Duration,
    seq: u64,
    handle: TimerHandle,
    fire: TimerCallback,
}

#[derive(Default)]
struct ManualState {
    now: Duration,
    seq: u64,
    entries: Vec<ManualEntry>,
}

/// Deterministic timer driven by [`ManualTimer::advance`].
///
/// Timers that come due during an `advance` fire in deadline order (ties in
/// start order). Callbacks run without the internal lock held, so they may start
/// new timers; those fire within the same `advance` if they come due before its end.
#[derive(Clone, Default)]
pub struct ManualTimer {
    state: Arc<Mutex<ManualState>>,
}

impl ManualTimer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Time elapsed since creation.
    pub fn now(&self) -> Duration {
        self.state.lock().now
    }

    /// Number of timers that are neither fired nor cancelled.
    pub fn pending(&self) -> usize {
        self.state
            .lock()
            .entries
            .iter()
            .filter(|e| !e.handle.is_cancelled())
            .count()
    }

    /// Moves the clock forward by `by`, firing due timers. Returns how many fired.
    pub fn advance(&self, by: Duration) -> usize {
        let target = self.state.lock().now + by;
        let mut fired = 0;

        loop {
            let next = {
                let mut state = self.state.lock();
                state.entries.retain(|e| !e.handle.is_cancelled());
                let due = state
                    .entries
                    .iter()
                    .enumerate()
                    .filter(|(_, e)| e.deadline <= target)
                    .min_by_key(|(_, e)| (e.deadline, e.seq))
                    .map(|(i, _)| i);
                match due {
                    Some(i) => {
                        let entry = state.entries.swap_remove(i);
                        state.now = state.now.max(entry.deadline);
                        Some(entry)
                    }
                    None => {
                        state.now = target;
                        None
                    }
                }
            };

            match next {
                Some(entry) => {
                    entry.handle.cancel();
                    (entry.fire)();
                    fired += 1;
                }
                None => return fired,
            }
        }
    }
}

impl Timer for ManualTimer {
    fn start(&self, delay: Duration, fire: TimerCallback) -> TimerHandle {
        let handle = TimerHandle::new();
        let mut state = self.state.lock();
        state.seq += 1;
        let entry = ManualEntry {
            deadline: state.now + delay,
            seq: state.seq,
            handle: handle.clone(),
            fire,
        };
        state.entries.push(entry);
        handle
    }
}

impl fmt::Debug for ManualTimer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.lock();
        f.debug_struct("ManualTimer")
            .field("now", &state.now)
            .field("entries", &state.entries.len())
            .finish()
    }
}
