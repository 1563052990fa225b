//! Rate-limiting policies for host notifications.
//!
//! This module groups the knobs that control **when** a burst of raw host
//! notifications turns into a tracker call.
//!
//! ## Contents
//! - [`Debouncer`] trailing-edge debounce with `schedule` / `cancel` / `flush`
//! - [`Timer`] clock seam, with [`TokioTimer`] (real time) and [`ManualTimer`] (tests)
//! - [`TimerHandle`] cancellation handle returned by `Timer::start`
//!
//! ## Quick wiring
//! ```text
//! host "resize" ──► Debouncer::schedule() ──(quiet period)──► ViewportTracker::handle_resize()
//! host "scroll" ──► Debouncer::schedule() ──(quiet period)──► ViewportTracker::handle_scroll()
//! ```
//!
//! ## Defaults
//! - `TrackerConfig::default()` → 100ms quiet period for both resize and scroll.
//! - `TokioTimer` is used unless the tracker builder is given another timer.

mod debounce;
mod timer;

pub use debounce::{DebouncedAction, Debouncer};
pub use timer::{ManualTimer, Timer, TimerCallback, TimerHandle, TokioTimer};
