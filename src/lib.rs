//! # boomerang
//!
//! **Boomerang** tracks the viewport size and scroll position of a host display
//! and republishes changes through a minimal synchronous publish/subscribe bus.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!   ┌────────────────────────────────┐
//!   │ Host (Arc<dyn DisplayMetrics>) │  readings: inner/client size, page offset, scrollTop
//!   │ resize / scroll notifications  │
//!   └──────┬──────────────────┬──────┘
//!          ▼                  ▼
//!    ┌───────────┐      ┌───────────┐
//!    │ Debouncer │      │ Debouncer │   (Timer: TokioTimer / ManualTimer)
//!    └─────┬─────┘      └─────┬─────┘
//!          ▼                  ▼
//! ┌───────────────────────────────────────────────────────┐
//! │  ViewportTracker                                      │
//! │  - handle_resize(): measure ─► emit viewport.resize   │
//! │  - handle_scroll(): offset  ─► emit viewport.scroll   │
//! │  - screen(): cache fed by its own viewport.resize sub │
//! └──────────────────────────┬────────────────────────────┘
//!                            ▼
//! ┌───────────────────────────────────────────────────────┐
//! │  EventEmitter (name → [handlers], synchronous)        │
//! │  - no handlers ─► warn "BoomerangWarning: <name>"     │
//! │  - panicking handler ─► caught, others still run      │
//! └──────────┬───────────────────┬───────────────┬────────┘
//!            ▼                   ▼               ▼
//!      tracker cache         LogWriter      user handlers
//! ```
//!
//! ## Features
//! | Area          | Description                                                  | Key types / traits                         |
//! |---------------|--------------------------------------------------------------|--------------------------------------------|
//! | **Emitter**   | String-keyed synchronous fan-out with duplicate handlers.    | [`EventEmitter`], [`Handler`], [`Dispatch`] |
//! | **Events**    | Well-known names and typed payloads.                         | [`EventName`], [`Payload`], [`ScreenViewport`] |
//! | **Host**      | Injectable display readings and notifications.               | [`DisplayMetrics`], [`ScriptedHost`]       |
//! | **Policies**  | Debounce with a pluggable clock.                             | [`Debouncer`], [`Timer`], [`ManualTimer`]  |
//! | **Tracking**  | Host → emitter bridge with a cached viewport.                | [`ViewportTracker`], [`TrackerConfig`]     |
//! | **Errors**    | Typed construction/subscription/dispatch errors.             | [`InitError`], [`SubscribeError`], [`EmitError`] |
//!
//! ## Optional features
//! - `logging`: exports a simple built-in [`LogWriter`] _(demo/reference only)_.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use boomerang::{EventEmitter, EventName, Payload};
//!
//! let events: EventEmitter = EventEmitter::new();
//! let h = events
//!     .on_fn("viewport.resize", |p: &Payload| {
//!         if let Some(v) = p.as_viewport() {
//!             println!("{}x{}", v.width(), v.height());
//!         }
//!     })
//!     .unwrap();
//!
//! // Same handler twice: invoked twice.
//! events.on(EventName::ViewportResize, Arc::clone(&h)).unwrap();
//! let out = events
//!     .emit(EventName::ViewportResize, &Payload::Viewport(boomerang::ScreenViewport::new(800, 600)))
//!     .unwrap();
//! assert_eq!(out.delivered(), 2);
//! ```
mod emitter;
mod error;
mod events;
mod host;
mod policies;
#[cfg(feature = "logging")]
mod subscribers;
mod tracker;

#[cfg(test)]
mod test_support;

// ---- Public re-exports ----

pub use emitter::{Dispatch, EventEmitter, Handler, WARNING_MARKER, into_handler};
pub use error::{EmitError, HandlerFailure, InitError, SubscribeError};
pub use events::{EventName, Payload, ScreenViewport};
pub use host::{DisplayMetrics, HostCallback, HostEvent, ScriptedHost};
pub use policies::{DebouncedAction, Debouncer, ManualTimer, Timer, TimerCallback, TimerHandle, TokioTimer};
pub use tracker::{TrackerBuilder, TrackerConfig, ViewportTracker};

// Optional: expose a simple built-in logging subscriber (demo/reference).
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use subscribers::LogWriter;
