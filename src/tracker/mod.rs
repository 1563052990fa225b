//! # Viewport tracking.
//!
//! [`ViewportTracker`] bridges a [`DisplayMetrics`](crate::DisplayMetrics) host
//! into emitter events. It publishes two well-known names:
//!
//! | Event             | Payload                               | Source                         |
//! |-------------------|---------------------------------------|--------------------------------|
//! | `viewport.resize` | [`Payload::Viewport`](crate::Payload) | host resize, debounced         |
//! | `viewport.scroll` | [`Payload::Scroll`](crate::Payload)   | host scroll, debounced         |
//! | `resize`          | [`Payload::Empty`](crate::Payload)    | every host resize, if observed |
//! | `scroll`          | [`Payload::Empty`](crate::Payload)    | every host scroll, if observed |
//!
//! ## Lifecycle
//! ```text
//! TrackerBuilder::build()
//!   ├─► window?   no ─► Err(InitError::WindowUnavailable)
//!   ├─► document? no ─► Err(InitError::DocumentUnavailable)
//!   ├─► timer?    none given and no runtime ─► Err(InitError::TimerUnavailable)
//!   ├─► screen = host.viewport_size()
//!   ├─► host.listen(Resize, emit "resize" + debounce(handle_resize))
//!   ├─► host.listen(Scroll, emit "scroll" + debounce(handle_scroll))
//!   └─► events.on("viewport.resize", |v| screen = v)
//!
//! drop(tracker)
//!   ├─► cancel pending debounced calls
//!   └─► remove the cache handler from the emitter
//! ```
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use std::time::Duration;
//! use boomerang::{EventName, ManualTimer, Payload, ScriptedHost, ScreenViewport, TrackerConfig, ViewportTracker};
//!
//! let host = Arc::new(ScriptedHost::new().with_inner_size(800, 600));
//! let clock = ManualTimer::new();
//! let tracker = ViewportTracker::builder(host.clone())
//!     .with_timer(Arc::new(clock.clone()))
//!     .with_config(TrackerConfig::uniform(Duration::from_millis(100)))
//!     .build()
//!     .unwrap();
//!
//! tracker.events().on_fn(EventName::ViewportScroll, |p: &Payload| {
//!     assert_eq!(p.as_scroll(), Some(300.0));
//! }).unwrap();
//!
//! host.resize_to(1024, 768);
//! host.scroll_to(300.0);
//! clock.advance(Duration::from_millis(100));
//!
//! assert_eq!(tracker.screen(), ScreenViewport::new(1024, 768));
//! ```

mod builder;
mod config;
mod viewport;

pub use builder::TrackerBuilder;
pub use config::TrackerConfig;
pub use viewport::ViewportTracker;
