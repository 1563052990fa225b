//! # ViewportTracker: host notifications → emitter events
//!
//! Re-measures the host on (debounced) resize/scroll notifications and publishes
//! the results through an [`EventEmitter`].
//!
//! ## Architecture
//! ```text
//! host "resize" ─► Debouncer ─(quiet)─► handle_resize() ─► emit("viewport.resize", Viewport)
//!                                                                  │
//!                                                   ┌──────────────┴─────────────┐
//!                                                   ▼                            ▼
//!                                        cache handler (screen())         user handlers
//!
//! host "scroll" ─► Debouncer ─(quiet)─► handle_scroll() ─► emit("viewport.scroll", Scroll(y))
//! ```
//!
//! Every raw host notification is also republished, undebounced, as `resize` /
//! `scroll` with [`Payload::Empty`], but only while that name has subscribers.
//!
//! ## Rules
//! - The cached [`ViewportTracker::screen`] changes **only** through the tracker's
//!   own `viewport.resize` handler.
//! - Host callbacks hold weak references; after drop they do nothing.
//! - Dispatch failures on the debounced path are logged, not propagated.

use std::fmt;
use std::sync::{Arc, Weak};

use parking_lot::RwLock;

use super::{TrackerBuilder, TrackerConfig};
use crate::{
    emitter::{Dispatch, EventEmitter, Handler},
    error::{EmitError, InitError},
    events::{EventName, Payload, ScreenViewport},
    host::{DisplayMetrics, HostEvent},
    policies::{Debouncer, Timer},
};

struct Inner {
    host: Arc<dyn DisplayMetrics>,
    events: EventEmitter,
}

impl Inner {
    fn handle_resize(&self) -> Result<Dispatch, EmitError> {
        let viewport = self.host.viewport_size();
        tracing::debug!(target: "boomerang", width = viewport.x, height = viewport.y, "viewport resize");
        self.events
            .emit(EventName::ViewportResize, &Payload::Viewport(viewport))
    }

    fn handle_scroll(&self) -> Result<Dispatch, EmitError> {
        let offset = self.host.scroll_offset();
        tracing::debug!(target: "boomerang", offset, "viewport scroll");
        self.events
            .emit(EventName::ViewportScroll, &Payload::Scroll(offset))
    }

    fn forward_raw(&self, event: HostEvent) {
        let name = event.event_name();
        if !self.events.has_listeners(name.clone()) {
            return;
        }
        if let Err(err) = self.events.emit(name, &Payload::Empty) {
            tracing::warn!(target: "boomerang", event = %err.event(), error = %err, "raw notification dispatch failed");
        }
    }
}

/// Tracks viewport size and scroll position of a host display.
pub struct ViewportTracker {
    inner: Arc<Inner>,
    screen: Arc<RwLock<ScreenViewport>>,
    cache_handler: Handler,
    resize: Arc<Debouncer>,
    scroll: Arc<Debouncer>,
    config: TrackerConfig,
}

impl ViewportTracker {
    /// Creates a tracker with default config, a fresh emitter and [`TokioTimer::ambient`](crate::TokioTimer::ambient).
    ///
    /// # Errors
    /// See [`TrackerBuilder::build`].
    pub fn new(host: Arc<dyn DisplayMetrics>) -> Result<Self, InitError> {
        TrackerBuilder::new(host).build()
    }

    /// Returns a builder for custom config, timer or emitter.
    pub fn builder(host: Arc<dyn DisplayMetrics>) -> TrackerBuilder {
        TrackerBuilder::new(host)
    }

    pub(super) fn bind(
        host: Arc<dyn DisplayMetrics>,
        events: EventEmitter,
        timer: Arc<dyn Timer>,
        config: TrackerConfig,
    ) -> Self {
        let screen = Arc::new(RwLock::new(host.viewport_size()));
        let inner = Arc::new(Inner {
            host: Arc::clone(&host),
            events,
        });

        let resize = Arc::new(debounced(
            &inner,
            config.resize_wait,
            &timer,
            Inner::handle_resize,
        ));
        let scroll = Arc::new(debounced(
            &inner,
            config.scroll_wait,
            &timer,
            Inner::handle_scroll,
        ));

        listen(host.as_ref(), HostEvent::Resize, &inner, &resize);
        listen(host.as_ref(), HostEvent::Scroll, &inner, &scroll);

        let cache = Arc::clone(&screen);
        let cache_handler: Handler = Arc::new(move |payload: &Payload| {
            if let Some(viewport) = payload.as_viewport() {
                *cache.write() = viewport;
            }
        });
        inner
            .events
            .register(EventName::ViewportResize, Arc::clone(&cache_handler));

        let initial = *screen.read();
        tracing::debug!(
            target: "boomerang",
            width = initial.x,
            height = initial.y,
            resize_wait = ?config.resize_wait,
            scroll_wait = ?config.scroll_wait,
            "viewport tracker bound"
        );

        Self {
            inner,
            screen,
            cache_handler,
            resize,
            scroll,
            config,
        }
    }

    /// Measures the host viewport now. No caching, no events.
    pub fn screen_viewport(&self) -> ScreenViewport {
        self.inner.host.viewport_size()
    }

    /// Reads the host vertical scroll offset now.
    pub fn scroll_offset(&self) -> f64 {
        self.inner.host.scroll_offset()
    }

    /// Re-measures and emits `viewport.resize` with the new snapshot.
    ///
    /// # Errors
    /// Propagates [`EmitError`] from the emitter.
    pub fn handle_resize(&self) -> Result<Dispatch, EmitError> {
        self.inner.handle_resize()
    }

    /// Reads the scroll offset and emits `viewport.scroll` with it.
    ///
    /// # Errors
    /// Propagates [`EmitError`] from the emitter.
    pub fn handle_scroll(&self) -> Result<Dispatch, EmitError> {
        self.inner.handle_scroll()
    }

    /// Last viewport published on `viewport.resize` (or measured at construction).
    pub fn screen(&self) -> ScreenViewport {
        *self.screen.read()
    }

    /// Emitter the tracker publishes on.
    pub fn events(&self) -> &EventEmitter {
        &self.inner.events
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// True if a debounced resize or scroll is waiting to run.
    pub fn is_pending(&self) -> bool {
        self.resize.is_pending() || self.scroll.is_pending()
    }

    /// Runs pending debounced calls now. Returns `true` if any ran.
    pub fn flush(&self) -> bool {
        let resized = self.resize.flush();
        let scrolled = self.scroll.flush();
        resized || scrolled
    }

    /// Drops pending debounced calls. Returns `true` if any was pending.
    pub fn cancel_pending(&self) -> bool {
        let resized = self.resize.cancel();
        let scrolled = self.scroll.cancel();
        resized || scrolled
    }
}

impl Drop for ViewportTracker {
    fn drop(&mut self) {
        self.cancel_pending();
        self.inner
            .events
            .off(EventName::ViewportResize, &self.cache_handler);
    }
}

impl fmt::Debug for ViewportTracker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewportTracker")
            .field("screen", &self.screen())
            .field("config", &self.config)
            .field("events", &self.inner.events)
            .finish()
    }
}

/// Debouncer whose action runs `handle` on the tracker, if it is still alive.
fn debounced(
    inner: &Arc<Inner>,
    wait: std::time::Duration,
    timer: &Arc<dyn Timer>,
    handle: fn(&Inner) -> Result<Dispatch, EmitError>,
) -> Debouncer {
    let weak: Weak<Inner> = Arc::downgrade(inner);
    Debouncer::new(wait, Arc::clone(timer), move || {
        let Some(inner) = weak.upgrade() else {
            return;
        };
        if let Err(err) = handle(&inner) {
            tracing::warn!(target: "boomerang", event = %err.event(), error = %err, "debounced dispatch failed");
        }
    })
}

/// Routes host `event` notifications to raw subscribers and into `debouncer`.
fn listen(
    host: &dyn DisplayMetrics,
    event: HostEvent,
    inner: &Arc<Inner>,
    debouncer: &Arc<Debouncer>,
) {
    let tracker = Arc::downgrade(inner);
    let weak = Arc::downgrade(debouncer);
    host.listen(
        event,
        Arc::new(move || {
            let Some(d) = weak.upgrade() else {
                return;
            };
            if let Some(inner) = tracker.upgrade() {
                inner.forward_raw(event);
            }
            d.schedule();
        }),
    );
}
