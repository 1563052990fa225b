//! # EventEmitter: synchronous string-keyed fan-out
//!
//! [`EventEmitter`] maps an [`EventName`] to the ordered list of handlers
//! registered under it and invokes them **synchronously** on `emit`.
//!
//! ## What it guarantees
//! - Handlers run in registration order, on the caller's thread, before `emit` returns.
//! - Registering the same handler N times invokes it N times.
//! - Emitting a name with no handlers logs `BoomerangWarning: <name>` once and returns normally.
//! - A panicking handler is caught and logged; the remaining handlers still run.
//!
//! ## What it does **not** guarantee
//! - No queueing or backpressure; no cross-thread delivery.
//! - No wildcard or namespaced matching: names are compared literally.
//!
//! ## Reentrancy
//! ```text
//!    emit(name, payload)
//!        ├─ read lock ─► snapshot Vec<Handler> ─► unlock
//!        ├─► h1(payload)  (may call on/emit/off: nested call completes first)
//!        ├─► h2(payload)
//!        └─► hN(payload)
//! ```
//! A handler added while a dispatch is in progress is first called by the next `emit`.
//!
//! ## Example
//! ```rust
//! use boomerang::{EventEmitter, EventName, Payload};
//!
//! let bus: EventEmitter = EventEmitter::new();
//! bus.on_fn(EventName::ViewportScroll, |p: &Payload| {
//!     assert_eq!(p.as_scroll(), Some(120.0));
//! })
//! .unwrap();
//!
//! let dispatch = bus.emit(EventName::ViewportScroll, &Payload::Scroll(120.0)).unwrap();
//! assert_eq!(dispatch.delivered(), 1);
//! ```

use std::collections::HashMap;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;

use parking_lot::RwLock;

use super::handler::{Dispatch, Handler, panic_message};
use crate::error::{EmitError, HandlerFailure, SubscribeError};
use crate::events::{EventName, Payload};

/// Marker prefixed to the no-subscriber diagnostic.
pub const WARNING_MARKER: &str = "BoomerangWarning";

type Registry<P> = HashMap<EventName, Vec<Handler<P>>>;

/// Synchronous publish/subscribe registry.
///
/// Cloning yields another handle to the **same** registry; [`EventEmitter::new`]
/// creates an isolated one.
pub struct EventEmitter<P = Payload> {
    registry: Arc<RwLock<Registry<P>>>,
}

impl<P> Clone for EventEmitter<P> {
    fn clone(&self) -> Self {
        Self {
            registry: Arc::clone(&self.registry),
        }
    }
}

impl<P> Default for EventEmitter<P> {
    fn default() -> Self {
        Self {
            registry: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl<P> std::fmt::Debug for EventEmitter<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let reg = self.registry.read();
        let mut names: Vec<(&str, usize)> =
            reg.iter().map(|(k, v)| (k.as_str(), v.len())).collect();
        names.sort_unstable();
        f.debug_struct("EventEmitter")
            .field("listeners", &names)
            .finish()
    }
}

impl<P: 'static> EventEmitter<P> {
    /// Creates an emitter with an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `handler` under `name`.
    ///
    /// Appends to the list for `name` (creating it on first use). Duplicates are kept.
    ///
    /// # Errors
    /// [`SubscribeError::EmptyName`] if `name` is empty or whitespace only.
    pub fn on(&self, name: impl Into<EventName>, handler: Handler<P>) -> Result<(), SubscribeError> {
        let name = name.into();
        if name.is_blank() {
            return Err(SubscribeError::EmptyName);
        }
        self.register(name, handler);
        Ok(())
    }

    /// Appends without validation; callers pass well-known names only.
    pub(crate) fn register(&self, name: EventName, handler: Handler<P>) {
        tracing::trace!(target: "boomerang", event = %name, "subscribe");
        self.registry.write().entry(name).or_default().push(handler);
    }

    /// Registers a closure and returns its [`Handler`] for a later [`off`](Self::off).
    ///
    /// # Errors
    /// Same as [`on`](Self::on).
    pub fn on_fn<F>(&self, name: impl Into<EventName>, f: F) -> Result<Handler<P>, SubscribeError>
    where
        F: Fn(&P) + Send + Sync + 'static,
    {
        let handler: Handler<P> = Arc::new(f);
        self.on(name, Arc::clone(&handler))?;
        Ok(handler)
    }

    /// Removes the **first** registration of `handler` under `name`.
    ///
    /// Returns `true` if a registration was removed. Other duplicates stay registered.
    pub fn off(&self, name: impl Into<EventName>, handler: &Handler<P>) -> bool {
        let name = name.into();
        let mut reg = self.registry.write();
        let Some(list) = reg.get_mut(&name) else {
            return false;
        };
        let Some(pos) = list.iter().position(|h| Arc::ptr_eq(h, handler)) else {
            return false;
        };
        list.remove(pos);
        if list.is_empty() {
            reg.remove(&name);
        }
        true
    }

    /// Invokes every handler registered under `name`, in registration order.
    ///
    /// With no handlers, logs `BoomerangWarning: <name>` at warn level and returns
    /// [`Dispatch::NoSubscribers`].
    ///
    /// # Errors
    /// [`EmitError::HandlersPanicked`] if any handler panicked. All handlers have
    /// still been invoked when this is returned.
    pub fn emit(&self, name: impl Into<EventName>, payload: &P) -> Result<Dispatch, EmitError> {
        let name = name.into();
        let snapshot: Vec<Handler<P>> = match self.registry.read().get(&name) {
            Some(list) if !list.is_empty() => list.clone(),
            _ => Vec::new(),
        };

        if snapshot.is_empty() {
            tracing::warn!(target: "boomerang", "{WARNING_MARKER}: {name}");
            return Ok(Dispatch::NoSubscribers);
        }

        tracing::debug!(target: "boomerang", event = %name, handlers = snapshot.len(), "dispatch");

        let mut failures = Vec::new();
        for (index, handler) in snapshot.iter().enumerate() {
            if let Err(panic) = catch_unwind(AssertUnwindSafe(|| handler(payload))) {
                let message = panic_message(panic.as_ref());
                tracing::error!(target: "boomerang", event = %name, index, %message, "handler panicked");
                failures.push(HandlerFailure { index, message });
            }
        }

        if failures.is_empty() {
            Ok(Dispatch::Delivered(snapshot.len()))
        } else {
            Err(EmitError::HandlersPanicked {
                event: name,
                delivered: snapshot.len() - failures.len(),
                failures,
            })
        }
    }

    /// Number of registrations under `name` (duplicates counted).
    pub fn listener_count(&self, name: impl Into<EventName>) -> usize {
        self.registry
            .read()
            .get(&name.into())
            .map_or(0, Vec::len)
    }

    /// True if at least one handler is registered under `name`.
    pub fn has_listeners(&self, name: impl Into<EventName>) -> bool {
        self.listener_count(name) > 0
    }

    /// Names with at least one registration, sorted.
    pub fn event_names(&self) -> Vec<EventName> {
        let mut names: Vec<EventName> = self.registry.read().keys().cloned().collect();
        names.sort_unstable();
        names
    }

    /// Drops every registration under `name`; returns how many were removed.
    pub fn clear(&self, name: impl Into<EventName>) -> usize {
        self.registry
            .write()
            .remove(&name.into())
            .map_or(0, |list| list.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emitter::into_handler;
    use crate::test_support::LogCapture;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counter() -> (Arc<AtomicUsize>, Handler) {
        let calls = Arc::new(AtomicUsize::new(0));
        let c = Arc::clone(&calls);
        let h = into_handler(move |_: &Payload| {
            c.fetch_add(1, Ordering::SeqCst);
        });
        (calls, h)
    }

    #[test]
    fn test_handler_called_once() {
        let bus: EventEmitter = EventEmitter::new();
        let (calls, h) = counter();

        bus.on(EventName::Resize, h).unwrap();
        let out = bus.emit(EventName::Resize, &Payload::Empty).unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(out, Dispatch::Delivered(1));
    }

    #[test]
    fn test_repeated_callback_invoked_per_registration() {
        let bus: EventEmitter = EventEmitter::new();
        let (calls, h) = counter();

        bus.on(EventName::Resize, Arc::clone(&h)).unwrap();
        bus.on(EventName::Resize, Arc::clone(&h)).unwrap();
        bus.on(EventName::Resize, h).unwrap();
        bus.emit(EventName::Resize, &Payload::Empty).unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 3);
        assert_eq!(bus.listener_count("resize"), 3);
    }

    #[test]
    fn test_multiple_events_are_independent() {
        let bus: EventEmitter = EventEmitter::new();
        let (calls1, h1) = counter();
        let (calls2, h2) = counter();

        bus.on(EventName::Resize, h1).unwrap();
        bus.on(EventName::Scroll, h2).unwrap();
        bus.emit(EventName::Resize, &Payload::Empty).unwrap();

        assert_eq!(calls1.load(Ordering::SeqCst), 1);
        assert_eq!(calls2.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_invocation_order_matches_subscription_order() {
        let bus: EventEmitter = EventEmitter::new();
        let seen = Arc::new(parking_lot::Mutex::new(Vec::new()));

        for id in 1..=3 {
            let seen = Arc::clone(&seen);
            bus.on_fn("ordered", move |_: &Payload| seen.lock().push(id))
                .unwrap();
        }
        bus.emit("ordered", &Payload::Empty).unwrap();

        assert_eq!(*seen.lock(), vec![1, 2, 3]);
    }

    #[test]
    fn test_payload_passed_through_unchanged() {
        let bus: EventEmitter = EventEmitter::new();
        let got = Arc::new(parking_lot::Mutex::new(None));
        let g = Arc::clone(&got);
        bus.on_fn(EventName::ViewportScroll, move |p: &Payload| {
            *g.lock() = Some(p.clone());
        })
        .unwrap();

        bus.emit("viewport.scroll", &Payload::Scroll(340.0)).unwrap();
        assert_eq!(*got.lock(), Some(Payload::Scroll(340.0)));
    }

    #[test]
    fn test_no_subscribers_warns_once_with_name() {
        let logs = LogCapture::default();
        let bus: EventEmitter = EventEmitter::new();

        let out = logs.run(|| bus.emit("Random event", &Payload::Empty));

        assert_eq!(out, Ok(Dispatch::NoSubscribers));
        assert_eq!(logs.count(WARNING_MARKER), 1);
        assert!(logs.contents().contains("Random event"));
        assert!(logs.contents().contains("WARN"));
    }

    #[test]
    fn test_subscribing_does_not_warn() {
        let logs = LogCapture::default();
        let bus: EventEmitter = EventEmitter::new();
        let (_, h) = counter();

        logs.run(|| bus.on("Random event", h)).unwrap();
        assert_eq!(logs.count(WARNING_MARKER), 0);
    }

    #[test]
    fn test_blank_name_rejected() {
        let bus: EventEmitter = EventEmitter::new();
        let (_, h) = counter();

        assert_eq!(bus.on("", Arc::clone(&h)), Err(SubscribeError::EmptyName));
        assert_eq!(bus.on("   ", h), Err(SubscribeError::EmptyName));
        assert!(bus.event_names().is_empty());
    }

    #[test]
    fn test_emitters_are_isolated() {
        let a: EventEmitter = EventEmitter::new();
        let b: EventEmitter = EventEmitter::new();
        let (calls, h) = counter();

        a.on(EventName::Resize, h).unwrap();
        let out = b.emit(EventName::Resize, &Payload::Empty).unwrap();

        assert_eq!(out, Dispatch::NoSubscribers);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_clones_share_registry() {
        let a: EventEmitter = EventEmitter::new();
        let b = a.clone();
        let (calls, h) = counter();

        a.on(EventName::Scroll, h).unwrap();
        b.emit(EventName::Scroll, &Payload::Empty).unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_panicking_handler_does_not_block_others() {
        let bus: EventEmitter = EventEmitter::new();
        let (calls, h) = counter();

        bus.on(EventName::Resize, Arc::clone(&h)).unwrap();
        bus.on_fn(EventName::Resize, |_: &Payload| panic!("boom"))
            .unwrap();
        bus.on(EventName::Resize, h).unwrap();

        let err = bus.emit(EventName::Resize, &Payload::Empty).unwrap_err();

        assert_eq!(calls.load(Ordering::SeqCst), 2);
        match err {
            EmitError::HandlersPanicked {
                event,
                delivered,
                failures,
            } => {
                assert_eq!(event, EventName::Resize);
                assert_eq!(delivered, 2);
                assert_eq!(
                    failures,
                    vec![HandlerFailure {
                        index: 1,
                        message: "boom".into()
                    }]
                );
            }
        }
    }

    #[test]
    fn test_off_removes_first_registration_only() {
        let bus: EventEmitter = EventEmitter::new();
        let (calls, h) = counter();

        bus.on(EventName::Scroll, Arc::clone(&h)).unwrap();
        bus.on(EventName::Scroll, Arc::clone(&h)).unwrap();

        assert!(bus.off(EventName::Scroll, &h));
        bus.emit(EventName::Scroll, &Payload::Empty).unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        assert!(bus.off(EventName::Scroll, &h));
        assert!(!bus.off(EventName::Scroll, &h));
        assert!(!bus.has_listeners(EventName::Scroll));
    }

    #[test]
    fn test_off_ignores_unregistered_handler() {
        let bus: EventEmitter = EventEmitter::new();
        let (_, registered) = counter();
        let (_, stranger) = counter();

        bus.on(EventName::Scroll, registered).unwrap();
        assert!(!bus.off(EventName::Scroll, &stranger));
        assert_eq!(bus.listener_count(EventName::Scroll), 1);
    }

    #[test]
    fn test_nested_emit_runs_to_completion_first() {
        let bus: EventEmitter = EventEmitter::new();
        let trace = Arc::new(parking_lot::Mutex::new(Vec::new()));

        let t = Arc::clone(&trace);
        bus.on_fn("inner", move |_: &Payload| t.lock().push("inner"))
            .unwrap();

        let t = Arc::clone(&trace);
        let nested = bus.clone();
        bus.on_fn("outer", move |_: &Payload| {
            t.lock().push("outer:start");
            nested.emit("inner", &Payload::Empty).unwrap();
            t.lock().push("outer:end");
        })
        .unwrap();

        let t = Arc::clone(&trace);
        bus.on_fn("outer", move |_: &Payload| t.lock().push("outer:second"))
            .unwrap();

        bus.emit("outer", &Payload::Empty).unwrap();
        assert_eq!(
            *trace.lock(),
            vec!["outer:start", "inner", "outer:end", "outer:second"]
        );
    }

    #[test]
    fn test_subscribe_during_dispatch_applies_to_next_emit() {
        let bus: EventEmitter = EventEmitter::new();
        let (calls, late) = counter();

        let inner = bus.clone();
        bus.on_fn("grow", move |_: &Payload| {
            inner.on("grow", Arc::clone(&late)).unwrap();
        })
        .unwrap();

        assert_eq!(bus.emit("grow", &Payload::Empty), Ok(Dispatch::Delivered(1)));
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        assert_eq!(bus.emit("grow", &Payload::Empty), Ok(Dispatch::Delivered(2)));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_custom_payload_type() {
        let bus: EventEmitter<u64> = EventEmitter::new();
        let sum = Arc::new(AtomicUsize::new(0));
        let s = Arc::clone(&sum);
        bus.on_fn("tick", move |n: &u64| {
            s.fetch_add(*n as usize, Ordering::SeqCst);
        })
        .unwrap();

        bus.emit("tick", &5).unwrap();
        bus.emit("tick", &7).unwrap();
        assert_eq!(sum.load(Ordering::SeqCst), 12);
    }

    #[test]
    fn test_event_names_and_clear() {
        let bus: EventEmitter = EventEmitter::new();
        let (_, h) = counter();
        bus.on(EventName::ViewportScroll, Arc::clone(&h)).unwrap();
        bus.on(EventName::ViewportResize, Arc::clone(&h)).unwrap();
        bus.on(EventName::ViewportResize, h).unwrap();

        assert_eq!(
            bus.event_names(),
            vec![EventName::ViewportResize, EventName::ViewportScroll]
        );
        assert_eq!(bus.clear(EventName::ViewportResize), 2);
        assert_eq!(bus.clear(EventName::ViewportResize), 0);
        assert_eq!(bus.event_names(), vec![EventName::ViewportScroll]);
    }
}
