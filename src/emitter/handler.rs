//! # Handler type and dispatch outcome.
//!
//! A [`Handler`] is a shared callback. Its identity is the identity of the `Arc`:
//! registering the same `Handler` twice yields two registrations of the same
//! callback, and [`EventEmitter::off`](crate::EventEmitter::off) matches by
//! pointer equality.

use std::any::Any;
use std::sync::Arc;

use crate::events::Payload;

/// Shared callback invoked with a reference to the emitted payload.
pub type Handler<P = Payload> = Arc<dyn Fn(&P) + Send + Sync>;

/// Wraps a closure into a [`Handler`].
///
/// Useful when the same callback has to be registered more than once or later
/// removed with `off`.
pub fn into_handler<P, F>(f: F) -> Handler<P>
where
    F: Fn(&P) + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Result of a successful [`EventEmitter::emit`](crate::EventEmitter::emit).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// Every registered handler ran; carries the number of invocations.
    Delivered(usize),
    /// Nothing was registered for the name; a warning was logged.
    NoSubscribers,
}

impl Dispatch {
    /// Number of handlers invoked.
    #[inline]
    pub fn delivered(&self) -> usize {
        match self {
            Dispatch::Delivered(n) => *n,
            Dispatch::NoSubscribers => 0,
        }
    }
}

/// Best-effort extraction of a panic payload message.
pub(crate) fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&'static str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panic_message_variants() {
        let a: Box<dyn Any + Send> = Box::new("static");
        let b: Box<dyn Any + Send> = Box::new(String::from("owned"));
        let c: Box<dyn Any + Send> = Box::new(7_u8);
        assert_eq!(panic_message(a.as_ref()), "static");
        assert_eq!(panic_message(b.as_ref()), "owned");
        assert_eq!(panic_message(c.as_ref()), "unknown panic");
    }

    #[test]
    fn test_dispatch_delivered_count() {
        assert_eq!(Dispatch::Delivered(3).delivered(), 3);
        assert_eq!(Dispatch::NoSubscribers.delivered(), 0);
    }
}
