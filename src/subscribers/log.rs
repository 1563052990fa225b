//! # Simple logging subscriber for debugging and demos.
//!
//! [`LogWriter`] registers handlers on the viewport events that log them at
//! `info` level in a human-readable format.
//!
//! ## Output format
//! ```text
//! [resize] width=1024 height=768
//! [scroll] offset=250
//! ```
//!
//! ## Example
//! ```no_run
//! # use boomerang::{EventEmitter, LogWriter};
//! let events = EventEmitter::new();
//! let writer = LogWriter::attach(&events);
//! // ... later
//! writer.detach(&events);
//! ```

use std::sync::Arc;

use crate::emitter::{EventEmitter, Handler};
use crate::events::{EventName, Payload};

/// Logging subscriber for `viewport.resize` and `viewport.scroll`.
///
/// Enabled via the `logging` feature. Not intended for production use:
/// register your own handlers for structured logging or metrics.
pub struct LogWriter {
    resize: Handler,
    scroll: Handler,
}

impl LogWriter {
    /// Registers the logging handlers on `events`.
    pub fn attach(events: &EventEmitter) -> Self {
        let resize = logger(EventName::ViewportResize);
        let scroll = logger(EventName::ViewportScroll);
        events.register(EventName::ViewportResize, Arc::clone(&resize));
        events.register(EventName::ViewportScroll, Arc::clone(&scroll));
        Self { resize, scroll }
    }

    /// Removes the handlers added by [`attach`](Self::attach).
    pub fn detach(self, events: &EventEmitter) {
        events.off(EventName::ViewportResize, &self.resize);
        events.off(EventName::ViewportScroll, &self.scroll);
    }
}

fn logger(name: EventName) -> Handler {
    Arc::new(move |payload: &Payload| {
        if let Some(line) = describe(&name, payload) {
            tracing::info!(target: "boomerang", "{line}");
        }
    })
}

fn describe(name: &EventName, payload: &Payload) -> Option<String> {
    match (name, payload) {
        (EventName::ViewportResize, Payload::Viewport(v)) => {
            Some(format!("[resize] width={} height={}", v.x, v.y))
        }
        (EventName::ViewportScroll, Payload::Scroll(offset)) => {
            Some(format!("[scroll] offset={offset}"))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::ScreenViewport;
    use crate::test_support::LogCapture;

    #[test]
    fn test_describe_formats() {
        assert_eq!(
            describe(
                &EventName::ViewportResize,
                &Payload::Viewport(ScreenViewport::new(1024, 768))
            )
            .as_deref(),
            Some("[resize] width=1024 height=768")
        );
        assert_eq!(
            describe(&EventName::ViewportScroll, &Payload::Scroll(250.0)).as_deref(),
            Some("[scroll] offset=250")
        );
        assert_eq!(describe(&EventName::ViewportScroll, &Payload::Empty), None);
    }

    #[test]
    fn test_attach_logs_and_detach_removes() {
        let logs = LogCapture::default();
        let events = EventEmitter::new();
        let writer = LogWriter::attach(&events);

        logs.run(|| events.emit(EventName::ViewportScroll, &Payload::Scroll(12.0)))
            .unwrap();
        assert!(logs.contents().contains("[scroll] offset=12"));

        writer.detach(&events);
        assert!(events.event_names().is_empty());
    }
}
