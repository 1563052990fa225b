//! Error types used by the emitter and the viewport tracker.
//!
//! This module defines three enums:
//!
//! - [`InitError`] the host context required by the tracker is missing.
//! - [`SubscribeError`] a subscription was rejected at registration time.
//! - [`EmitError`] one or more handlers panicked while an event was dispatched.
//!
//! A missing subscriber at emit time is **not** an error; it is a warning-level
//! diagnostic (see [`EventEmitter::emit`](crate::EventEmitter::emit)).
//!
//! All types provide helper methods (`as_label`, `as_message`) for logs/metrics.

use thiserror::Error;

use crate::events::EventName;

/// # Errors raised while constructing a [`ViewportTracker`](crate::ViewportTracker).
///
/// Construction is fail-fast: when one of these is returned no tracker exists,
/// no host listener was registered and no viewport events will be published.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InitError {
    /// The host exposes no window context.
    #[error("window is not found.")]
    WindowUnavailable,

    /// The host exposes no document context.
    #[error("document is not found.")]
    DocumentUnavailable,

    /// No runtime could be found or started for the default debounce timer.
    #[error("timer runtime is not available: {0}")]
    TimerUnavailable(String),
}

impl InitError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use boomerang::InitError;
    ///
    /// assert_eq!(InitError::WindowUnavailable.as_label(), "init_window_unavailable");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            InitError::WindowUnavailable => "init_window_unavailable",
            InitError::DocumentUnavailable => "init_document_unavailable",
            InitError::TimerUnavailable(_) => "init_timer_unavailable",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        format!("BoomerangError: {self}")
    }
}

/// # Errors raised by [`EventEmitter::on`](crate::EventEmitter::on).
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubscribeError {
    /// Event name was empty or contained only whitespace.
    #[error("event name must be a non-empty string")]
    EmptyName,
}

impl SubscribeError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    pub fn as_label(&self) -> &'static str {
        match self {
            SubscribeError::EmptyName => "subscribe_empty_name",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        self.to_string()
    }
}

/// A single handler that panicked during dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerFailure {
    /// Position of the handler in registration order (0-based).
    pub index: usize,
    /// Panic message, when the payload was a string.
    pub message: String,
}

/// # Errors raised by [`EventEmitter::emit`](crate::EventEmitter::emit).
///
/// Dispatch is catch-and-continue: every handler runs even if an earlier one
/// panicked, and the failures are reported together once delivery is over.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EmitError {
    /// At least one handler panicked.
    #[error("{} of {} handler(s) for '{event}' panicked", .failures.len(), .delivered + .failures.len())]
    HandlersPanicked {
        /// Event that was being dispatched.
        event: EventName,
        /// Number of handlers that returned normally.
        delivered: usize,
        /// Handlers that panicked, in invocation order.
        failures: Vec<HandlerFailure>,
    },
}

impl EmitError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use boomerang::{EmitError, EventName};
    ///
    /// let err = EmitError::HandlersPanicked {
    ///     event: EventName::ViewportResize,
    ///     delivered: 1,
    ///     failures: vec![],
    /// };
    /// assert_eq!(err.as_label(), "emit_handlers_panicked");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            EmitError::HandlersPanicked { .. } => "emit_handlers_panicked",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            EmitError::HandlersPanicked {
                event, failures, ..
            } => {
                let details: Vec<String> = failures
                    .iter()
                    .map(|f| format!("#{}: {}", f.index, f.message))
                    .collect();
                format!("event={event} panicked=[{}]", details.join(", "))
            }
        }
    }

    /// Event whose dispatch failed.
    pub fn event(&self) -> &EventName {
        match self {
            EmitError::HandlersPanicked { event, .. } => event,
        }
    }
}
