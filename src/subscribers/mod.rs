//! # Built-in event subscribers.
//!
//! ## Architecture
//! ```text
//! ViewportTracker ── emit ──► EventEmitter ──┬──► tracker cache
//!                                            ├──► LogWriter (feature "logging")
//!                                            └──► user handlers
//! ```
//!
//! Subscribers here are plain emitter handlers; attaching one registers its
//! handlers, detaching removes exactly those registrations.

mod log;

pub use log::LogWriter;
