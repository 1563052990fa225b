//! Host environment capability.
//!
//! The tracker never touches a global window/document. It reads through a
//! [`DisplayMetrics`] implementation injected at construction:
//!
//! ```text
//!   real host binding ──┐
//!                       ├──► Arc<dyn DisplayMetrics> ──► ViewportTracker
//!   ScriptedHost ───────┘       (readings + listen)
//! ```
//!
//! ## Contents
//! - [`DisplayMetrics`] readings, context presence, notification registration
//! - [`HostEvent`], [`HostCallback`] raw notification kinds and callbacks
//! - [`ScriptedHost`] in-memory implementation for tests and demos

mod metrics;
mod scripted;

pub use metrics::{DisplayMetrics, HostCallback, HostEvent};
pub use scripted::ScriptedHost;
