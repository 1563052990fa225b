//! # Synchronous event emitter.
//!
//! [`EventEmitter`] is the publish/subscribe core: a string-keyed registry of
//! ordered handler lists with synchronous, in-process dispatch.
//!
//! ## Architecture
//! ```text
//! ViewportTracker ── emit("viewport.resize", Viewport{..}) ──► EventEmitter
//!                                                                 │
//!                                         registry: name → [h1, h2, h1, ...]
//!                                                                 │
//!                          ┌──────────────────┬───────────────────┼──────────────┐
//!                          ▼                  ▼                   ▼              ▼
//!                   tracker cache          LogWriter           user h1        user h2
//! ```
//!
//! ## Contents
//! - [`EventEmitter`] registry + `on` / `on_fn` / `off` / `emit`
//! - [`Handler`], [`into_handler`] shared callback type and constructor
//! - [`Dispatch`] outcome of a successful `emit`
//! - [`WARNING_MARKER`] prefix of the no-subscriber diagnostic

mod bus;
mod handler;

pub use bus::{EventEmitter, WARNING_MARKER};
pub use handler::{Dispatch, Handler, into_handler};
