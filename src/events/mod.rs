//! Event data model: names and payloads.
//!
//! ## Contents
//! - [`EventName`] closed set of well-known names plus custom strings
//! - [`Payload`], [`ScreenViewport`] values passed through `emit`
//!
//! ## Quick reference
//! - **Publishers**: [`ViewportTracker`](crate::ViewportTracker) (`viewport.resize`,
//!   `viewport.scroll`), and anything holding an [`EventEmitter`](crate::EventEmitter).
//! - **Consumers**: handlers registered with `EventEmitter::on`; the tracker itself
//!   listens to `viewport.resize` to keep its cached snapshot.

mod name;
mod payload;

pub use name::EventName;
pub use payload::{Payload, ScreenViewport};
