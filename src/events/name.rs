//! # Event names.
//!
//! The emitter is keyed by string, but the names this crate publishes itself form
//! a small closed set. [`EventName`] models both: well-known variants for the
//! closed set and [`EventName::Custom`] for anything else.
//!
//! Parsing is canonical, so `"viewport.resize"` and [`EventName::ViewportResize`]
//! address the same registry slot:
//!
//! ```rust
//! use boomerang::EventName;
//!
//! assert_eq!(EventName::from("viewport.resize"), EventName::ViewportResize);
//! assert_eq!(EventName::ViewportScroll.as_str(), "viewport.scroll");
//! assert!(!EventName::from("Random event").is_well_known());
//! ```

use std::fmt;
use std::sync::Arc;

/// Identifier of a class of notification.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EventName {
    /// Raw host resize (`"resize"`).
    Resize,
    /// Raw host scroll (`"scroll"`).
    Scroll,
    /// Viewport was re-measured (`"viewport.resize"`); payload is a
    /// [`ScreenViewport`](crate::ScreenViewport).
    ViewportResize,
    /// Vertical scroll offset changed (`"viewport.scroll"`); payload is the offset.
    ViewportScroll,
    /// Any other name.
    Custom(Arc<str>),
}

impl EventName {
    /// Literal key used by the registry and in diagnostics.
    pub fn as_str(&self) -> &str {
        match self {
            EventName::Resize => "resize",
            EventName::Scroll => "scroll",
            EventName::ViewportResize => "viewport.resize",
            EventName::ViewportScroll => "viewport.scroll",
            EventName::Custom(name) => name,
        }
    }

    /// True for every variant except [`EventName::Custom`].
    #[inline]
    pub fn is_well_known(&self) -> bool {
        !matches!(self, EventName::Custom(_))
    }

    /// True if the name is empty or whitespace only.
    #[inline]
    pub fn is_blank(&self) -> bool {
        self.as_str().trim().is_empty()
    }
}

impl From<&str> for EventName {
    fn from(name: &str) -> Self {
        match name {
            "resize" => EventName::Resize,
            "scroll" => EventName::Scroll,
            "viewport.resize" => EventName::ViewportResize,
            "viewport.scroll" => EventName::ViewportScroll,
            other => EventName::Custom(Arc::from(other)),
        }
    }
}

impl From<String> for EventName {
    fn from(name: String) -> Self {
        EventName::from(name.as_str())
    }
}

impl From<&EventName> for EventName {
    fn from(name: &EventName) -> Self {
        name.clone()
    }
}

impl fmt::Display for EventName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
