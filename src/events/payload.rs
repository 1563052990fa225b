//! # Event payloads.
//!
//! [`Payload`] is the default payload type of [`EventEmitter`](crate::EventEmitter).
//! Each well-known event carries a fixed variant:
//!
//! | Event              | Variant                         |
//! |--------------------|---------------------------------|
//! | `viewport.resize`  | [`Payload::Viewport`]           |
//! | `viewport.scroll`  | [`Payload::Scroll`]             |
//! | `resize`, `scroll` | [`Payload::Empty`]              |
//!
//! Custom events may use any variant.

use std::sync::Arc;

/// Visible rendering area at a point in time.
///
/// `x` is the width and `y` the height, in host pixels. A new value is produced
/// by every measurement; nothing keeps older snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ScreenViewport {
    /// Width.
    pub x: u32,
    /// Height.
    pub y: u32,
}

impl ScreenViewport {
    #[inline]
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn width(&self) -> u32 {
        self.x
    }

    #[inline]
    pub const fn height(&self) -> u32 {
        self.y
    }
}

/// Value passed unchanged from `emit` to every handler.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Payload {
    /// No arguments.
    #[default]
    Empty,
    /// A viewport snapshot.
    Viewport(ScreenViewport),
    /// Vertical scroll offset.
    Scroll(f64),
    /// Free-form text for custom events.
    Text(Arc<str>),
}

impl Payload {
    /// Returns the viewport snapshot if this is [`Payload::Viewport`].
    pub fn as_viewport(&self) -> Option<ScreenViewport> {
        match self {
            Payload::Viewport(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the scroll offset if this is [`Payload::Scroll`].
    pub fn as_scroll(&self) -> Option<f64> {
        match self {
            Payload::Scroll(offset) => Some(*offset),
            _ => None,
        }
    }

    /// Returns the text if this is [`Payload::Text`].
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Payload::Text(t) => Some(t),
            _ => None,
        }
    }
}

impl From<ScreenViewport> for Payload {
    fn from(v: ScreenViewport) -> Self {
        Payload::Viewport(v)
    }
}

impl From<f64> for Payload {
    fn from(offset: f64) -> Self {
        Payload::Scroll(offset)
    }
}

impl From<&str> for Payload {
    fn from(text: &str) -> Self {
        Payload::Text(Arc::from(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors_match_variant() {
        let v = Payload::from(ScreenViewport::new(1024, 768));
        assert_eq!(v.as_viewport().map(|s| s.width()), Some(1024));
        assert_eq!(v.as_scroll(), None);

        let s = Payload::from(42.5);
        assert_eq!(s.as_scroll(), Some(42.5));
        assert_eq!(s.as_viewport(), None);

        assert_eq!(Payload::from("hi").as_text(), Some("hi"));
        assert_eq!(Payload::default(), Payload::Empty);
    }
}
