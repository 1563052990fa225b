//! # Display metrics capability.
//!
//! [`DisplayMetrics`] is everything the tracker needs from its host: raw size
//! and scroll readings, presence of the window/document contexts, and a way to
//! register for resize/scroll notifications.
//!
//! ## Fallback rules
//! ```text
//! width  = inner_width   (if present and non-zero) else client_width  else 0
//! height = inner_height  (if present and non-zero) else client_height else 0
//! scroll = page_y_offset (if present and non-zero) else scroll_top    else 0.0
//! ```

use std::sync::Arc;

use crate::events::{EventName, ScreenViewport};

/// Raw host notification kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostEvent {
    Resize,
    Scroll,
}

impl HostEvent {
    pub fn as_str(&self) -> &'static str {
        match self {
            HostEvent::Resize => "resize",
            HostEvent::Scroll => "scroll",
        }
    }

    /// Emitter name of the raw notification (`resize` / `scroll`).
    pub fn event_name(&self) -> EventName {
        match self {
            HostEvent::Resize => EventName::Resize,
            HostEvent::Scroll => EventName::Scroll,
        }
    }
}

/// Callback registered with [`DisplayMetrics::listen`].
pub type HostCallback = Arc<dyn Fn() + Send + Sync>;

/// Live view of the hosting display environment.
///
/// Readings return `None` when the host cannot provide them.
pub trait DisplayMetrics: Send + Sync + 'static {
    /// True if the window context is reachable.
    fn has_window(&self) -> bool;

    /// True if the document context is reachable.
    fn has_document(&self) -> bool;

    fn inner_width(&self) -> Option<u32>;

    fn inner_height(&self) -> Option<u32>;

    /// Root element client width.
    fn client_width(&self) -> Option<u32>;

    /// Root element client height.
    fn client_height(&self) -> Option<u32>;

    /// Vertical page offset reported by the window.
    fn page_y_offset(&self) -> Option<f64>;

    /// Root element `scrollTop`.
    fn scroll_top(&self) -> Option<f64>;

    /// Registers `callback` for raw `event` notifications.
    fn listen(&self, event: HostEvent, callback: HostCallback);

    /// Current viewport, applying the inner → client fallback per dimension.
    fn viewport_size(&self) -> ScreenViewport {
        ScreenViewport {
            x: first_nonzero(self.inner_width(), self.client_width()),
            y: first_nonzero(self.inner_height(), self.client_height()),
        }
    }

    /// Current vertical scroll offset, applying the page offset → scrollTop fallback.
    fn scroll_offset(&self) -> f64 {
        match self.page_y_offset() {
            Some(y) if y != 0.0 && !y.is_nan() => y,
            _ => self.scroll_top().filter(|y| !y.is_nan()).unwrap_or(0.0),
        }
    }
}

fn first_nonzero(primary: Option<u32>, fallback: Option<u32>) -> u32 {
    match primary {
        Some(v) if v != 0 => v,
        _ => fallback.unwrap_or(0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_nonzero_fallbacks() {
        assert_eq!(first_nonzero(Some(800), Some(600)), 800);
        assert_eq!(first_nonzero(Some(0), Some(600)), 600);
        assert_eq!(first_nonzero(None, Some(600)), 600);
        assert_eq!(first_nonzero(None, None), 0);
    }

    #[test]
    fn test_host_event_names() {
        assert_eq!(HostEvent::Resize.event_name(), EventName::Resize);
        assert_eq!(HostEvent::Scroll.as_str(), "scroll");
    }
}
