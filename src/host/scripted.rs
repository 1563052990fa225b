//! # In-memory host.
//!
//! [`ScriptedHost`] implements [`DisplayMetrics`] over plain fields. Tests and
//! demos set readings directly and fire notifications by hand:
//!
//! ```rust
//! use boomerang::{DisplayMetrics, ScriptedHost, ScreenViewport};
//!
//! let host = ScriptedHost::new().with_inner_size(1280, 720);
//! assert_eq!(host.viewport_size(), ScreenViewport::new(1280, 720));
//!
//! host.set_inner_size(None, None);
//! host.set_client_size(Some(1024), Some(600));
//! assert_eq!(host.viewport_size(), ScreenViewport::new(1024, 600));
//! ```

use std::fmt;

use parking_lot::{Mutex, RwLock};

use super::metrics::{DisplayMetrics, HostCallback, HostEvent};

#[derive(Debug, Default, Clone, Copy)]
struct Readings {
    inner_width: Option<u32>,
    inner_height: Option<u32>,
    client_width: Option<u32>,
    client_height: Option<u32>,
    page_y_offset: Option<f64>,
    scroll_top: Option<f64>,
}

/// Scriptable [`DisplayMetrics`] implementation.
pub struct ScriptedHost {
    window: bool,
    document: bool,
    readings: RwLock<Readings>,
    listeners: Mutex<Vec<(HostEvent, HostCallback)>>,
}

impl Default for ScriptedHost {
    fn default() -> Self {
        Self {
            window: true,
            document: true,
            readings: RwLock::new(Readings::default()),
            listeners: Mutex::new(Vec::new()),
        }
    }
}

impl ScriptedHost {
    /// Host with window and document present and no readings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_inner_size(self, width: u32, height: u32) -> Self {
        self.set_inner_size(Some(width), Some(height));
        self
    }

    #[must_use]
    pub fn with_client_size(self, width: u32, height: u32) -> Self {
        self.set_client_size(Some(width), Some(height));
        self
    }

    /// Host without a window context.
    #[must_use]
    pub fn without_window(mut self) -> Self {
        self.window = false;
        self
    }

    /// Host without a document context.
    #[must_use]
    pub fn without_document(mut self) -> Self {
        self.document = false;
        self
    }

    pub fn set_inner_size(&self, width: Option<u32>, height: Option<u32>) {
        let mut r = self.readings.write();
        r.inner_width = width;
        r.inner_height = height;
    }

    pub fn set_client_size(&self, width: Option<u32>, height: Option<u32>) {
        let mut r = self.readings.write();
        r.client_width = width;
        r.client_height = height;
    }

    pub fn set_page_y_offset(&self, offset: Option<f64>) {
        self.readings.write().page_y_offset = offset;
    }

    pub fn set_scroll_top(&self, offset: Option<f64>) {
        self.readings.write().scroll_top = offset;
    }

    /// Sets the inner size and fires [`HostEvent::Resize`].
    pub fn resize_to(&self, width: u32, height: u32) -> usize {
        self.set_inner_size(Some(width), Some(height));
        self.fire(HostEvent::Resize)
    }

    /// Sets the page offset and fires [`HostEvent::Scroll`].
    pub fn scroll_to(&self, offset: f64) -> usize {
        self.set_page_y_offset(Some(offset));
        self.fire(HostEvent::Scroll)
    }

    /// Invokes every callback registered for `event`; returns how many ran.
    pub fn fire(&self, event: HostEvent) -> usize {
        let callbacks: Vec<HostCallback> = self
            .listeners
            .lock()
            .iter()
            .filter(|(e, _)| *e == event)
            .map(|(_, cb)| cb.clone())
            .collect();
        for cb in &callbacks {
            cb();
        }
        callbacks.len()
    }

    /// Number of callbacks registered for `event`.
    pub fn listener_count(&self, event: HostEvent) -> usize {
        self.listeners
            .lock()
            .iter()
            .filter(|(e, _)| *e == event)
            .count()
    }
}

impl DisplayMetrics for ScriptedHost {
    fn has_window(&self) -> bool {
        self.window
    }

    fn has_document(&self) -> bool {
        self.document
    }

    fn inner_width(&self) -> Option<u32> {
        self.readings.read().inner_width
    }

    fn inner_height(&self) -> Option<u32> {
        self.readings.read().inner_height
    }

    fn client_width(&self) -> Option<u32> {
        self.readings.read().client_width
    }

    fn client_height(&self) -> Option<u32> {
        self.readings.read().client_height
    }

    fn page_y_offset(&self) -> Option<f64> {
        self.readings.read().page_y_offset
    }

    fn scroll_top(&self) -> Option<f64> {
        self.readings.read().scroll_top
    }

    fn listen(&self, event: HostEvent, callback: HostCallback) {
        self.listeners.lock().push((event, callback));
    }
}

impl fmt::Debug for ScriptedHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScriptedHost")
            .field("window", &self.window)
            .field("document", &self.document)
            .field("readings", &*self.readings.read())
            .field("listeners", &self.listeners.lock().len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::ScreenViewport;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_inner_size_preferred_over_client() {
        let host = ScriptedHost::new()
            .with_inner_size(1440, 900)
            .with_client_size(1425, 880);
        assert_eq!(host.viewport_size(), ScreenViewport::new(1440, 900));
    }

    #[test]
    fn test_zero_inner_dimension_falls_back_per_axis() {
        let host = ScriptedHost::new().with_client_size(1000, 500);
        host.set_inner_size(Some(0), Some(700));
        assert_eq!(host.viewport_size(), ScreenViewport::new(1000, 700));
    }

    #[test]
    fn test_scroll_offset_fallbacks() {
        let host = ScriptedHost::new();
        assert_eq!(host.scroll_offset(), 0.0);

        host.set_scroll_top(Some(75.0));
        assert_eq!(host.scroll_offset(), 75.0);

        host.set_page_y_offset(Some(120.0));
        assert_eq!(host.scroll_offset(), 120.0);

        host.set_page_y_offset(Some(0.0));
        assert_eq!(host.scroll_offset(), 75.0);
    }

    #[test]
    fn test_fire_only_matching_listeners() {
        let host = ScriptedHost::new();
        let hits = Arc::new(AtomicUsize::new(0));
        let h = Arc::clone(&hits);
        host.listen(
            HostEvent::Scroll,
            Arc::new(move || {
                h.fetch_add(1, Ordering::SeqCst);
            }),
        );

        assert_eq!(host.fire(HostEvent::Resize), 0);
        assert_eq!(host.scroll_to(10.0), 1);
        assert_eq!(hits.load(Ordering::SeqCst), 1);
        assert_eq!(host.listener_count(HostEvent::Scroll), 1);
    }
}
