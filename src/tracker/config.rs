//! # Tracker configuration.
//!
//! Provides [`TrackerConfig`], the debounce settings used when the tracker binds
//! to host notifications.
//!
//! ## Sentinel values
//! - `resize_wait = 0s` → no debounce, every host resize is handled inline
//! - `scroll_wait = 0s` → no debounce, every host scroll is handled inline

use std::time::Duration;

/// Debounce settings for host notifications.
///
/// ## Field semantics
/// - `resize_wait`: quiet period after the last host resize before re-measuring
/// - `scroll_wait`: quiet period after the last host scroll before reading the offset
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrackerConfig {
    /// Quiet period for resize notifications (`0s` = no debounce).
    pub resize_wait: Duration,

    /// Quiet period for scroll notifications (`0s` = no debounce).
    pub scroll_wait: Duration,
}

impl TrackerConfig {
    /// Same quiet period for both notifications.
    #[must_use]
    pub fn uniform(wait: Duration) -> Self {
        Self {
            resize_wait: wait,
            scroll_wait: wait,
        }
    }

    /// Returns the resize quiet period as an `Option`.
    ///
    /// - `None` → resize is not debounced
    /// - `Some(d)` → trailing call `d` after the last notification
    #[inline]
    pub fn resize_debounce(&self) -> Option<Duration> {
        Some(self.resize_wait).filter(|d| !d.is_zero())
    }

    /// Returns the scroll quiet period as an `Option`.
    #[inline]
    pub fn scroll_debounce(&self) -> Option<Duration> {
        Some(self.scroll_wait).filter(|d| !d.is_zero())
    }
}

impl Default for TrackerConfig {
    /// Default configuration:
    ///
    /// - `resize_wait = 100ms`
    /// - `scroll_wait = 100ms`
    fn default() -> Self {
        Self::uniform(Duration::from_millis(100))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_wait_disables_debounce() {
        let cfg = TrackerConfig {
            resize_wait: Duration::ZERO,
            scroll_wait: Duration::from_millis(16),
        };
        assert_eq!(cfg.resize_debounce(), None);
        assert_eq!(cfg.scroll_debounce(), Some(Duration::from_millis(16)));
    }

    #[test]
    fn test_default_waits() {
        let cfg = TrackerConfig::default();
        assert_eq!(cfg.resize_debounce(), Some(Duration::from_millis(100)));
        assert_eq!(cfg.scroll_debounce(), Some(Duration::from_millis(100)));
    }
}
