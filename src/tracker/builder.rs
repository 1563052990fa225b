use std::sync::Arc;

use super::{TrackerConfig, ViewportTracker};
use crate::{
    emitter::EventEmitter,
    error::InitError,
    host::DisplayMetrics,
    policies::{Timer, TokioTimer},
};

/// Builder for constructing a [`ViewportTracker`] with optional collaborators.
pub struct TrackerBuilder {
    host: Arc<dyn DisplayMetrics>,
    config: TrackerConfig,
    timer: Option<Arc<dyn Timer>>,
    events: Option<EventEmitter>,
}

impl TrackerBuilder {
    /// Creates a new builder reading from `host`.
    pub fn new(host: Arc<dyn DisplayMetrics>) -> Self {
        Self {
            host,
            config: TrackerConfig::default(),
            timer: None,
            events: None,
        }
    }

    /// Sets the debounce configuration.
    pub fn with_config(mut self, config: TrackerConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the timer driving the debouncers.
    ///
    /// Defaults to [`TokioTimer::ambient`]: the caller's tokio runtime, or a
    /// shared background runtime when `build` runs outside one.
    pub fn with_timer(mut self, timer: Arc<dyn Timer>) -> Self {
        self.timer = Some(timer);
        self
    }

    /// Publishes through an existing emitter instead of a fresh one.
    ///
    /// The tracker's own cache handler is added to that emitter and removed
    /// again when the tracker is dropped.
    pub fn with_emitter(mut self, events: EventEmitter) -> Self {
        self.events = Some(events);
        self
    }

    /// Builds the tracker.
    ///
    /// This consumes the builder and, in order:
    /// - checks the host window, then document, context
    /// - measures the initial viewport
    /// - binds debounced host resize/scroll listeners
    /// - subscribes the cache to `viewport.resize`
    ///
    /// # Errors
    /// [`InitError::WindowUnavailable`] or [`InitError::DocumentUnavailable`];
    /// nothing is registered with the host in that case.
    /// [`InitError::TimerUnavailable`] if no timer was given and the default
    /// one has no runtime to run on.
    pub fn build(self) -> Result<ViewportTracker, InitError> {
        if !self.host.has_window() {
            return Err(InitError::WindowUnavailable);
        }
        if !self.host.has_document() {
            return Err(InitError::DocumentUnavailable);
        }

        let timer = match self.timer {
            Some(timer) => timer,
            None => {
                let timer = TokioTimer::ambient()
                    .map_err(|err| InitError::TimerUnavailable(err.to_string()))?;
                Arc::new(timer) as Arc<dyn Timer>
            }
        };
        let events = self.events.unwrap_or_default();

        Ok(ViewportTracker::bind(self.host, events, timer, self.config))
    }
}
