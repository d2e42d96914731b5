//! Structured-log sink.

use super::{Observer, Timers};
use std::time::Duration;
use tracing::{info, warn};

/// Emits timings and failed assertions as `tracing` events.
#[derive(Debug, Default)]
pub struct TracingObserver {
    timers: Timers,
}

impl TracingObserver {
    /// Create a new observer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Observer for TracingObserver {
    fn time(&mut self, label: &str) {
        self.timers.start(label);
    }

    fn time_end(&mut self, label: &str) -> Option<Duration> {
        match self.timers.stop(label) {
            Some(elapsed) => {
                info!(
                    label,
                    elapsed_ms = elapsed.as_secs_f64() * 1000.0,
                    "timer finished"
                );
                Some(elapsed)
            }
            None => {
                warn!(label, "timer does not exist");
                None
            }
        }
    }

    fn assert(&mut self, condition: bool, message: &str) {
        if !condition {
            warn!(message, "assertion failed");
        }
    }
}
