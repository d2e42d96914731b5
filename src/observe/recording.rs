//! In-memory sink.

use super::{Observer, Timers};
use std::time::Duration;

/// Something an observer was told.
#[derive(Debug, Clone, PartialEq)]
pub enum ObservedEvent {
    /// A timer finished.
    Timing {
        /// Timer label.
        label: String,
        /// Measured duration.
        elapsed: Duration,
    },
    /// `time_end` for a label that was never started.
    UnknownTimer {
        /// Timer label.
        label: String,
    },
    /// An assertion did not hold.
    AssertionFailed {
        /// Diagnostic message.
        message: String,
    },
}

/// Keeps every event in order.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    timers: Timers,
    events: Vec<ObservedEvent>,
}

impl RecordingObserver {
    /// Create an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All events so far.
    #[must_use]
    pub fn events(&self) -> &[ObservedEvent] {
        &self.events
    }

    /// Labels of finished timers, in order.
    pub fn timed_labels(&self) -> impl Iterator<Item = &str> {
        self.events.iter().filter_map(|e| match e {
            ObservedEvent::Timing { label, .. } => Some(label.as_str()),
            _ => None,
        })
    }

    /// Messages of failed assertions, in order.
    pub fn failures(&self) -> impl Iterator<Item = &str> {
        self.events.iter().filter_map(|e| match e {
            ObservedEvent::AssertionFailed { message } => Some(message.as_str()),
            _ => None,
        })
    }

    /// Drop recorded events.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl Observer for RecordingObserver {
    fn time(&mut self, label: &str) {
        self.timers.start(label);
    }

    fn time_end(&mut self, label: &str) -> Option<Duration> {
        let elapsed = self.timers.stop(label);
        self.events.push(match elapsed {
            Some(elapsed) => ObservedEvent::Timing {
                label: label.to_string(),
                elapsed,
            },
            None => ObservedEvent::UnknownTimer {
                label: label.to_string(),
            },
        });
        elapsed
    }

    fn assert(&mut self, condition: bool, message: &str) {
        if !condition {
            self.events.push(ObservedEvent::AssertionFailed {
                message: message.to_string(),
            });
        }
    }
}
