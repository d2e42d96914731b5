//! Named timer table.

use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Running timers keyed by label.
#[derive(Debug, Default)]
pub struct Timers {
    running: HashMap<String, Instant>,
}

impl Timers {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start (or restart) the timer named `label`.
    pub fn start(&mut self, label: &str) {
        self.running.insert(label.to_string(), Instant::now());
    }

    /// Stop the timer named `label` and return the elapsed time.
    pub fn stop(&mut self, label: &str) -> Option<Duration> {
        self.running.remove(label).map(|started| started.elapsed())
    }
}
