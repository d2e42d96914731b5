//! # Observability
//!
//! The runner reports through an [`Observer`]: named timers started and
//! stopped around each test, and a non-fatal assertion for the length check.
//!
//! ## Sinks
//!
//! - [`ConsoleObserver`]: `label: 1.234ms` lines on stdout, assertion failures on stderr
//! - [`TracingObserver`]: structured `tracing` events
//! - [`RecordingObserver`]: in-memory event log, used by tests and reports

mod console;
mod recording;
mod timers;
mod traced;

pub use console::ConsoleObserver;
pub use recording::{ObservedEvent, RecordingObserver};
pub use timers::Timers;
pub use traced::TracingObserver;

use std::time::Duration;

/// Timing and assertion sink.
pub trait Observer {
    /// Start a timer named `label`, replacing any running timer of that name.
    fn time(&mut self, label: &str);

    /// Stop the timer named `label` and report it.
    ///
    /// Returns `None` if no such timer was running.
    fn time_end(&mut self, label: &str) -> Option<Duration>;

    /// Report `message` when `condition` is false. Never panics.
    fn assert(&mut self, condition: bool, message: &str);
}

impl<O: Observer + ?Sized> Observer for &mut O {
    fn time(&mut self, label: &str) {
        (**self).time(label);
    }

    fn time_end(&mut self, label: &str) -> Option<Duration> {
        (**self).time_end(label)
    }

    fn assert(&mut self, condition: bool, message: &str) {
        (**self).assert(condition, message);
    }
}

impl<O: Observer + ?Sized> Observer for Box<O> {
    fn time(&mut self, label: &str) {
        (**self).time(label);
    }

    fn time_end(&mut self, label: &str) -> Option<Duration> {
        (**self).time_end(label)
    }

    fn assert(&mut self, condition: bool, message: &str) {
        (**self).assert(condition, message);
    }
}

/// Format a duration the way `console.timeEnd` does.
pub(crate) fn format_millis(elapsed: Duration) -> String {
    format!("{:.3}ms", elapsed.as_secs_f64() * 1000.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exercise(observer: &mut dyn Observer) -> Option<Duration> {
        observer.time("t");
        observer.assert(false, "boom");
        observer.time_end("t")
    }

    #[test]
    fn test_dyn_and_boxed_observers() {
        let mut boxed: Box<dyn Observer> = Box::new(RecordingObserver::new());
        assert!(exercise(&mut boxed).is_some());

        let mut recorder = RecordingObserver::new();
        let mut by_ref = &mut recorder;
        assert!(exercise(&mut by_ref).is_some());
        assert_eq!(recorder.failures().count(), 1);
    }

    #[test]
    fn test_format_millis() {
        assert_eq!(format_millis(Duration::from_micros(1500)), "1.500ms");
        assert_eq!(format_millis(Duration::ZERO), "0.000ms");
    }
}
