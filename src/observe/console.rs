//! Plain console sink.

use super::{format_millis, Observer, Timers};
use std::io::Write;
use std::time::Duration;

/// Writes timings to one stream and diagnostics to another.
///
/// Defaults to stdout and stderr.
pub struct ConsoleObserver<W = std::io::Stdout, E = std::io::Stderr> {
    timers: Timers,
    out: W,
    err: E,
}

impl ConsoleObserver {
    /// Observer printing to stdout/stderr.
    #[must_use]
    pub fn new() -> Self {
        Self::with_writers(std::io::stdout(), std::io::stderr())
    }
}

impl Default for ConsoleObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write, E: Write> ConsoleObserver<W, E> {
    /// Observer printing to the given writers.
    pub fn with_writers(out: W, err: E) -> Self {
        Self {
            timers: Timers::new(),
            out,
            err,
        }
    }

    /// Give back the writers.
    pub fn into_writers(self) -> (W, E) {
        (self.out, self.err)
    }
}

impl<W: Write, E: Write> Observer for ConsoleObserver<W, E> {
    fn time(&mut self, label: &str) {
        self.timers.start(label);
    }

    fn time_end(&mut self, label: &str) -> Option<Duration> {
        let elapsed = self.timers.stop(label);
        // Console output is best effort; a closed pipe must not abort the run.
        let _ = match elapsed {
            Some(d) => writeln!(self.out, "{}: {}", label, format_millis(d)),
            None => writeln!(self.err, "Warning: Timer '{}' does not exist", label),
        };
        elapsed
    }

    fn assert(&mut self, condition: bool, message: &str) {
        if !condition {
            let _ = writeln!(self.err, "Assertion failed: {}", message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writes_timing_line() {
        let mut observer = ConsoleObserver::with_writers(Vec::new(), Vec::new());
        observer.time("Simple");
        assert!(observer.time_end("Simple").is_some());
        observer.assert(true, "never shown");

        let (out, err) = observer.into_writers();
        let out = String::from_utf8(out).unwrap();
        assert!(out.starts_with("Simple: "));
        assert!(out.trim_end().ends_with("ms"));
        assert!(err.is_empty());
    }

    #[test]
    fn test_failed_assertion_goes_to_err() {
        let mut observer = ConsoleObserver::with_writers(Vec::new(), Vec::new());
        observer.assert(false, "Simple did not return the correct number of results");

        let (out, err) = observer.into_writers();
        assert!(out.is_empty());
        assert_eq!(
            String::from_utf8(err).unwrap(),
            "Assertion failed: Simple did not return the correct number of results\n"
        );
    }

    #[test]
    fn test_unknown_timer_warns() {
        let mut observer = ConsoleObserver::with_writers(Vec::new(), Vec::new());
        assert!(observer.time_end("nope").is_none());
        let (_, err) = observer.into_writers();
        assert!(String::from_utf8(err).unwrap().contains("Timer 'nope' does not exist"));
    }
}
