//! Monotonic step counter threaded through every transform.

/// A counter stepped once per source element.
///
/// The runner owns a single instance and lends it to each transform as
/// `&mut Counter`, so every strategy observes the same `1..=N` sequence.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Counter {
    next: u64,
}

impl Counter {
    /// Create a counter at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment and return the new value. The first call returns 1.
    pub fn step(&mut self) -> u64 {
        self.next += 1;
        self.next
    }

    /// Set the counter back to zero.
    pub fn reset(&mut self) {
        self.next = 0;
    }

    /// Current value without stepping.
    #[must_use]
    pub fn value(&self) -> u64 {
        self.next
    }
}
