//! Bounded trailing window of numeric samples for charting.

use std::collections::VecDeque;

/// A fixed-capacity trailing window of the most recent numeric samples.
///
/// Presentation layers keep one of these per charted metric (latency,
/// memory) and push the matching field of every published
/// [`crate::PollResult`]. Once full, the oldest sample is dropped first.
/// The poller itself retains no history.
#[derive(Debug, Clone)]
pub struct MetricsWindow {
    samples: VecDeque<f64>,
    capacity: usize,
}

impl MetricsWindow {
    /// Creates an empty window holding at most `capacity` samples.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "window capacity must be non-zero");
        Self {
            samples: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Appends a sample, dropping the oldest one if the window is full.
    ///
    /// NaN samples (the no-data sentinel) are stored as-is so charts can
    /// render a gap rather than a fake zero.
    pub fn push(&mut self, sample: f64) {
        if self.samples.len() == self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(sample);
    }

    /// Returns the samples from oldest to newest.
    #[must_use]
    pub fn samples(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().copied()
    }

    /// Number of samples currently held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns `true` if no samples have been pushed yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// The maximum number of samples retained.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
