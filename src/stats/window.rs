//! Sliding-window smoothing with an incrementally maintained sum
//!
//! The window never retains more than `capacity` samples and every push is
//! O(1): the evicted sample is subtracted from a running i128 sum, so i64
//! inputs cannot overflow the accumulator at any realistic window size.

use std::collections::VecDeque;

/// Fixed-capacity sliding window over integer samples
#[derive(Debug, Clone)]
pub struct SlidingWindow {
    window: VecDeque<i64>,
    capacity: usize,
    sum: i128,
}

impl SlidingWindow {
    /// # Panics
    ///
    /// Panics if capacity is 0.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "Sliding window capacity must be > 0");
        Self {
            window: VecDeque::with_capacity(capacity),
            capacity,
            sum: 0,
        }
    }

    /// Push one sample; returns the window mean once the window is full
    pub fn push(&mut self, value: i64) -> Option<f64> {
        if self.window.len() == self.capacity {
            if let Some(evicted) = self.window.pop_front() {
                self.sum -= i128::from(evicted);
            }
        }
        self.window.push_back(value);
        self.sum += i128::from(value);

        (self.window.len() == self.capacity).then(|| self.sum as f64 / self.capacity as f64)
    }

    pub fn len(&self) -> usize {
        self.window.len()
    }

    pub fn is_empty(&self) -> bool {
        self.window.is_empty()
    }
}

/// Smooth a sequence with a sliding mean of `window` consecutive samples.
///
/// Returns one mean per full window, sliding by one sample: output length is
/// `len - window + 1`, or empty when the input is shorter than the window
/// (insufficient data, not an error).
///
/// # Panics
///
/// Panics if `window` is 0.
pub fn moving_average(samples: &[i64], window: usize) -> Vec<f64> {
    let mut sliding = SlidingWindow::new(window);
    let mut averages = Vec::with_capacity(samples.len().saturating_sub(window) + 1);
    for &value in samples {
        if let Some(mean) = sliding.push(value) {
            averages.push(mean);
        }
    }
    averages
}
