//! Equal-width histogram binning
//!
//! Produces the frequency counts a renderer needs for distribution plots;
//! drawing itself stays outside this crate.

use serde::Serialize;

use crate::error::{Result, StatsError};

/// Per-bin sample counts over equal-width bins spanning [min, max]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Histogram {
    pub min: f64,
    pub max: f64,
    pub counts: Vec<u64>,
}

impl Histogram {
    pub fn bin_width(&self) -> f64 {
        (self.max - self.min) / self.counts.len() as f64
    }

    /// Lower edge of bin `i`
    pub fn edge(&self, i: usize) -> f64 {
        self.min + self.bin_width() * i as f64
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }
}

/// Count samples into `bins` equal-width bins over [min, max].
///
/// Samples outside the range are excluded, matching the renderer's clipped
/// axes. The top edge is inclusive so a sample at exactly `max` lands in the
/// last bin.
///
/// # Panics
///
/// Panics if `bins` is 0 or the range is empty.
pub fn histogram(samples: &[i64], min: f64, max: f64, bins: usize) -> Result<Histogram> {
    assert!(bins > 0, "Histogram bin count must be > 0");
    assert!(max > min, "Histogram range must be non-empty");
    if samples.is_empty() {
        return Err(StatsError::InsufficientData { needed: 1, got: 0 });
    }

    let width = (max - min) / bins as f64;
    let mut counts = vec![0u64; bins];
    for &sample in samples {
        let v = sample as f64;
        if v < min || v > max {
            continue;
        }
        // Clamp guards against the quotient rounding up to `bins` for a
        // sample one ulp below max when `width` rounds down
        let idx = if v >= max {
            bins - 1
        } else {
            (((v - min) / width) as usize).min(bins - 1)
        };
        counts[idx] += 1;
    }

    Ok(Histogram { min, max, counts })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_histogram_basic() {
        let h = histogram(&[0, 1, 5, 9], 0.0, 10.0, 2).unwrap();
        assert_eq!(h.counts, vec![3, 1]);
        assert_eq!(h.total(), 4);
    }

    #[test]
    fn test_histogram_excludes_out_of_range() {
        let h = histogram(&[-5, 0, 5, 15], 0.0, 10.0, 1).unwrap();
        assert_eq!(h.counts, vec![2]);
    }

    #[test]
    fn test_histogram_max_lands_in_last_bin() {
        let h = histogram(&[10], 0.0, 10.0, 5).unwrap();
        assert_eq!(h.counts, vec![0, 0, 0, 0, 1]);
    }

    #[test]
    fn test_histogram_edges() {
        let h = histogram(&[1], 0.0, 5000.0, 500).unwrap();
        assert_eq!(h.bin_width(), 10.0);
        assert_eq!(h.edge(0), 0.0);
        assert_eq!(h.edge(500), 5000.0);
    }

    #[test]
    fn test_histogram_near_max_samples_stay_in_range() {
        // Fractional bin widths across many range/bin combinations: a
        // sample just below max must always land in the last bin, never
        // index past it
        for bins in 1..50 {
            for max in [10.0, 100.0, 5000.0, 18000.0] {
                let sample = max as i64 - 1;
                let h = histogram(&[sample], 0.0, max, bins).unwrap();
                assert_eq!(h.total(), 1);
            }
        }
    }

    #[test]
    fn test_histogram_empty_is_an_error() {
        assert_eq!(
            histogram(&[], 0.0, 10.0, 4).unwrap_err(),
            StatsError::InsufficientData { needed: 1, got: 0 }
        );
    }

    #[test]
    #[should_panic(expected = "Histogram bin count must be > 0")]
    fn test_zero_bins_panics() {
        let _ = histogram(&[1], 0.0, 10.0, 0);
    }

    #[test]
    #[should_panic(expected = "Histogram range must be non-empty")]
    fn test_empty_range_panics() {
        let _ = histogram(&[1], 10.0, 10.0, 4);
    }
}
