//! Linear-interpolation percentile computation
//!
//! trueno has no percentile primitive, so the rank interpolation is done
//! here over an explicitly sorted copy of the input.

use serde::Serialize;

use crate::error::{Result, StatsError};

/// Percentile points the benchmark reports use
pub const DEFAULT_PERCENTILES: [f64; 7] = [1.0, 5.0, 25.0, 50.0, 75.0, 95.0, 99.0];

/// One requested percentile point and its interpolated value
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Percentile {
    pub p: f64,
    pub value: f64,
}

/// Compute percentiles of integer samples at the requested points.
///
/// Fails with `InsufficientData` on an empty sequence and with
/// `InvalidPercentile` if any point lies outside [0, 100].
pub fn percentiles(samples: &[i64], points: &[f64]) -> Result<Vec<Percentile>> {
    let as_f64: Vec<f64> = samples.iter().map(|&v| v as f64).collect();
    percentiles_f64(&as_f64, points)
}

/// Compute percentiles of floating-point samples (e.g. a smoothed series).
pub fn percentiles_f64(samples: &[f64], points: &[f64]) -> Result<Vec<Percentile>> {
    if samples.is_empty() {
        return Err(StatsError::InsufficientData { needed: 1, got: 0 });
    }
    for &p in points {
        if !(0.0..=100.0).contains(&p) {
            return Err(StatsError::InvalidPercentile(p));
        }
    }

    let mut sorted = samples.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    Ok(points
        .iter()
        .map(|&p| Percentile {
            p,
            value: interpolate(&sorted, p),
        })
        .collect())
}

/// Value at percentile `p` of pre-sorted data, interpolating between the two
/// nearest ranks when the rank is fractional
fn interpolate(sorted: &[f64], p: f64) -> f64 {
    if sorted.len() == 1 {
        return sorted[0];
    }

    let rank = (p / 100.0) * (sorted.len() - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;

    if lower == upper || sorted[lower] == sorted[upper] {
        sorted[lower]
    } else {
        let weight = rank - lower as f64;
        sorted[lower] * (1.0 - weight) + sorted[upper] * weight
    }
}
