//! Ordinary-least-squares trend fitting over an index-addressed series

use serde::Serialize;

use crate::error::{Result, StatsError};

/// Best-fit line `value = slope * index + intercept`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Trend {
    pub slope: f64,
    pub intercept: f64,
}

impl Trend {
    /// Fitted value at position `x`
    pub fn at(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Fit a least-squares line to `series[i]` against `i`.
///
/// Fails with `InsufficientData` for fewer than 2 points. Uses centered
/// sums in f64, so the denominator is strictly positive whenever the fit is
/// defined.
pub fn linear_trend(series: &[f64]) -> Result<Trend> {
    if series.len() < 2 {
        return Err(StatsError::InsufficientData {
            needed: 2,
            got: series.len(),
        });
    }

    let n = series.len() as f64;
    let mean_x = (series.len() - 1) as f64 / 2.0;
    let mean_y = series.iter().sum::<f64>() / n;

    let (mut num, mut den) = (0.0, 0.0);
    for (i, &y) in series.iter().enumerate() {
        let dx = i as f64 - mean_x;
        num += dx * (y - mean_y);
        den += dx * dx;
    }

    let slope = num / den;
    Ok(Trend {
        slope,
        intercept: mean_y - slope * mean_x,
    })
}
