//! Summary statistics via Trueno SIMD reductions

use serde::Serialize;
use trueno::Vector;

use crate::error::{Result, StatsError};

/// Mean/spread summary of a sample sequence
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SummaryStats {
    pub count: usize,
    pub mean: f32,
    pub stddev: f32,
    pub min: f32,
    pub max: f32,
}

/// Summarize integer samples (fails with `InsufficientData` when empty)
pub fn summarize(samples: &[i64]) -> Result<SummaryStats> {
    let as_f32: Vec<f32> = samples.iter().map(|&v| v as f32).collect();
    reduce(&as_f32)
}

/// Summarize a floating-point series, e.g. a smoothed sequence
pub fn summarize_f64(series: &[f64]) -> Result<SummaryStats> {
    let as_f32: Vec<f32> = series.iter().map(|&v| v as f32).collect();
    reduce(&as_f32)
}

fn reduce(values: &[f32]) -> Result<SummaryStats> {
    if values.is_empty() {
        return Err(StatsError::InsufficientData { needed: 1, got: 0 });
    }

    let v = Vector::from_slice(values);
    Ok(SummaryStats {
        count: values.len(),
        mean: v.mean().unwrap_or(0.0),
        stddev: v.stddev().unwrap_or(0.0),
        min: v.min().unwrap_or(0.0),
        max: v.max().unwrap_or(0.0),
    })
}
