//! Per-group analysis pipelines
//!
//! Ties the parsers to the statistical reductions and produces the report
//! structures the output formatters consume. The simple pipeline reports
//! percentiles of raw samples; the tagged pipeline smooths each operation's
//! series first and optionally fits a trend over the smoothed values, which
//! is what the downstream time-series charts plot.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::parse;
use crate::stats::{self, Histogram, Percentile, SummaryStats, Trend};

/// Knobs shared by both pipelines
#[derive(Debug, Clone)]
pub struct AnalysisOptions {
    /// Moving-average window for the tagged pipeline
    pub window: usize,
    /// Fit a least-squares trend over each smoothed series
    pub trend: bool,
    /// Include mean/stddev/min/max in reports
    pub extended: bool,
    /// Histogram counts over [0, max], when requested
    pub histogram: Option<HistogramSpec>,
}

#[derive(Debug, Clone, Copy)]
pub struct HistogramSpec {
    pub bins: usize,
    pub max: f64,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            window: 1000,
            trend: false,
            extended: false,
            histogram: None,
        }
    }
}

/// Report for one group of the simple (one integer per line) format
#[derive(Debug, Clone, Serialize)]
pub struct GroupReport {
    pub group: String,
    pub samples: usize,
    pub percentiles: Vec<Percentile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<SummaryStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub histogram: Option<Histogram>,
}

/// Report for one operation's smoothed series in the tagged format
#[derive(Debug, Clone, Serialize)]
pub struct OperationReport {
    pub group: String,
    pub operation: &'static str,
    pub smoothed_len: usize,
    pub percentiles: Vec<Percentile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<SummaryStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trend: Option<Trend>,
}

/// Analyze one simple-format file. Parse failures are fatal for the run:
/// a simple-format file with garbage in a retained line is corrupt, not
/// noisy.
pub fn analyze_simple(group: &str, path: &Path, opts: &AnalysisOptions) -> Result<GroupReport> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let samples = parse::parse_samples(&raw)
        .with_context(|| format!("failed to parse {}", path.display()))?;
    let percentiles = stats::percentiles(&samples, &stats::DEFAULT_PERCENTILES)
        .with_context(|| format!("no usable samples in {}", path.display()))?;

    let summary = if opts.extended {
        Some(stats::summarize(&samples)?)
    } else {
        None
    };
    let histogram = match opts.histogram {
        Some(spec) => Some(stats::histogram(&samples, 0.0, spec.max, spec.bins)?),
        None => None,
    };

    Ok(GroupReport {
        group: group.to_string(),
        samples: samples.len(),
        percentiles,
        summary,
        histogram,
    })
}

/// Analyze one tagged-format file, producing up to three operation reports.
///
/// Operations whose post-trim series is too short for the smoothing window
/// are skipped with a warning; a trend that cannot be fitted (single
/// smoothed point) is likewise dropped rather than failing the group.
pub fn analyze_tagged(
    group: &str,
    path: &Path,
    opts: &AnalysisOptions,
) -> Result<Vec<OperationReport>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let tagged = parse::parse_tagged_samples(&raw);

    let mut reports = Vec::with_capacity(3);
    for (operation, series) in tagged.by_operation() {
        let smoothed = stats::moving_average(series, opts.window);
        if smoothed.is_empty() {
            tracing::warn!(
                "group {}: not enough {} samples for window {} ({} after trim), skipping",
                group,
                operation.name(),
                opts.window,
                series.len()
            );
            continue;
        }

        let percentiles = stats::percentiles_f64(&smoothed, &stats::DEFAULT_PERCENTILES)?;
        let summary = if opts.extended {
            Some(stats::summarize_f64(&smoothed)?)
        } else {
            None
        };
        let trend = if opts.trend {
            match stats::linear_trend(&smoothed) {
                Ok(trend) => Some(trend),
                Err(e) => {
                    tracing::warn!(
                        "group {}: cannot fit trend for {}: {}",
                        group,
                        operation.name(),
                        e
                    );
                    None
                }
            }
        } else {
            None
        };

        reports.push(OperationReport {
            group: group.to_string(),
            operation: operation.name(),
            smoothed_len: smoothed.len(),
            percentiles,
            summary,
            trend,
        });
    }

    Ok(reports)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_analyze_simple_percentiles() {
        let file = write_temp("10\n20\n30\n40\n99\n");
        let report =
            analyze_simple("1", file.path(), &AnalysisOptions::default()).unwrap();

        assert_eq!(report.group, "1");
        assert_eq!(report.samples, 4); // last line dropped
        assert_eq!(report.percentiles.len(), 7);
        let p50 = report.percentiles.iter().find(|p| p.p == 50.0).unwrap();
        assert_eq!(p50.value, 25.0);
        assert!(report.summary.is_none());
        assert!(report.histogram.is_none());
    }

    #[test]
    fn test_analyze_simple_extended_and_histogram() {
        let file = write_temp("100\n200\n300\nsentinel\n");
        let opts = AnalysisOptions {
            extended: true,
            histogram: Some(HistogramSpec {
                bins: 10,
                max: 1000.0,
            }),
            ..AnalysisOptions::default()
        };
        let report = analyze_simple("x", file.path(), &opts).unwrap();

        let summary = report.summary.unwrap();
        assert_eq!(summary.count, 3);
        assert!((summary.mean - 200.0).abs() < 1e-3);

        let histogram = report.histogram.unwrap();
        assert_eq!(histogram.counts.len(), 10);
        assert_eq!(histogram.total(), 3);
    }

    #[test]
    fn test_analyze_simple_corrupt_file_fails() {
        let file = write_temp("10\noops\n30\n");
        let err = analyze_simple("1", file.path(), &AnalysisOptions::default()).unwrap_err();
        assert!(err.to_string().contains("failed to parse"));
    }

    #[test]
    fn test_analyze_tagged_skips_short_series() {
        // Only READ survives the warm-up trim
        let mut contents = String::new();
        for i in 0..400 {
            contents.push_str(&format!("1 {}\n", i));
        }
        contents.push_str("0 1\n2 2\n");
        let file = write_temp(&contents);

        let opts = AnalysisOptions {
            window: 10,
            trend: true,
            ..AnalysisOptions::default()
        };
        let reports = analyze_tagged("g", file.path(), &opts).unwrap();

        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].operation, "READ");
        // 99 trimmed samples, window 10 -> 90 smoothed points
        assert_eq!(reports[0].smoothed_len, 90);
        // Input is linear in index, so the smoothed series is too
        let trend = reports[0].trend.unwrap();
        assert!((trend.slope - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_analyze_tagged_without_trend() {
        let contents: String = (0..400).map(|i| format!("0 {}\n", i)).collect();
        let file = write_temp(&contents);

        let opts = AnalysisOptions {
            window: 50,
            ..AnalysisOptions::default()
        };
        let reports = analyze_tagged("g", file.path(), &opts).unwrap();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].operation, "INSERT");
        assert!(reports[0].trend.is_none());
    }
}
