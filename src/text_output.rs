//! Human-readable text output for analysis reports

use crate::pipeline::{GroupReport, OperationReport};
use crate::stats::{Percentile, SummaryStats};

fn point_label(p: f64) -> String {
    if p.fract() == 0.0 {
        format!("{}", p as i64)
    } else {
        format!("{}", p)
    }
}

fn print_percentiles(percentiles: &[Percentile]) {
    for p in percentiles {
        println!("  P{:<4} {:>14.2} ns", point_label(p.p), p.value);
    }
}

fn print_summary(summary: &SummaryStats) {
    println!("  Mean:    {:>12.2} ns", summary.mean);
    println!("  Std Dev: {:>12.2} ns", summary.stddev);
    println!("  Min:     {:>12.2} ns", summary.min);
    println!("  Max:     {:>12.2} ns", summary.max);
}

/// Print one simple-format group report to stdout
pub fn print_group_report(report: &GroupReport) {
    println!(
        "\nPercentiles for group {} ({} samples):",
        report.group, report.samples
    );
    print_percentiles(&report.percentiles);
    if let Some(summary) = &report.summary {
        print_summary(summary);
    }
    if let Some(histogram) = &report.histogram {
        println!(
            "  Histogram: {} bins over [{:.0}, {:.0}] ns, {} samples in range",
            histogram.counts.len(),
            histogram.min,
            histogram.max,
            histogram.total()
        );
    }
}

/// Print one tagged-format operation report to stdout
pub fn print_operation_report(report: &OperationReport) {
    println!(
        "\n{} (group {}, {} smoothed points):",
        report.operation, report.group, report.smoothed_len
    );
    print_percentiles(&report.percentiles);
    if let Some(summary) = &report.summary {
        print_summary(summary);
    }
    if let Some(trend) = &report.trend {
        println!(
            "  Trend:   slope {:.4} ns/sample, intercept {:.2} ns",
            trend.slope, trend.intercept
        );
    }
}
