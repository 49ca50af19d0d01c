//! CSV output format for analysis reports

use crate::pipeline::{GroupReport, OperationReport};
use crate::stats::DEFAULT_PERCENTILES;

/// CSV report formatter: one row per group or operation series
#[derive(Debug)]
pub struct CsvReport {
    rows: Vec<String>,
    include_summary: bool,
    include_trend: bool,
}

impl CsvReport {
    pub fn new(include_summary: bool, include_trend: bool) -> Self {
        Self {
            rows: Vec::new(),
            include_summary,
            include_trend,
        }
    }

    /// Generate the header row based on enabled column groups
    fn header(&self) -> String {
        let mut headers: Vec<String> = vec![
            "group".to_string(),
            "operation".to_string(),
            "samples".to_string(),
        ];
        for p in DEFAULT_PERCENTILES {
            headers.push(format!("p{}", p as i64));
        }
        if self.include_summary {
            for col in ["mean", "stddev", "min", "max"] {
                headers.push(col.to_string());
            }
        }
        if self.include_trend {
            headers.push("slope".to_string());
            headers.push("intercept".to_string());
        }
        headers.join(",")
    }

    /// Escape CSV field (handle commas, quotes, newlines)
    fn escape_field(field: &str) -> String {
        if field.contains(',') || field.contains('"') || field.contains('\n') {
            format!("\"{}\"", field.replace('"', "\"\""))
        } else {
            field.to_string()
        }
    }

    fn push_row(
        &mut self,
        group: &str,
        operation: &str,
        samples: usize,
        percentiles: &[crate::stats::Percentile],
        summary: Option<&crate::stats::SummaryStats>,
        trend: Option<&crate::stats::Trend>,
    ) {
        let mut fields = vec![
            Self::escape_field(group),
            operation.to_string(),
            samples.to_string(),
        ];
        for p in percentiles {
            fields.push(format!("{:.2}", p.value));
        }
        if self.include_summary {
            if let Some(s) = summary {
                fields.push(format!("{:.2}", s.mean));
                fields.push(format!("{:.2}", s.stddev));
                fields.push(format!("{:.2}", s.min));
                fields.push(format!("{:.2}", s.max));
            } else {
                fields.extend(std::iter::repeat(String::new()).take(4));
            }
        }
        if self.include_trend {
            if let Some(t) = trend {
                fields.push(format!("{:.4}", t.slope));
                fields.push(format!("{:.4}", t.intercept));
            } else {
                fields.push(String::new());
                fields.push(String::new());
            }
        }
        self.rows.push(fields.join(","));
    }

    /// Add a simple-format group report as one row
    pub fn add_group(&mut self, report: &GroupReport) {
        self.push_row(
            &report.group,
            "",
            report.samples,
            &report.percentiles,
            report.summary.as_ref(),
            None,
        );
    }

    /// Add a tagged-format operation report as one row
    pub fn add_operation(&mut self, report: &OperationReport) {
        self.push_row(
            &report.group,
            report.operation,
            report.smoothed_len,
            &report.percentiles,
            report.summary.as_ref(),
            report.trend.as_ref(),
        );
    }

    /// Generate CSV output as string
    pub fn to_csv(&self) -> String {
        let mut output = String::new();
        output.push_str(&self.header());
        output.push('\n');
        for row in &self.rows {
            output.push_str(row);
            output.push('\n');
        }
        output
    }
}
