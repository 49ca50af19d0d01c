//! JSON output format for analysis reports

use serde::Serialize;

use crate::pipeline::{GroupReport, OperationReport};

/// Top-level JSON document: one entry per analyzed group (simple format)
/// and one per operation series (tagged format)
#[derive(Debug, Serialize)]
pub struct JsonReport {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<GroupReport>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub operations: Vec<OperationReport>,
}

impl JsonReport {
    pub fn new(groups: Vec<GroupReport>, operations: Vec<OperationReport>) -> Self {
        Self { groups, operations }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::Percentile;

    fn sample_group() -> GroupReport {
        GroupReport {
            group: "5".to_string(),
            samples: 4,
            percentiles: vec![Percentile { p: 50.0, value: 25.0 }],
            summary: None,
            histogram: None,
        }
    }

    #[test]
    fn test_json_report_serializes_groups() {
        let report = JsonReport::new(vec![sample_group()], Vec::new());
        let json = report.to_json().unwrap();
        assert!(json.contains("\"group\": \"5\""));
        assert!(json.contains("\"samples\": 4"));
        assert!(json.contains("\"value\": 25.0"));
        // Empty sections and unset options stay out of the document
        assert!(!json.contains("operations"));
        assert!(!json.contains("summary"));
        assert!(!json.contains("histogram"));
    }

    #[test]
    fn test_json_report_round_trips_as_value() {
        let report = JsonReport::new(vec![sample_group()], Vec::new());
        let parsed: serde_json::Value =
            serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(parsed["groups"][0]["percentiles"][0]["p"], 50.0);
    }
}
