//! JSON output format for timing reports

use crate::report::TimingReport;
use serde::{Deserialize, Serialize};

/// Input parameters as echoed in the output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonParameters {
    /// CV4
    pub min_delay_ms: f64,
    /// CV5
    pub total_label_duration_ms: f64,
    /// CV6
    pub step_count: usize,
    /// CV7
    pub linearity: f64,
}

/// A single acquisition step
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonStep {
    /// 1-based acquisition order
    pub index: usize,
    pub label_duration_ms: f64,
    pub post_label_delay_ms: f64,
}

/// Combined perfusion image timing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonCombined {
    pub label_duration_ms: f64,
    pub post_label_delay_ms: f64,
}

/// Summary values across all steps
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonSummary {
    pub step_count: usize,
    /// Sum of the step label durations
    pub total_label_duration_ms: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_post_label_delay_ms: Option<f64>,
}

/// Root JSON output structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonOutput {
    /// Format version identifier
    pub version: String,
    /// Format name
    pub format: String,
    pub parameters: JsonParameters,
    pub steps: Vec<JsonStep>,
    pub combined: JsonCombined,
    pub summary: JsonSummary,
}

impl JsonOutput {
    pub fn from_report(report: &TimingReport) -> Self {
        let params = &report.params;
        let steps: Vec<JsonStep> = report
            .steps
            .iter()
            .map(|row| JsonStep {
                index: row.index,
                label_duration_ms: row.label_duration_ms,
                post_label_delay_ms: row.post_label_delay_ms,
            })
            .collect();

        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            format: "pldcalc-json-v1".to_string(),
            parameters: JsonParameters {
                min_delay_ms: params.min_delay,
                total_label_duration_ms: params.total_label_duration,
                step_count: params.step_count,
                linearity: params.linearity,
            },
            summary: JsonSummary {
                step_count: steps.len(),
                total_label_duration_ms: report.total_label_duration(),
                last_post_label_delay_ms: report.last_post_label_delay(),
            },
            steps,
            combined: JsonCombined {
                label_duration_ms: report.combined.0,
                post_label_delay_ms: report.combined.1,
            },
        }
    }

    /// Serialize to pretty-printed JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timing::{compute_timing, TimingParams};

    #[test]
    fn test_json_structure() {
        let params = TimingParams::new(1000.0, 3500.0, 7, 1.0);
        let schedule = compute_timing(&params).unwrap();
        let output = JsonOutput::from_report(&TimingReport::new(params, &schedule));

        let json = output.to_json().unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed["format"], "pldcalc-json-v1");
        assert_eq!(parsed["parameters"]["step_count"], 7);
        assert_eq!(parsed["steps"].as_array().unwrap().len(), 7);
        assert_eq!(parsed["steps"][0]["index"], 1);
        assert_eq!(parsed["steps"][3]["post_label_delay_ms"], 2500.0);
        assert_eq!(parsed["combined"]["label_duration_ms"], 3500.0);
        assert_eq!(parsed["summary"]["last_post_label_delay_ms"], 4000.0);
    }

    #[test]
    fn test_json_round_trips_into_struct() {
        let params = TimingParams::new(1500.0, 3000.0, 3, 0.0);
        let schedule = compute_timing(&params).unwrap();
        let json = JsonOutput::from_report(&TimingReport::new(params, &schedule))
            .to_json()
            .unwrap();

        let back: JsonOutput = serde_json::from_str(&json).unwrap();
        assert_eq!(back.steps.len(), 3);
        assert_eq!(back.steps[0].post_label_delay_ms, 1500.0);
        assert_eq!(back.parameters.linearity, 0.0);
    }
}
