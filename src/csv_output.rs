//! CSV output format for timing reports
//!
//! One row per step; the combined image is left out so the file loads as a
//! plain two-column table in spreadsheets and scanner planning tools.

use crate::report::TimingReport;

const HEADER: &str = "step,label_duration_ms,post_label_delay_ms";

/// Generate CSV output as string
pub fn to_csv(report: &TimingReport) -> String {
    let mut output = String::new();

    output.push_str(HEADER);
    output.push('\n');

    for row in &report.steps {
        output.push_str(&format!(
            "{},{:.2},{:.2}\n",
            row.index, row.label_duration_ms, row.post_label_delay_ms
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timing::{compute_timing, TimingParams};

    #[test]
    fn test_csv_linear_rows() {
        let params = TimingParams::new(1000.0, 3500.0, 7, 1.0);
        let schedule = compute_timing(&params).unwrap();
        let csv = to_csv(&TimingReport::new(params, &schedule));

        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], "step,label_duration_ms,post_label_delay_ms");
        assert_eq!(lines[1], "1,500.00,1000.00");
        assert_eq!(lines[7], "7,500.00,4000.00");
    }

    #[test]
    fn test_csv_field_count() {
        let params = TimingParams::new(1000.0, 3500.0, 3, 0.3);
        let schedule = compute_timing(&params).unwrap();
        let csv = to_csv(&TimingReport::new(params, &schedule));

        for line in csv.lines() {
            assert_eq!(line.split(',').count(), 3);
        }
    }
}
