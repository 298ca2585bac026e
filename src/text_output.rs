//! Human-readable table output (default format)

use crate::report::TimingReport;

const LD_HEADER: &str = "labeling time (ms)";
const PLD_HEADER: &str = "post labeling delay (ms)";

/// Render the report as an aligned text table
pub fn to_text(report: &TimingReport) -> String {
    let params = &report.params;
    let mut output = String::new();

    output.push_str("=== Multi-PLD ASL timing ===\n");
    output.push_str(&format!(
        "CV4 min delay: {} ms | CV5 labeling time: {} ms | CV6 steps: {} | CV7 linearity: {}\n\n",
        params.min_delay, params.total_label_duration, params.step_count, params.linearity
    ));

    output.push_str(&format!(
        "{:>4}  {:>ld$}  {:>pld$}\n",
        "step",
        LD_HEADER,
        PLD_HEADER,
        ld = LD_HEADER.len(),
        pld = PLD_HEADER.len()
    ));
    output.push_str(&format!(
        "{}\n",
        "─".repeat(4 + 2 + LD_HEADER.len() + 2 + PLD_HEADER.len())
    ));

    for row in &report.steps {
        output.push_str(&format!(
            "{:>4}  {:>ld$.2}  {:>pld$.2}\n",
            row.index,
            row.label_duration_ms,
            row.post_label_delay_ms,
            ld = LD_HEADER.len(),
            pld = PLD_HEADER.len()
        ));
    }

    let (combined_ld, combined_pld) = report.combined;
    output.push_str(&format!(
        "\nCombined image: labeling time {:.2} ms, post labeling delay {:.2} ms\n",
        combined_ld, combined_pld
    ));

    output
}
