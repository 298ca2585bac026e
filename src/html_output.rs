//! HTML output format for timing reports
//!
//! A standalone page with embedded CSS: parameters, the results table and a
//! note on the order of images in the decoded series.

use crate::report::{StepRow, TimingReport};

/// HTML output formatter
#[derive(Debug)]
pub struct HtmlOutput {
    title: String,
}

impl Default for HtmlOutput {
    fn default() -> Self {
        Self::new("Multi-PLD ASL timing parameters")
    }
}

impl HtmlOutput {
    /// Create a new HTML output formatter with a page title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }

    /// Escape HTML special characters to prevent XSS
    fn escape_html(text: &str) -> String {
        text.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;")
            .replace('\'', "&#39;")
    }

    /// Generate embedded CSS styles
    fn generate_styles() -> &'static str {
        r#"
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            margin: 20px;
            background-color: #f5f5f5;
        }
        h1, h2 {
            color: #333;
        }
        table {
            border-collapse: collapse;
            background-color: white;
            box-shadow: 0 1px 3px rgba(0,0,0,0.1);
            margin-bottom: 20px;
        }
        th, td {
            border: 1px solid #ddd;
            padding: 8px;
            text-align: right;
        }
        th {
            background-color: #4a90d9;
            color: white;
            font-weight: bold;
        }
        tr:nth-child(even) {
            background-color: #f9f9f9;
        }
        .params th {
            background-color: #5cb85c;
            text-align: left;
        }
        .value {
            font-family: monospace;
        }
        .notes {
            color: #555;
            max-width: 60em;
        }
        .footer {
            margin-top: 20px;
            font-size: 0.8em;
            color: #888;
            text-align: center;
        }
        "#
    }

    fn format_step_row(row: &StepRow) -> String {
        format!(
            r#"<tr><td>{}</td><td class="value">{:.2}</td><td class="value">{:.2}</td></tr>"#,
            row.index, row.label_duration_ms, row.post_label_delay_ms
        )
    }

    fn render_parameters(report: &TimingReport) -> String {
        let params = &report.params;
        let rows = [
            ("CV4: post label delay (ms)", params.min_delay.to_string()),
            (
                "CV5: perfusion labeling time (ms)",
                params.total_label_duration.to_string(),
            ),
            ("CV6: number of delays", params.step_count.to_string()),
            ("CV7: delay linearity", params.linearity.to_string()),
        ];

        let mut html = String::new();
        html.push_str("    <h2>Parameters</h2>\n");
        html.push_str("    <table class=\"params\">\n");
        for (name, value) in rows {
            html.push_str(&format!(
                "        <tr><th>{}</th><td class=\"value\">{}</td></tr>\n",
                Self::escape_html(name),
                Self::escape_html(&value)
            ));
        }
        html.push_str("    </table>\n");
        html
    }

    fn render_notes(report: &TimingReport) -> String {
        let (combined_ld, combined_pld) = report.combined;
        let mut html = String::new();
        html.push_str("    <h2>Decoded series order</h2>\n");
        html.push_str("    <ol class=\"notes\">\n");
        html.push_str(&format!(
            "        <li>Perfusion-weighted image for each of the {} delays above</li>\n",
            report.steps.len()
        ));
        html.push_str(&format!(
            "        <li>Combined perfusion-weighted image (labeling time {:.2} ms, post label delay {:.2} ms)</li>\n",
            combined_ld, combined_pld
        ));
        html.push_str("        <li>Reference images</li>\n");
        html.push_str("    </ol>\n");
        html
    }

    /// Generate complete HTML document
    pub fn to_html(&self, report: &TimingReport) -> String {
        let mut html = String::new();
        let title = Self::escape_html(&self.title);

        html.push_str("<!DOCTYPE html>\n");
        html.push_str("<html lang=\"en\">\n");

        html.push_str("<head>\n");
        html.push_str("    <meta charset=\"UTF-8\">\n");
        html.push_str(
            "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
        );
        html.push_str(&format!("    <title>{}</title>\n", title));
        html.push_str("    <style>");
        html.push_str(Self::generate_styles());
        html.push_str("</style>\n");
        html.push_str("</head>\n");

        html.push_str("<body>\n");
        html.push_str(&format!("    <h1>{}</h1>\n", title));

        html.push_str(&Self::render_parameters(report));

        html.push_str("    <h2>Results</h2>\n");
        html.push_str("    <table>\n");
        html.push_str(
            "        <tr><th>step</th><th>labeling time (ms)</th><th>post labeling delay (ms)</th></tr>\n",
        );
        for row in &report.steps {
            html.push_str("        ");
            html.push_str(&Self::format_step_row(row));
            html.push('\n');
        }
        html.push_str("    </table>\n");

        html.push_str(&Self::render_notes(report));

        html.push_str("    <div class=\"footer\">\n");
        html.push_str(&format!(
            "        Generated by pldcalc {}\n",
            env!("CARGO_PKG_VERSION")
        ));
        html.push_str("    </div>\n");

        html.push_str("</body>\n");
        html.push_str("</html>\n");

        html
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timing::{compute_timing, TimingParams};

    fn report() -> TimingReport {
        let params = TimingParams::new(1000.0, 3500.0, 7, 1.0);
        let schedule = compute_timing(&params).unwrap();
        TimingReport::new(params, &schedule)
    }

    #[test]
    fn test_html_escape() {
        assert_eq!(HtmlOutput::escape_html("<script>"), "&lt;script&gt;");
        assert_eq!(HtmlOutput::escape_html("a&b"), "a&amp;b");
        assert_eq!(HtmlOutput::escape_html("\"test\""), "&quot;test&quot;");
        assert_eq!(HtmlOutput::escape_html("'test'"), "&#39;test&#39;");
    }

    #[test]
    fn test_html_document_structure() {
        let html = HtmlOutput::default().to_html(&report());
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Multi-PLD ASL timing parameters</title>"));
        assert!(html.contains("<style>"));
        assert!(html.trim_end().ends_with("</html>"));
    }

    #[test]
    fn test_html_rows_use_two_decimals() {
        let html = HtmlOutput::default().to_html(&report());
        assert!(html.contains(
            r#"<tr><td>1</td><td class="value">500.00</td><td class="value">1000.00</td></tr>"#
        ));
        assert_eq!(html.matches("<td class=\"value\">500.00</td>").count(), 7);
    }

    #[test]
    fn test_html_title_escaped() {
        let html = HtmlOutput::new("<b>site & protocol</b>").to_html(&report());
        assert!(html.contains("&lt;b&gt;site &amp; protocol&lt;/b&gt;"));
        assert!(!html.contains("<b>site"));
    }

    #[test]
    fn test_html_notes_list_combined_image() {
        let html = HtmlOutput::default().to_html(&report());
        assert!(html.contains("labeling time 3500.00 ms, post label delay 1000.00 ms"));
        assert!(html.contains("Reference images"));
    }
}
