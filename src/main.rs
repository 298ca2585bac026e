use anyhow::{Context, Result};
use clap::Parser;
use pldcalc::cli::{Cli, OutputFormat};
use pldcalc::config::Config;
use pldcalc::html_output::HtmlOutput;
use pldcalc::json_output::JsonOutput;
use pldcalc::params::check_finite;
use pldcalc::report::TimingReport;
use pldcalc::timing::{compute_timing, TimingParams};
use pldcalc::{csv_output, text_output};
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::TRACE.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

/// Command-line values win over config-file defaults
fn resolve_params(args: &Cli, config: &Config) -> TimingParams {
    let defaults = config.defaults.to_params();
    TimingParams {
        min_delay: args.min_delay.unwrap_or(defaults.min_delay),
        total_label_duration: args.label_duration.unwrap_or(defaults.total_label_duration),
        step_count: args.steps.unwrap_or(defaults.step_count),
        linearity: args.linearity.unwrap_or(defaults.linearity),
    }
}

fn render(format: OutputFormat, report: &TimingReport, title: Option<&str>) -> Result<String> {
    let rendered = match format {
        OutputFormat::Text => text_output::to_text(report),
        OutputFormat::Json => {
            let mut json = JsonOutput::from_report(report)
                .to_json()
                .context("Failed to serialize JSON output")?;
            json.push('\n');
            json
        }
        OutputFormat::Csv => csv_output::to_csv(report),
        OutputFormat::Html => match title {
            Some(title) => HtmlOutput::new(title).to_html(report),
            None => HtmlOutput::default().to_html(report),
        },
    };
    Ok(rendered)
}

fn main() -> Result<()> {
    let args = Cli::parse();

    init_tracing(args.debug);

    let config = match &args.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };

    let params = resolve_params(&args, &config);
    tracing::debug!(?params, "resolved parameters");

    check_finite(&params)?;
    if args.no_limits {
        tracing::debug!("input limits disabled");
    } else {
        config.limits.validate(&params)?;
    }

    let schedule = compute_timing(&params)?;

    for step in schedule.steps() {
        tracing::debug!(
            ld = step.label_duration,
            pld = step.post_label_delay,
            "timing step"
        );
    }

    let report = TimingReport::new(params, &schedule);
    let rendered = render(args.format, &report, args.title.as_deref())?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, rendered)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), "report written");
        }
        None => print!("{}", rendered),
    }

    Ok(())
}
