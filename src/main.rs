use anyhow::{bail, Result};
use clap::Parser;
use medir::{
    cli::{Cli, OutputFormat},
    csv_output::CsvReport,
    discover,
    json_output::JsonReport,
    pipeline, text_output,
};
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
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    if cli.groups.is_empty() {
        bail!("Must specify at least one group label (--groups)");
    }
    if !cli.pattern.contains("{}") {
        bail!("Pattern must contain a {{}} group placeholder: {}", cli.pattern);
    }
    if cli.window == 0 {
        bail!("Moving-average window must be > 0");
    }
    if let Some(bins) = cli.histogram_bins {
        if bins == 0 {
            bail!("Histogram bin count must be > 0");
        }
        if cli.histogram_max <= 0.0 {
            bail!("Histogram max must be > 0, got {}", cli.histogram_max);
        }
    }

    let inputs = discover::discover(&cli.pattern, &cli.groups);
    if inputs.is_empty() {
        bail!("No input files found for pattern {}", cli.pattern);
    }

    let opts = pipeline::AnalysisOptions {
        window: cli.window,
        trend: cli.trend,
        extended: cli.stats_extended,
        histogram: cli.histogram_bins.map(|bins| pipeline::HistogramSpec {
            bins,
            max: cli.histogram_max,
        }),
    };

    let mut groups = Vec::new();
    let mut operations = Vec::new();
    for (group, path) in &inputs {
        if cli.tagged {
            operations.extend(pipeline::analyze_tagged(group, path, &opts)?);
        } else {
            groups.push(pipeline::analyze_simple(group, path, &opts)?);
        }
    }

    match cli.format {
        OutputFormat::Text => {
            for report in &groups {
                text_output::print_group_report(report);
            }
            for report in &operations {
                text_output::print_operation_report(report);
            }
        }
        OutputFormat::Json => {
            let report = JsonReport::new(groups, operations);
            println!("{}", report.to_json()?);
        }
        OutputFormat::Csv => {
            let mut csv = CsvReport::new(cli.stats_extended, cli.trend);
            for report in &groups {
                csv.add_group(report);
            }
            for report in &operations {
                csv.add_operation(report);
            }
            print!("{}", csv.to_csv());
        }
    }

    Ok(())
}
