use anyhow::{Context, Result};
use clap::Parser;
use errsig::cli::{Cli, OutputFormat};
use errsig::comparison::{analyze, Analysis};
use errsig::csv_output::CsvOutput;
use errsig::json_output::JsonReport;
use errsig::loader;
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::from_default_env().add_directive(tracing::Level::TRACE.into())
    } else {
        // Indeterminate verdicts are still worth a warning without --debug
        EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into())
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Render the analysis in the requested format
fn render(analysis: &Analysis, format: OutputFormat, error_bars: bool) -> Result<String> {
    let output = match format {
        OutputFormat::Text => analysis.to_report_string(),
        OutputFormat::Json => JsonReport::new(analysis, error_bars)
            .to_json()
            .context("Failed to serialize JSON report")?,
        OutputFormat::Csv => CsvOutput::new(analysis, error_bars).to_csv(),
    };
    Ok(output)
}

fn main() -> Result<()> {
    let args = Cli::parse();

    init_tracing(args.debug);

    let config = args.analysis_config()?;
    tracing::debug!(?config, "resolved analysis configuration");

    let table = loader::load_table(&args.input, &config.reference_column)?;
    let registry = table.into_registry(&config)?;

    let analysis = analyze(&registry, &config)
        .with_context(|| format!("Analysis of {} failed", args.input.display()))?;

    let output = render(&analysis, args.format, args.error_bars)?;
    print!("{}", output);
    if args.format == OutputFormat::Json {
        println!();
    }

    Ok(())
}
