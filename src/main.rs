//! CLI entry point for the inflammation analysis tool.
//!
//! Summarises each input file per day (average, max, min), or with
//! `--full-data-analysis` computes the standard deviation by day of the daily
//! means of every data file next to the first input.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use inflammation::analysis::cross_dataset::analyse_data;
use inflammation::analysis::summary::{daily_summary, standard_deviation_graph};
use inflammation::analysis::types::Report;
use inflammation::output::{OutputFormat, print_json, print_pretty, render, write_report};
use inflammation::source::SourceFormat;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "inflammation-analysis")]
#[command(about = "A basic patient inflammation data management system", long_about = None)]
struct Cli {
    /// Input CSV(s) containing inflammation series for each patient
    #[arg(value_name = "INFILES", required = true)]
    infiles: Vec<PathBuf>,

    /// Standard deviation by day across every data file in the first input's directory
    #[arg(long)]
    full_data_analysis: bool,

    /// Output encoding
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Csv)]
    format: OutputFormat,

    /// File to write the report to instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    let _file_guard = init_tracing()?;

    let cli = Cli::parse();

    if cli.full_data_analysis {
        full_data_analysis(&cli)?;
    } else {
        for infile in &cli.infiles {
            summarise_file(&cli, infile)?;
        }
    }

    Ok(())
}

/// Logging setup: colored stderr + JSON rolling log file.
fn init_tracing() -> Result<WorkerGuard> {
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/inflammation.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("inflammation.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    Ok(file_guard)
}

/// Daily average, max and min of a single data file.
#[tracing::instrument(skip(cli, infile), fields(infile = %infile.display()))]
fn summarise_file(cli: &Cli, infile: &Path) -> Result<()> {
    let table = SourceFormat::from_path(infile)
        .and_then(|format| format.load(infile))
        .with_context(|| format!("failed to load {}", infile.display()))?;

    info!(
        patients = table.patients(),
        days = table.days(),
        "Summarising table"
    );

    let graph = daily_summary(&table)
        .with_context(|| format!("failed to summarise {}", infile.display()))?;
    let report = Report::new(infile.display().to_string(), graph);

    let output = cli
        .output
        .as_deref()
        .map(|path| per_input_path(path, infile, cli.infiles.len() > 1));

    emit(&report, cli.format, output.as_deref())
}

/// Standard deviation by day across all data files next to the first input.
fn full_data_analysis(cli: &Cli) -> Result<()> {
    let first = cli.infiles.first().context("no input files given")?;
    let format = SourceFormat::from_path(first)?;
    let dir = match first.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };

    info!(dir = %dir.display(), %format, "Running full data analysis");

    let source = format.data_source(&dir);
    let series = analyse_data(&*source)
        .with_context(|| format!("failed to analyse data in {}", dir.display()))?;

    let report = Report::new(dir.display().to_string(), standard_deviation_graph(series));
    emit(&report, cli.format, cli.output.as_deref())
}

/// Output path for one of several inputs: `report.csv` becomes `report-<stem>.csv`.
fn per_input_path(output: &Path, infile: &Path, several: bool) -> PathBuf {
    if !several {
        return output.to_path_buf();
    }

    let input_stem = infile.file_stem().unwrap_or_default().to_string_lossy();
    let output_stem = output.file_stem().unwrap_or_default().to_string_lossy();
    let file_name = match output.extension() {
        Some(ext) => format!("{output_stem}-{input_stem}.{}", ext.to_string_lossy()),
        None => format!("{output_stem}-{input_stem}"),
    };

    output.with_file_name(file_name)
}

fn emit(report: &Report, format: OutputFormat, output: Option<&Path>) -> Result<()> {
    print_pretty(&report.graph);

    match output {
        Some(path) => {
            if format == OutputFormat::Json {
                print_json(report)?;
            }
            write_report(path, report, format)?;
            info!(path = %path.display(), "Report written");
        }
        None => render(std::io::stdout().lock(), report, format)?,
    }

    Ok(())
}
