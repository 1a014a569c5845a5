//! Rendering of graph data and reports.
//!
//! Supports pretty-printing, JSON serialization, and a day-indexed CSV table.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;
use csv::Writer;
use tracing::{debug, info};

use crate::analysis::types::{GraphData, Report};
use crate::error::InflammationError;

/// Output encodings for a report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One row per day, one column per series.
    #[default]
    Csv,
    /// The full report as pretty-printed JSON.
    Json,
}

/// Logs graph data using Rust's debug pretty-print format.
pub fn print_pretty(graph: &GraphData) {
    debug!("{:#?}", graph);
}

/// Logs a report as pretty-printed JSON.
pub fn print_json(report: &Report) -> Result<()> {
    info!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

/// Writes graph data as CSV: a `day` column followed by one column per label.
///
/// Every series must cover the same number of days.
pub fn write_csv<W: Write>(writer: W, graph: &GraphData) -> Result<()> {
    let days = graph.iter().next().map_or(0, |(_, values)| values.len());

    if let Some((index, (_, values))) = graph
        .iter()
        .enumerate()
        .find(|(_, (_, values))| values.len() != days)
    {
        return Err(InflammationError::ShapeMismatch {
            what: "series",
            index,
            expected: days,
            found: values.len(),
        }
        .into());
    }

    let mut wtr = Writer::from_writer(writer);

    wtr.write_record(std::iter::once("day").chain(graph.labels()))?;

    for day in 0..days {
        let mut record = vec![day.to_string()];
        record.extend(graph.iter().map(|(_, values)| values[day].to_string()));
        wtr.write_record(&record)?;
    }

    wtr.flush()?;
    Ok(())
}

/// Writes a report as pretty-printed JSON.
pub fn write_json<W: Write>(mut writer: W, report: &Report) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, report)?;
    writeln!(writer)?;
    Ok(())
}

/// Renders a report in `format` to any writer.
pub fn render<W: Write>(writer: W, report: &Report, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Csv => write_csv(writer, &report.graph),
        OutputFormat::Json => write_json(writer, report),
    }
}

/// Creates (or truncates) `path` and renders the report into it.
pub fn write_report(path: &Path, report: &Report, format: OutputFormat) -> Result<()> {
    debug!(path = %path.display(), ?format, "Writing report");

    let file = File::create(path)
        .with_context(|| format!("failed to create report file {}", path.display()))?;
    render(file, report, format)
}
