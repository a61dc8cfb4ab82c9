use crate::OutputFormat;
use anyhow::Result;
use console::style;
use kestrel_core::log::{DateFilter, LogReader};
use kestrel_core::report::{ReportRegistry, ReportRow};
use std::path::PathBuf;

/// Build the named report over the given log files
///
/// Both argument checks run before any file is opened, so a bad date or an
/// unknown report name fails without touching the input.
pub fn build_report(
    files: &[PathBuf],
    report_name: &str,
    date: Option<&str>,
) -> kestrel_core::Result<Vec<ReportRow>> {
    let filter = date.map(DateFilter::parse).transpose()?;

    let registry = ReportRegistry::default();
    let report = registry.get(report_name).ok_or_else(|| {
        tracing::debug!(
            "Unknown report '{}'; registered: {}",
            report_name,
            registry.names().join(", ")
        );
        kestrel_core::Error::UnknownReport(report_name.to_string())
    })?;

    let lines = LogReader::read_files(files)?;

    tracing::debug!(
        "Building '{}' report over {} line(s)",
        report_name,
        lines.len()
    );

    Ok(report.rows(&lines, filter.as_ref()))
}

pub fn execute(
    files: &[PathBuf],
    report_name: &str,
    date: Option<&str>,
    format: OutputFormat,
) -> Result<()> {
    let rows = build_report(files, report_name, date)?;

    match format {
        OutputFormat::Json => output_json(&rows)?,
        OutputFormat::Table => output_table(&rows),
    }

    Ok(())
}

fn output_json(rows: &[ReportRow]) -> Result<()> {
    let json = serde_json::to_string_pretty(rows)?;
    println!("{}", json);
    Ok(())
}

fn output_table(rows: &[ReportRow]) {
    if rows.is_empty() {
        println!("No data to build report.");
        return;
    }

    let totals: Vec<String> = rows.iter().map(|r| r.total_requests.to_string()).collect();
    let averages: Vec<String> = rows
        .iter()
        .map(|r| format!("{:.3}", r.avg_response_time))
        .collect();

    let handler_width = rows
        .iter()
        .map(|r| r.handler.len())
        .chain(["handler".len()])
        .max()
        .unwrap();
    let total_width = totals
        .iter()
        .map(|t| t.len())
        .chain(["total".len()])
        .max()
        .unwrap();
    let avg_width = averages
        .iter()
        .map(|a| a.len())
        .chain(["avg_response_time".len()])
        .max()
        .unwrap();

    let header = format!(
        "{:<handler_width$}  {:>total_width$}  {:>avg_width$}",
        "handler", "total", "avg_response_time"
    );
    println!("{}", style(header).bold());

    for ((row, total), avg) in rows.iter().zip(&totals).zip(&averages) {
        println!(
            "{:<handler_width$}  {:>total_width$}  {:>avg_width$}",
            row.handler, total, avg
        );
    }
}
